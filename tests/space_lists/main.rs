use apmv::{apply_apmv_setpoints, ApmvOptions, Assignment, BuildingModel, Idf, Warning};

const MODEL: &str = "./tests/space_lists/model.idf";

fn apply() -> (Idf, apmv::ApplyReport) {
    let mut model = Idf::from_file(MODEL).unwrap();
    let options = ApmvOptions {
        verbose: false,
        ..ApmvOptions::default()
    };
    let report = apply_apmv_setpoints(&mut model, &options).unwrap();
    (model, report)
}

#[test]
fn space_list_targets() {
    let (_, report) = apply();

    let keys: Vec<&str> = report.targets.iter().map(|t| t.lookup_key.as_str()).collect();
    assert_eq!(keys, vec!["Desk A Staff", "Desk B Staff", "Kitchenette Cooks"]);
    assert!(report.targets.iter().all(|t| t.owning_zone == "Open Plan"));
    assert_eq!(report.targets[0].assignment, Assignment::SpaceList);
    assert_eq!(report.targets[2].assignment, Assignment::Space);

    // Sensors read the People within each space
    assert_eq!(report.targets[1].sensor_key, "Desk B Staff");
    assert_eq!(report.targets[2].ems_suffix, "Kitchenette_Cooks");

    // Desk C does not exist
    assert_eq!(
        report.warnings,
        vec![Warning::SpaceListMemberWithoutSpace {
            space: "Desk C".to_string(),
            space_list: "Desks".to_string(),
            people: "Staff".to_string(),
        }]
    );
}

#[test]
fn space_list_shared_thermostat() {
    let (model, report) = apply();

    // One zone, so one thermostat and one pair of schedules
    assert_eq!(
        model
            .objects("ZoneControl:Thermostat:ThermalComfort")
            .unwrap()
            .len(),
        1
    );
    let schedules = model.names("Schedule:Compact").unwrap();
    assert!(schedules.contains(&"PMV_H_SP_Open Plan".to_string()));
    assert!(schedules.contains(&"PMV_C_SP_Open Plan".to_string()));

    // ... driven by the actuators of every target
    assert_eq!(report.actuators, 6);
    for id in model.objects("EnergyManagementSystem:Actuator").unwrap() {
        let schedule = model
            .get_field(id, "Actuated_Component_Unique_Name")
            .unwrap()
            .unwrap();
        assert!(schedule.ends_with("_SP_Open Plan"));
    }
}

#[test]
fn space_list_outputs() {
    let (model, _) = apply();

    // The air velocity schedule of the Staff is reported, once per frequency
    let mut n = 0;
    for id in model.objects("Output:Variable").unwrap() {
        if model.get_field(id, "Key_Value").unwrap() == Some("Desk Air Velocity".to_string()) {
            n += 1;
        }
    }
    assert_eq!(n, 1);

    // Programs are called at the beginning of each timestep
    let managers = model.names("EnergyManagementSystem:ProgramCallingManager").unwrap();
    assert_eq!(managers.len(), 2 + 3 * 4);
}
