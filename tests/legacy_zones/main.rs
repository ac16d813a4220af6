use apmv::generator::{apply_apmv_program, count_comfort_hours_program};
use apmv::{apply_apmv_setpoints, ApmvOptions, BuildingModel, Idf};

const MODEL: &str = "./tests/legacy_zones/model.idf";

fn options() -> ApmvOptions {
    ApmvOptions {
        verbose: false,
        ..ApmvOptions::default()
    }
}

fn program_lines(model: &Idf, name: &str) -> Vec<String> {
    let id = model
        .find("EnergyManagementSystem:Program", name)
        .unwrap()
        .unwrap_or_else(|| panic!("Program '{}' not found", name));
    model.extensible_values(id, "Program_Line_#").unwrap()
}

fn field(model: &Idf, class: &str, name: &str, field: &str) -> Option<String> {
    let id = model
        .find(class, name)
        .unwrap()
        .unwrap_or_else(|| panic!("{} '{}' not found", class, name));
    model.get_field(id, field).unwrap()
}

#[test]
fn legacy_targets() {
    let mut model = Idf::from_file(MODEL).unwrap();
    let report = apply_apmv_setpoints(&mut model, &options()).unwrap();

    // People point directly to their zones
    let keys: Vec<&str> = report.targets.iter().map(|t| t.lookup_key.as_str()).collect();
    assert_eq!(keys, vec!["Living Room", "Bed-Room 1"]);
    let suffixes: Vec<&str> = report.targets.iter().map(|t| t.ems_suffix.as_str()).collect();
    assert_eq!(suffixes, vec!["Living_Room", "Bed_Room_1"]);
    assert!(report.warnings.is_empty());

    // Sensors are keyed by the People
    assert_eq!(
        field(
            &model,
            "EnergyManagementSystem:Sensor",
            "PMV_Living_Room",
            "OutputVariable_or_OutputMeter_Index_Key_Name"
        ),
        Some("Living Room People".to_string())
    );
    assert_eq!(
        field(
            &model,
            "EnergyManagementSystem:Sensor",
            "People_Occupant_Count_Bed_Room_1",
            "OutputVariable_or_OutputMeter_Name"
        ),
        Some("People Occupant Count".to_string())
    );

    // Actuators act on the schedules of the zone
    assert_eq!(
        field(
            &model,
            "EnergyManagementSystem:Actuator",
            "PMV_H_SP_act_Bed_Room_1",
            "Actuated_Component_Unique_Name"
        ),
        Some("PMV_H_SP_Bed-Room 1".to_string())
    );
    assert_eq!(
        field(
            &model,
            "EnergyManagementSystem:Actuator",
            "PMV_C_SP_act_Living_Room",
            "Actuated_Component_Control_Type"
        ),
        Some("Schedule Value".to_string())
    );
}

#[test]
fn legacy_thermostats() {
    let mut model = Idf::from_file(MODEL).unwrap();
    apply_apmv_setpoints(&mut model, &options()).unwrap();

    // The temperature thermostat is gone, and so is its setpoint
    assert!(model.objects("ZoneControl:Thermostat").unwrap().is_empty());
    assert!(model
        .objects("ThermostatSetpoint:DualSetpoint")
        .unwrap()
        .is_empty());

    // Both zones are controlled by their PMV
    let thermostats = model
        .objects("ZoneControl:Thermostat:ThermalComfort")
        .unwrap();
    assert_eq!(thermostats.len(), 2);
    assert_eq!(
        field(
            &model,
            "ThermostatSetpoint:ThermalComfort:Fanger:DualSetpoint",
            "Fanger Setpoint Living Room",
            "Fanger_Thermal_Comfort_Cooling_Schedule_Name"
        ),
        Some("PMV_C_SP_Living Room".to_string())
    );
    assert_eq!(
        field(&model, "Schedule:Compact", "PMV_H_SP_Living Room", "Field_4"),
        Some("-0.5".to_string())
    );
}

#[test]
fn legacy_programs() {
    let mut model = Idf::from_file(MODEL).unwrap();
    apply_apmv_setpoints(&mut model, &options()).unwrap();

    assert_eq!(
        program_lines(&model, "apply_aPMV_Bed_Room_1"),
        apply_apmv_program("Bed_Room_1").lines()
    );
    assert_eq!(
        program_lines(&model, "count_aPMV_comfort_hours_Living_Room"),
        count_comfort_hours_program("Living_Room").lines()
    );
    assert_eq!(
        program_lines(&model, "set_cooling_season_input_data"),
        vec!["set CoolSeasonStart = 120", "set CoolSeasonEnd = 210"]
    );
}

#[test]
fn legacy_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.idf");

    let mut model = Idf::from_file(MODEL).unwrap();
    apply_apmv_setpoints(&mut model, &options()).unwrap();
    model.write_file(&path).unwrap();

    let mut again = Idf::from_file(&path).unwrap();
    assert_eq!(again.len(), model.len());

    // Objects this crate does not know about are kept
    let materials = again.objects("Material").unwrap();
    assert_eq!(materials.len(), 1);
    assert!(again.to_string().contains("Brick,"));

    // OutputControl:Files does not exist in 7.2
    assert!(again.objects("OutputControl:Files").is_err());

    // Applying again does not add anything
    let report = apply_apmv_setpoints(&mut again, &options()).unwrap();
    assert_eq!(report.sensors, 0);
    assert_eq!(report.actuators, 0);
    assert_eq!(report.output_variables, 0);
    assert_eq!(again.len(), model.len());
}
