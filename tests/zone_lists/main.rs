use apmv::{
    apply_apmv_setpoints, available_target_names, ApmvOptions, BuildingModel, Idf, Parameter,
    Warning,
};

const MODEL: &str = "./tests/zone_lists/model.idf";
const OPTIONS: &str = "./tests/zone_lists/options.json5";

fn first_line(model: &Idf, program: &str) -> Option<String> {
    let id = model
        .find("EnergyManagementSystem:Program", program)
        .unwrap()
        .unwrap_or_else(|| panic!("Program '{}' not found", program));
    model.get_field(id, "Program_Line_1").unwrap()
}

#[test]
fn zone_list_target_names() {
    let model = Idf::from_file(MODEL).unwrap();
    assert_eq!(
        available_target_names(&model).unwrap(),
        vec![
            "Block1:Office Staff".to_string(),
            "Block1:Meeting Staff".to_string(),
            "Block2:Lab".to_string(),
        ]
    );
}

#[test]
fn zone_list_per_target_options() {
    let options = ApmvOptions::from_file(OPTIONS).unwrap();
    let mut model = Idf::from_file(MODEL).unwrap();
    let report = apply_apmv_setpoints(&mut model, &options).unwrap();

    assert_eq!(
        report.warnings,
        vec![
            Warning::UnknownTargetInMapping {
                parameter: Parameter::AdapCoeffCooling,
                key: "Attic".to_string(),
            },
            Warning::DefaultSubstituted {
                parameter: Parameter::AdapCoeffCooling,
                target: "Block1:Meeting Staff".to_string(),
                default: 0.35,
            },
        ]
    );

    assert_eq!(
        first_line(&model, "set_zone_input_data_Block1_Office_Staff"),
        Some("set adap_coeff_cooling_Block1_Office_Staff = 0.25".to_string())
    );
    assert_eq!(
        first_line(&model, "set_zone_input_data_Block1_Meeting_Staff"),
        Some("set adap_coeff_cooling_Block1_Meeting_Staff = 0.35".to_string())
    );
    assert_eq!(
        first_line(&model, "set_zone_input_data_Block2_Lab"),
        Some("set adap_coeff_cooling_Block2_Lab = 0.3".to_string())
    );

    // 01/06 and 01/10
    assert_eq!(
        first_line(&model, "set_cooling_season_input_data"),
        Some("set CoolSeasonStart = 152".to_string())
    );

    // 11 EMS outputs per target and 2 schedules per zone, at two frequencies
    assert_eq!(report.output_variables, 2 * (11 * 3 + 2 * 3));
}

#[test]
fn zone_list_existing_comfort_thermostat() {
    let options = ApmvOptions::from_file(OPTIONS).unwrap();
    let mut model = Idf::from_file(MODEL).unwrap();
    apply_apmv_setpoints(&mut model, &options).unwrap();

    let thermostats = model
        .objects("ZoneControl:Thermostat:ThermalComfort")
        .unwrap();
    assert_eq!(thermostats.len(), 3);

    // The Lab keeps its thermostat, now driven by a Fanger dual setpoint
    let lab = model
        .find("ZoneControl:Thermostat:ThermalComfort", "Lab Comfort")
        .unwrap()
        .unwrap();
    assert_eq!(
        model
            .get_field(lab, "Thermal_Comfort_Control_1_Object_Type")
            .unwrap(),
        Some("ThermostatSetpoint:ThermalComfort:Fanger:DualSetpoint".to_string())
    );
    assert_eq!(
        model.get_field(lab, "Thermal_Comfort_Control_1_Name").unwrap(),
        Some("Fanger Setpoint Block2:Lab".to_string())
    );
    assert_eq!(
        model
            .get_field(lab, "Thermal_Comfort_Control_Type_Schedule_Name")
            .unwrap(),
        Some("Lab Comfort Control".to_string())
    );
    let fanger = model
        .find(
            "ThermostatSetpoint:ThermalComfort:Fanger:DualSetpoint",
            "Fanger Setpoint Block2:Lab",
        )
        .unwrap()
        .unwrap();
    assert_eq!(
        model
            .get_field(fanger, "Fanger_Thermal_Comfort_Heating_Schedule_Name")
            .unwrap(),
        Some("PMV_H_SP_Block2:Lab".to_string())
    );
}

#[test]
fn zone_list_output_files() {
    let options = ApmvOptions::from_file(OPTIONS).unwrap();
    let mut model = Idf::from_file(MODEL).unwrap();
    apply_apmv_setpoints(&mut model, &options).unwrap();

    let ids = model.objects("OutputControl:Files").unwrap();
    assert_eq!(ids.len(), 1);
    for field in ["Output_CSV", "Output_MTR", "Output_ESO"] {
        assert_eq!(model.get_field(ids[0], field).unwrap(), Some("Yes".to_string()));
    }
    assert_eq!(
        model.get_field(ids[0], "Output_EIO").unwrap(),
        Some("No".to_string())
    );
}

#[test]
fn zone_list_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.idf");
    let options = ApmvOptions::from_file(OPTIONS).unwrap();

    let mut model = Idf::from_file(MODEL).unwrap();
    apply_apmv_setpoints(&mut model, &options).unwrap();
    model.write_file(&path).unwrap();

    let mut again = Idf::from_file(&path).unwrap();
    let written = again.to_string();
    let report = apply_apmv_setpoints(&mut again, &options).unwrap();
    assert_eq!(report.output_variables, 0);
    assert_eq!(report.programs.len(), 2 + 3 * 4);
    assert_eq!(again.to_string(), written);
}
