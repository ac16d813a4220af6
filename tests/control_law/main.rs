use apmv::generator::{
    cooling_season_input_program, cooling_season_program, target_programs,
    COOLING_SEASON_INPUT_PROGRAM, COOLING_SEASON_PROGRAM,
};
use apmv::{
    apply_apmv_setpoints, ApmvOptions, BuildingModel, Float, Idf, ParameterInput, SeasonDay,
};
use erl::{Env, Program};

fn options() -> ApmvOptions {
    ApmvOptions {
        cooling_season_start: SeasonDay::DayMonth("26/11".to_string()),
        cooling_season_end: SeasonDay::DayMonth("31/03".to_string()),
        pmv_heating_sp: ParameterInput::Scalar(-0.5),
        pmv_cooling_sp: ParameterInput::Scalar(0.5),
        verbose: false,
        ..ApmvOptions::default()
    }
}

fn model_lines(model: &Idf, name: &str) -> Vec<String> {
    let id = model
        .find("EnergyManagementSystem:Program", name)
        .unwrap()
        .unwrap();
    model.extensible_values(id, "Program_Line_#").unwrap()
}

/// Runs every program of the first target, as EnergyPlus would at the
/// beginning of a timestep
fn run_timestep(
    programs: &[Program],
    day: u16,
    pmv: Float,
    occupants: Float,
) -> Env {
    let mut env = Env::new()
        .with("DayOfYear", day.into())
        .with("ZoneTimeStep", 0.25)
        .with("PMV_Z1_P", pmv)
        .with("People_Occupant_Count_Z1_P", occupants);
    for p in programs {
        p.run(&mut env).unwrap();
    }
    env
}

fn approx(a: Float, b: Float) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn control_law_programs_in_model() {
    let mut model = test_models::get_zone_list_test_model().unwrap();
    let report = apply_apmv_setpoints(&mut model, &options()).unwrap();
    let season = options().season().unwrap();
    assert_eq!((season.start, season.end), (330, 90));

    assert_eq!(
        model_lines(&model, COOLING_SEASON_INPUT_PROGRAM),
        cooling_season_input_program(&season).lines()
    );
    assert_eq!(
        model_lines(&model, COOLING_SEASON_PROGRAM),
        cooling_season_program().lines()
    );
    for target in &report.targets {
        for program in target_programs(target, &report.parameters).unwrap() {
            assert_eq!(model_lines(&model, &program.name), program.lines());
        }
    }
}

#[test]
fn control_law_across_seasons() {
    let mut model = test_models::get_zone_list_test_model().unwrap();
    let report = apply_apmv_setpoints(&mut model, &options()).unwrap();
    let season = options().season().unwrap();

    let target = &report.targets[0];
    assert_eq!(target.ems_suffix, "Z1_P");
    let mut programs = vec![cooling_season_input_program(&season), cooling_season_program()];
    programs.extend(target_programs(target, &report.parameters).unwrap());

    // December and February are within the cooling season, which goes across the new year
    for day in [340, 45] {
        let env = run_timestep(&programs, day, 0., 2.);
        assert_eq!(env.get("CoolingSeason"), Some(1.));
        assert_eq!(env.get("adap_coeff_Z1_P"), Some(0.293));
    }

    // July is not
    let env = run_timestep(&programs, 190, 0., 2.);
    assert_eq!(env.get("CoolingSeason"), Some(0.));
    assert_eq!(env.get("adap_coeff_Z1_P"), Some(-0.293));

    // In the heating season, the heating setpoint is -0.5/(1+0.293*0.5) and
    // then moved by its tolerance
    let heating = env.get("PMV_H_SP_act_Z1_P").unwrap();
    let expected = -0.5 / (1. - 0.293 * -0.5) + 0.1;
    assert!(approx(heating, expected), "{} vs {}", heating, expected);
}

#[test]
fn control_law_comfort_hours() {
    let mut model = test_models::get_zone_list_test_model().unwrap();
    let report = apply_apmv_setpoints(&mut model, &options()).unwrap();
    let season = options().season().unwrap();

    let mut programs = vec![cooling_season_input_program(&season), cooling_season_program()];
    programs.extend(target_programs(&report.targets[0], &report.parameters).unwrap());

    // Neutral and occupied
    let env = run_timestep(&programs, 190, 0., 1.);
    assert_eq!(env.get("comfhour_Z1_P"), Some(0.25));
    assert_eq!(env.get("discomfhour_Z1_P"), Some(0.));
    assert_eq!(env.get("occupied_hour_Z1_P"), Some(0.25));

    // Too hot, and nobody there: the setpoints float
    let env = run_timestep(&programs, 190, 2., 0.);
    assert_eq!(env.get("comfhour_Z1_P"), Some(0.));
    assert_eq!(env.get("discomfhour_heat_Z1_P"), Some(0.25));
    assert_eq!(env.get("occupied_hour_Z1_P"), Some(0.));
    assert_eq!(env.get("PMV_H_SP_act_Z1_P"), Some(-100.));
    assert_eq!(env.get("PMV_C_SP_act_Z1_P"), Some(100.));

    // The aPMV felt by the occupants follows the same transform
    let apmv = env.get("aPMV_Z1_P").unwrap();
    assert!(approx(apmv, 2. / (1. - 0.293 * 2.)));
}
