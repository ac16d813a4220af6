/*
MIT License
Copyright (c)  Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use super::actuators::{cooling_actuator_name, heating_actuator_name};
use super::sensors::{occupant_count_sensor_name, pmv_sensor_name};
use crate::error_msgs::narration_level;
use crate::parameters::{Parameter, ParameterTable};
use crate::targets::Target;
use crate::{Float, Result};
use calendar::Season;
use erl::{Expr, Program, Statement};
use idf::BuildingModel;

const CLASS: &str = "EnergyManagementSystem:Program";

/// The name of the program storing the limits of the cooling season
pub const COOLING_SEASON_INPUT_PROGRAM: &str = "set_cooling_season_input_data";

/// The name of the program that decides whether it is cooling season
pub const COOLING_SEASON_PROGRAM: &str = "set_cooling_season";

/// `<prefix>_<suffix>`
fn v(prefix: &str, suffix: &str) -> Expr {
    Expr::var(format!("{}_{}", prefix, suffix))
}

fn set(prefix: &str, suffix: &str, value: Expr) -> Statement {
    Statement::set(format!("{}_{}", prefix, suffix), value)
}

/// `x/(1+λ·x)`
fn adaptive(x: Expr, lambda: Expr) -> Expr {
    x.clone() / (Expr::num(1.) + lambda * x)
}

/// Stores the first day of the cooling season and the first day after it
pub fn cooling_season_input_program(season: &Season) -> Program {
    Program::new(
        COOLING_SEASON_INPUT_PROGRAM,
        vec![
            Statement::set("CoolSeasonStart", Expr::num(season.start.into())),
            Statement::set("CoolSeasonEnd", Expr::num(season.end.into())),
        ],
    )
}

/// Sets `CoolingSeason` to 1 during the cooling season and to 0 otherwise.
/// Seasons that go across the new year are supported.
pub fn cooling_season_program() -> Program {
    let day = || Expr::var("DayOfYear");
    let start = || Expr::var("CoolSeasonStart");
    let end = || Expr::var("CoolSeasonEnd");
    let flag = |x: Float| vec![Statement::set("CoolingSeason", Expr::num(x))];
    let classify = |within| Statement::if_else(within, flag(1.), flag(0.));

    Program::new(
        COOLING_SEASON_PROGRAM,
        vec![Statement::If {
            branches: vec![
                (
                    end().gt(start()),
                    vec![classify(day().ge(start()).and(day().lt(end())))],
                ),
                (
                    start().gt(end()),
                    vec![classify(day().ge(start()).or(day().lt(end())))],
                ),
            ],
            otherwise: vec![],
        }],
    )
}

/// Loads the parameters of a target into its global variables
pub fn zone_input_program(target: &Target, table: &ParameterTable) -> Result<Program> {
    let s = &target.ems_suffix;
    let mut body = Vec::with_capacity(Parameter::ALL.len());
    for p in Parameter::ALL {
        let value = table.value(&target.lookup_key, p)?;
        body.push(set(p.name(), s, Expr::num(value)));
    }
    Ok(Program::new(format!("set_zone_input_data_{}", s), body))
}

/// Picks the coefficients of the season, transforms the PMV setpoints
/// into aPMV setpoints and passes them to the actuators. Unoccupied
/// zones are left free-floating.
pub fn apply_apmv_program(ems_suffix: &str) -> Program {
    let s = ems_suffix;
    let season = |flag: Float, name: &str| {
        (
            Expr::var("CoolingSeason").equals(Expr::num(flag)),
            vec![
                set("adap_coeff", s, v(&format!("adap_coeff_{}", name), s)),
                set(
                    "tolerance_cooling_sp",
                    s,
                    v(&format!("tolerance_cooling_sp_{}_season", name), s),
                ),
                set(
                    "tolerance_heating_sp",
                    s,
                    v(&format!("tolerance_heating_sp_{}_season", name), s),
                ),
            ],
        )
    };
    let heating_act = heating_actuator_name(s);
    let cooling_act = cooling_actuator_name(s);

    Program::new(
        format!("apply_aPMV_{}", s),
        vec![
            Statement::If {
                branches: vec![season(1., "cooling"), season(0., "heating")],
                otherwise: vec![],
            },
            set(
                "aPMV_H_SP_noTol",
                s,
                adaptive(v("pmv_heating_sp", s), v("adap_coeff", s)),
            ),
            set(
                "aPMV_C_SP_noTol",
                s,
                adaptive(v("pmv_cooling_sp", s), v("adap_coeff", s)),
            ),
            set(
                "aPMV_H_SP",
                s,
                v("aPMV_H_SP_noTol", s) + v("tolerance_heating_sp", s),
            ),
            set(
                "aPMV_C_SP",
                s,
                v("aPMV_C_SP_noTol", s) + v("tolerance_cooling_sp", s),
            ),
            Statement::if_else(
                Expr::var(occupant_count_sensor_name(s)).gt(Expr::num(0.)),
                vec![
                    Statement::if_else(
                        v("aPMV_H_SP", s).lt(Expr::num(0.)),
                        vec![Statement::set(heating_act.clone(), v("aPMV_H_SP", s))],
                        vec![Statement::set(heating_act.clone(), Expr::num(0.))],
                    ),
                    Statement::if_else(
                        v("aPMV_C_SP", s).gt(Expr::num(0.)),
                        vec![Statement::set(cooling_act.clone(), v("aPMV_C_SP", s))],
                        vec![Statement::set(cooling_act.clone(), Expr::num(0.))],
                    ),
                ],
                vec![
                    Statement::set(heating_act, Expr::num(-100.)),
                    Statement::set(cooling_act, Expr::num(100.)),
                ],
            ),
        ],
    )
}

/// Computes the aPMV felt by the occupants of a target
pub fn monitor_apmv_program(ems_suffix: &str) -> Program {
    let s = ems_suffix;
    let pmv = Expr::var(pmv_sensor_name(s));
    Program::new(
        format!("monitor_aPMV_{}", s),
        vec![set("aPMV", s, adaptive(pmv, v("adap_coeff", s)))],
    )
}

/// Classifies the current timestep as comfortable, too cold or too
/// hot, and as occupied or not.
pub fn count_comfort_hours_program(ems_suffix: &str) -> Program {
    let s = ems_suffix;
    let timestep = || Expr::num(1.) * Expr::var("ZoneTimeStep");
    let zero = || Expr::num(0.);
    let hours = |comf: Expr, cold: Expr, heat: Expr| {
        vec![
            set("comfhour", s, comf),
            set("discomfhour_cold", s, cold),
            set("discomfhour_heat", s, heat),
        ]
    };

    Program::new(
        format!("count_aPMV_comfort_hours_{}", s),
        vec![
            Statement::If {
                branches: vec![
                    (
                        v("aPMV", s).lt(v("aPMV_H_SP_noTol", s)),
                        hours(zero(), timestep(), zero()),
                    ),
                    (
                        v("aPMV", s).gt(v("aPMV_C_SP_noTol", s)),
                        hours(zero(), zero(), timestep()),
                    ),
                ],
                otherwise: hours(timestep(), zero(), zero()),
            },
            Statement::if_else(
                Expr::var(occupant_count_sensor_name(s)).gt(zero()),
                vec![set("occupied_hour", s, timestep())],
                vec![set("occupied_hour", s, zero())],
            ),
            set(
                "discomfhour",
                s,
                v("discomfhour_cold", s) + v("discomfhour_heat", s),
            ),
        ],
    )
}

/// The four programs of a target
pub fn target_programs(target: &Target, table: &ParameterTable) -> Result<Vec<Program>> {
    let s = &target.ems_suffix;
    Ok(vec![
        zone_input_program(target, table)?,
        apply_apmv_program(s),
        monitor_apmv_program(s),
        count_comfort_hours_program(s),
    ])
}

/// Writes a program into the model, unless there is a program with
/// that name already. Returns whether it was written.
pub fn write_program<M: BuildingModel>(model: &mut M, program: &Program, verbose: bool) -> Result<bool> {
    if model.find(CLASS, &program.name)?.is_some() {
        log::debug!("Not added - {} Program already exists", program.name);
        return Ok(false);
    }
    let lines = program.lines();
    let field_names: Vec<String> = (1..=lines.len())
        .map(|i| format!("Program_Line_{}", i))
        .collect();
    let mut fields: Vec<(&str, &str)> = Vec::with_capacity(lines.len() + 1);
    fields.push(("Name", program.name.as_str()));
    for (field, line) in field_names.iter().zip(lines.iter()) {
        fields.push((field.as_str(), line.as_str()));
    }
    model.create(CLASS, &fields)?;
    log::log!(narration_level(verbose), "Added - {} Program", program.name);
    Ok(true)
}

/// Writes the two season programs and the four programs of each
/// target. Returns the names of all of them, whether they were
/// written now or were already there.
pub fn add_programs<M: BuildingModel>(
    model: &mut M,
    season: &Season,
    targets: &[Target],
    table: &ParameterTable,
    verbose: bool,
) -> Result<Vec<String>> {
    let mut programs = vec![cooling_season_input_program(season), cooling_season_program()];
    for t in targets {
        programs.extend(target_programs(t, table)?);
    }

    let mut names = Vec::with_capacity(programs.len());
    for p in programs {
        write_program(model, &p, verbose)?;
        names.push(p.name);
    }
    Ok(names)
}

/***********/
/* TESTING */
/***********/
