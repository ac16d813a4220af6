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

use crate::error_msgs::narration_level;
use crate::targets::Target;
use crate::Result;
use idf::BuildingModel;
use std::collections::HashSet;

const CLASS: &str = "EnergyManagementSystem:GlobalVariable";

/// The global variables shared by the whole model
pub const GLOBAL_VARIABLES: [&str; 3] = ["CoolingSeason", "CoolSeasonEnd", "CoolSeasonStart"];

/// The prefixes of the global variables of each target. The variable
/// of target `t` is `<prefix>_<t.ems_suffix>`.
pub const PER_TARGET_VARIABLES: [&str; 21] = [
    "tolerance_cooling_sp",
    "tolerance_cooling_sp_cooling_season",
    "tolerance_cooling_sp_heating_season",
    "tolerance_heating_sp",
    "tolerance_heating_sp_cooling_season",
    "tolerance_heating_sp_heating_season",
    "adap_coeff",
    "adap_coeff_heating",
    "adap_coeff_cooling",
    "pmv_heating_sp",
    "pmv_cooling_sp",
    "aPMV",
    "comfhour",
    "discomfhour",
    "discomfhour_heat",
    "discomfhour_cold",
    "occupied_hour",
    "aPMV_H_SP",
    "aPMV_C_SP",
    "aPMV_H_SP_noTol",
    "aPMV_C_SP_noTol",
];

/// Collects every Erl variable declared in the model, uppercased
fn declared_variables<M: BuildingModel>(model: &M) -> Result<HashSet<String>> {
    let mut ret = HashSet::new();
    for id in model.objects(CLASS)? {
        for v in model.extensible_values(id, "Erl_Variable_#_Name")? {
            ret.insert(v.to_uppercase());
        }
    }
    Ok(ret)
}

/// Declares the global variables of the model and those of every target,
/// one per `EnergyManagementSystem:GlobalVariable`. Returns the number
/// of variables declared.
pub fn add_global_variables<M: BuildingModel>(
    model: &mut M,
    targets: &[Target],
    verbose: bool,
) -> Result<usize> {
    let mut declared = declared_variables(model)?;

    let mut names: Vec<String> = GLOBAL_VARIABLES.iter().map(|v| v.to_string()).collect();
    for t in targets {
        for prefix in PER_TARGET_VARIABLES {
            names.push(format!("{}_{}", prefix, t.ems_suffix));
        }
    }

    let mut n = 0;
    for name in names {
        if !declared.insert(name.to_uppercase()) {
            log::debug!("Not added - {} GlobalVariable already exists", name);
            continue;
        }
        model.create(CLASS, &[("Erl_Variable_1_Name", name.as_str())])?;
        log::log!(narration_level(verbose), "Added - {} GlobalVariable", name);
        n += 1;
    }
    Ok(n)
}

/***********/
/* TESTING */
/***********/
