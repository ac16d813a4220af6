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

//! Writes the `EnergyManagementSystem` objects (and the outputs that
//! report them) that compute the adaptive PMV of each target and use
//! it for driving the setpoints of its zone.
//!
//! Every function in here checks whether the object it is about to create
//! is already in the model, so applying them twice has the same effect as
//! applying them once.

use crate::error_msgs::narration_level;
use crate::Result;
use idf::BuildingModel;

mod actuators;
pub use actuators::{add_actuators, cooling_actuator_name, heating_actuator_name};

mod calling_managers;
pub use calling_managers::{add_calling_managers, CALLING_POINT};

mod outputs;
pub use outputs::{
    add_ems_output_variables, add_output_variables, enable_output_files, ensure_output_variable,
    EmsOutput, EMS_OUTPUTS, SUPPLEMENTARY_OUTPUTS,
};

mod programs;
pub use programs::{
    add_programs, apply_apmv_program, cooling_season_input_program, cooling_season_program,
    count_comfort_hours_program, monitor_apmv_program, target_programs, write_program,
    zone_input_program, COOLING_SEASON_INPUT_PROGRAM, COOLING_SEASON_PROGRAM,
};

mod sensors;
pub use sensors::{add_sensors, occupant_count_sensor_name, pmv_sensor_name};

mod variables;
pub use variables::{add_global_variables, GLOBAL_VARIABLES, PER_TARGET_VARIABLES};

/// The namespaces in which EnergyPlus looks up the names of EMS objects.
/// Names only clash within the same namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmsNamespace {
    /// Erl variables, which include sensors and actuators
    Erl,
    /// `EnergyManagementSystem:Program` names
    Program,
    /// `EnergyManagementSystem:OutputVariable` names
    Output,
}

/// Every name generated for the target with suffix `ems_suffix`
pub fn target_identifiers(ems_suffix: &str) -> Vec<(EmsNamespace, String)> {
    let s = ems_suffix;
    let mut ret = Vec::with_capacity(PER_TARGET_VARIABLES.len() + EMS_OUTPUTS.len() + 8);
    for prefix in PER_TARGET_VARIABLES {
        ret.push((EmsNamespace::Erl, format!("{}_{}", prefix, s)));
    }
    ret.push((EmsNamespace::Erl, pmv_sensor_name(s)));
    ret.push((EmsNamespace::Erl, occupant_count_sensor_name(s)));
    ret.push((EmsNamespace::Erl, heating_actuator_name(s)));
    ret.push((EmsNamespace::Erl, cooling_actuator_name(s)));
    for program in [
        "set_zone_input_data",
        "apply_aPMV",
        "monitor_aPMV",
        "count_aPMV_comfort_hours",
    ] {
        ret.push((EmsNamespace::Program, format!("{}_{}", program, s)));
    }
    for out in EMS_OUTPUTS {
        ret.push((EmsNamespace::Output, format!("{}_{}", out.name, s)));
    }
    ret
}

/// Creates a named object unless the model already has an
/// object of that class and name. Returns whether it was created.
pub(crate) fn add_if_missing<M: BuildingModel>(
    model: &mut M,
    class: &str,
    name: &str,
    fields: &[(&str, &str)],
    verbose: bool,
) -> Result<bool> {
    if model.find(class, name)?.is_some() {
        log::debug!("Not added - {} {} already exists", name, class);
        return Ok(false);
    }
    let mut all_fields = Vec::with_capacity(fields.len() + 1);
    all_fields.push(("Name", name));
    all_fields.extend_from_slice(fields);
    model.create(class, &all_fields)?;
    log::log!(narration_level(verbose), "Added - {} {}", name, class);
    Ok(true)
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;
    use idf::Idf;
    use std::collections::HashSet;

    #[test]
    fn test_target_identifiers() {
        let ids = target_identifiers("Z1_P");
        assert_eq!(ids.len(), 21 + 4 + 4 + 11);

        // Unique within each namespace
        let unique: HashSet<(EmsNamespace, String)> = ids
            .iter()
            .map(|(ns, id)| (*ns, id.to_uppercase()))
            .collect();
        assert_eq!(unique.len(), ids.len());

        let has = |ns: EmsNamespace, name: &str| ids.contains(&(ns, name.to_string()));
        assert!(has(EmsNamespace::Erl, "adap_coeff_cooling_Z1_P"));
        assert!(has(EmsNamespace::Erl, "PMV_H_SP_act_Z1_P"));
        assert!(has(EmsNamespace::Erl, "People_Occupant_Count_Z1_P"));
        assert!(has(EmsNamespace::Output, "aPMV_Z1_P"));
        for program in [
            apply_apmv_program("Z1_P"),
            monitor_apmv_program("Z1_P"),
            count_comfort_hours_program("Z1_P"),
        ] {
            assert!(has(EmsNamespace::Program, &program.name));
        }
        assert!(has(EmsNamespace::Program, "set_zone_input_data_Z1_P"));
    }

    #[test]
    fn test_add_if_missing() -> Result<()> {
        let mut model = Idf::with_version("23.1");
        let fields = [
            ("OutputVariable_or_OutputMeter_Index_Key_Name", "Z1"),
            ("OutputVariable_or_OutputMeter_Name", "People Occupant Count"),
        ];
        let class = "EnergyManagementSystem:Sensor";
        assert!(add_if_missing(&mut model, class, "Count_Z1", &fields, false)?);
        assert!(!add_if_missing(&mut model, class, "Count_Z1", &fields, false)?);
        assert_eq!(model.objects(class)?.len(), 1);
        Ok(())
    }
}
