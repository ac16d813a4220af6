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

use super::add_if_missing;
use crate::infrastructure::{cooling_schedule_name, heating_schedule_name};
use crate::targets::Target;
use crate::Result;
use idf::BuildingModel;

const CLASS: &str = "EnergyManagementSystem:Actuator";

/// The name of the actuator overriding the heating PMV schedule for a target
pub fn heating_actuator_name(ems_suffix: &str) -> String {
    format!("PMV_H_SP_act_{}", ems_suffix)
}

/// The name of the actuator overriding the cooling PMV schedule for a target
pub fn cooling_actuator_name(ems_suffix: &str) -> String {
    format!("PMV_C_SP_act_{}", ems_suffix)
}

/// Adds the heating and cooling actuators of every target.
///
/// Actuators point at the schedules of the zone of the target, so targets
/// sharing a zone also share the schedules they drive. Returns the number
/// of actuators created.
pub fn add_actuators<M: BuildingModel>(model: &mut M, targets: &[Target], verbose: bool) -> Result<usize> {
    let mut n = 0;
    for t in targets {
        let schedules = [
            (
                heating_actuator_name(&t.ems_suffix),
                heating_schedule_name(&t.owning_zone),
            ),
            (
                cooling_actuator_name(&t.ems_suffix),
                cooling_schedule_name(&t.owning_zone),
            ),
        ];
        for (name, schedule) in schedules {
            if add_if_missing(
                model,
                CLASS,
                &name,
                &[
                    ("Actuated_Component_Unique_Name", schedule.as_str()),
                    ("Actuated_Component_Type", "Schedule:Compact"),
                    ("Actuated_Component_Control_Type", "Schedule Value"),
                ],
                verbose,
            )? {
                n += 1;
            }
        }
    }
    Ok(n)
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;
    use crate::targets::resolve_model;
    use test_models::get_zone_list_test_model;

    #[test]
    fn test_actuators_point_at_zone_schedules() -> Result<()> {
        let mut model = get_zone_list_test_model()?;
        let (_, resolution) = resolve_model(&model)?;
        assert_eq!(add_actuators(&mut model, &resolution.targets, false)?, 6);

        let id = model.find(CLASS, "PMV_H_SP_act_Z2_P")?.unwrap();
        assert_eq!(
            model.get_field(id, "Actuated_Component_Unique_Name")?,
            Some("PMV_H_SP_Z2".to_string())
        );
        let id = model.find(CLASS, "PMV_C_SP_act_Office")?.unwrap();
        assert_eq!(
            model.get_field(id, "Actuated_Component_Unique_Name")?,
            Some("PMV_C_SP_Office".to_string())
        );
        assert_eq!(
            model.get_field(id, "Actuated_Component_Control_Type")?,
            Some("Schedule Value".to_string())
        );
        Ok(())
    }
}
