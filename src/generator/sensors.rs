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
use crate::targets::Target;
use crate::Result;
use idf::BuildingModel;

const CLASS: &str = "EnergyManagementSystem:Sensor";

/// The name of the sensor reading the Fanger PMV of a target
pub fn pmv_sensor_name(ems_suffix: &str) -> String {
    format!("PMV_{}", ems_suffix)
}

/// The name of the sensor reading the number of occupants of a target
pub fn occupant_count_sensor_name(ems_suffix: &str) -> String {
    format!("People_Occupant_Count_{}", ems_suffix)
}

/// Adds the PMV and occupant-count sensors of every target. Returns the
/// number of sensors created.
pub fn add_sensors<M: BuildingModel>(model: &mut M, targets: &[Target], verbose: bool) -> Result<usize> {
    let mut n = 0;
    for t in targets {
        let readings = [
            (
                pmv_sensor_name(&t.ems_suffix),
                "Zone Thermal Comfort Fanger Model PMV",
            ),
            (
                occupant_count_sensor_name(&t.ems_suffix),
                "People Occupant Count",
            ),
        ];
        for (name, variable) in readings {
            let created = add_if_missing(
                model,
                CLASS,
                &name,
                &[
                    ("OutputVariable_or_OutputMeter_Index_Key_Name", t.sensor_key.as_str()),
                    ("OutputVariable_or_OutputMeter_Name", variable),
                ],
                verbose,
            )?;
            if created {
                n += 1;
            }
        }
    }
    Ok(n)
}

/***********/
/* TESTING */
/***********/
