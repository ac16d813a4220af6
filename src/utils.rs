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
use crate::infrastructure::{ensure_constant_schedule, ensure_schedule_type_limits};
use crate::parameters::{Parameter, ParameterTable};
use crate::Result;
use erl::{Expr, Program, Statement};
use idf::BuildingModel;

/// The schedule that keeps every `People` in the model present at all times
pub const ALWAYS_ON_SCHEDULE: &str = "On";

/// Makes every `People` in the model be present all the time,
/// which is handy for checking the comfort control.
pub fn set_zones_always_occupied<M: BuildingModel>(model: &mut M, verbose: bool) -> Result<()> {
    ensure_schedule_type_limits(model, verbose)?;
    ensure_constant_schedule(model, ALWAYS_ON_SCHEDULE, 1., verbose)?;
    for id in model.objects("People")? {
        model.set_field(id, "Number_of_People_Schedule_Name", ALWAYS_ON_SCHEDULE)?;
    }
    Ok(())
}

/// Rewrites the adaptive coefficients loaded by the
/// `set_zone_input_data` program of each target in `table`, leaving
/// the rest of the program as it is. Returns the number of programs
/// updated. Targets without such a program are skipped.
pub fn update_adaptive_coefficients<M: BuildingModel>(
    model: &mut M,
    table: &ParameterTable,
    verbose: bool,
) -> Result<usize> {
    let mut n = 0;
    for (lookup_key, row) in table.iter() {
        let name = format!("set_zone_input_data_{}", row.ems_suffix);
        let id = match model.find("EnergyManagementSystem:Program", &name)? {
            Some(id) => id,
            None => {
                log::debug!("There is no {} Program... skipping it", name);
                continue;
            }
        };

        let mut body = Vec::with_capacity(2);
        for p in [Parameter::AdapCoeffCooling, Parameter::AdapCoeffHeating] {
            let value = table.value(lookup_key, p)?;
            body.push(Statement::set(
                format!("{}_{}", p.name(), row.ems_suffix),
                Expr::num(value),
            ));
        }
        let lines = Program::new(name.as_str(), body).lines();
        for (i, line) in lines.iter().enumerate() {
            model.set_field(id, &format!("Program_Line_{}", i + 1), line)?;
        }
        log::log!(narration_level(verbose), "Updated - {} Program", name);
        n += 1;
    }
    Ok(n)
}

/// Sets the number of timesteps per hour of the simulation
pub fn set_timesteps<M: BuildingModel>(model: &mut M, timesteps_per_hour: u32) -> Result<()> {
    let value = timesteps_per_hour.to_string();
    let existing = model.objects("Timestep")?;
    match existing.first() {
        Some(id) => model.set_field(*id, "Number_of_Timesteps_per_Hour", &value)?,
        None => {
            model.create("Timestep", &[("Number_of_Timesteps_per_Hour", value.as_str())])?;
        }
    }
    Ok(())
}

/***********/
/* TESTING */
/***********/
