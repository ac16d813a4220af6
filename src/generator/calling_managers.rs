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
use crate::Result;
use idf::BuildingModel;

const CLASS: &str = "EnergyManagementSystem:ProgramCallingManager";

/// When the programs run: at the start of each timestep, so the setpoints
/// are ready before the predictor uses them
pub const CALLING_POINT: &str = "BeginTimestepBeforePredictor";

/// Adds one calling manager per program, named after the program.
/// Returns the number of calling managers created.
pub fn add_calling_managers<M: BuildingModel>(
    model: &mut M,
    programs: &[String],
    verbose: bool,
) -> Result<usize> {
    let mut n = 0;
    for program in programs {
        if add_if_missing(
            model,
            CLASS,
            program,
            &[
                ("EnergyPlus_Model_Calling_Point", CALLING_POINT),
                ("Program_Name_1", program.as_str()),
            ],
            verbose,
        )? {
            n += 1;
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
    use idf::Idf;

    #[test]
    fn test_one_manager_per_program() -> Result<()> {
        let mut model = Idf::with_version("9.4");
        let programs = vec!["set_cooling_season".to_string(), "apply_aPMV_Z1".to_string()];
        assert_eq!(add_calling_managers(&mut model, &programs, false)?, 2);
        assert_eq!(add_calling_managers(&mut model, &programs, false)?, 0);

        let id = model.find(CLASS, "apply_aPMV_Z1")?.unwrap();
        assert_eq!(
            model.get_field(id, "Program_Name_1")?,
            Some("apply_aPMV_Z1".to_string())
        );
        assert_eq!(
            model.get_field(id, "EnergyPlus_Model_Calling_Point")?,
            Some(CALLING_POINT.to_string())
        );
        Ok(())
    }
}
