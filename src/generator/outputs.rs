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
use crate::error_msgs::narration_level;
use crate::infrastructure::{cooling_schedule_name, heating_schedule_name};
use crate::options::ReportingFrequency;
use crate::targets::Target;
use crate::Result;
use idf::{BuildingModel, IdfError};
use std::collections::HashSet;

const EMS_OUTPUT_CLASS: &str = "EnergyManagementSystem:OutputVariable";
const OUTPUT_CLASS: &str = "Output:Variable";
const OUTPUT_CONTROL_CLASS: &str = "OutputControl:Files";

/// The description of an `EnergyManagementSystem:OutputVariable`
/// reported for every target
#[derive(Debug, Clone, Copy)]
pub struct EmsOutput {
    /// The name of the output, before the suffix of the target
    pub name: &'static str,
    /// The prefix of the global variable being reported
    pub variable: &'static str,
    /// Whether the values are summed (rather than averaged) over
    /// each reporting period
    pub summed: bool,
}

impl EmsOutput {
    const fn averaged(name: &'static str, variable: &'static str) -> Self {
        Self {
            name,
            variable,
            summed: false,
        }
    }

    const fn summed(name: &'static str, variable: &'static str) -> Self {
        Self {
            name,
            variable,
            summed: true,
        }
    }

    fn data_type(&self) -> &'static str {
        if self.summed {
            "Summed"
        } else {
            "Averaged"
        }
    }

    fn units(&self) -> &'static str {
        if self.summed {
            "H"
        } else {
            ""
        }
    }
}

/// The EMS outputs of each target
pub const EMS_OUTPUTS: [EmsOutput; 11] = [
    EmsOutput::averaged("Adaptive Coefficient", "adap_coeff"),
    EmsOutput::averaged("aPMV", "aPMV"),
    EmsOutput::averaged("aPMV Heating Setpoint", "aPMV_H_SP"),
    EmsOutput::averaged("aPMV Cooling Setpoint", "aPMV_C_SP"),
    EmsOutput::averaged("aPMV Heating Setpoint No Tolerance", "aPMV_H_SP_noTol"),
    EmsOutput::averaged("aPMV Cooling Setpoint No Tolerance", "aPMV_C_SP_noTol"),
    EmsOutput::summed("Comfortable Hours", "comfhour"),
    EmsOutput::summed("Discomfortable Hot Hours", "discomfhour_heat"),
    EmsOutput::summed("Discomfortable Cold Hours", "discomfhour_cold"),
    EmsOutput::summed("Discomfortable Total Hours", "discomfhour"),
    EmsOutput::summed("Occupied hours", "occupied_hour"),
];

/// Physical variables related to the PMV, reported for every
/// key when asked for
pub const SUPPLEMENTARY_OUTPUTS: [&str; 19] = [
    "Zone Operative Temperature",
    "Zone Thermal Comfort Clothing Surface Temperature",
    "Zone Thermal Comfort Clothing Value",
    "Zone Thermal Comfort Control Fanger High Setpoint PMV",
    "Zone Thermal Comfort Control Fanger Low Setpoint PMV",
    "Zone Thermal Comfort Fanger Model PMV",
    "Zone Thermal Comfort Fanger Model PPD",
    "Zone Thermal Comfort Mean Radiant Temperature",
    "Zone Air Relative Humidity",
    "Zone Mean Air Temperature",
    "Cooling Coil Total Cooling Rate",
    "Heating Coil Heating Rate",
    "Facility Total HVAC Electric Demand Power",
    "Facility Total HVAC Electricity Demand Rate",
    "AFN Surface Venting Window or Door Opening Factor",
    "AFN Zone Infiltration Air Change Rate",
    "AFN Zone Infiltration Volume",
    "AFN Zone Ventilation Air Change Rate",
    "AFN Zone Ventilation Volume",
];

/// Adds the EMS outputs of every target. Returns the names of all
/// of them, whether they were added now or were already there.
pub fn add_ems_output_variables<M: BuildingModel>(
    model: &mut M,
    targets: &[Target],
    verbose: bool,
) -> Result<Vec<String>> {
    let mut names = Vec::with_capacity(EMS_OUTPUTS.len() * targets.len());
    for out in EMS_OUTPUTS {
        for t in targets {
            let name = format!("{}_{}", out.name, t.ems_suffix);
            let variable = format!("{}_{}", out.variable, t.ems_suffix);
            add_if_missing(
                model,
                EMS_OUTPUT_CLASS,
                &name,
                &[
                    ("EMS_Variable_Name", variable.as_str()),
                    ("Type_of_Data_in_Variable", out.data_type()),
                    ("Update_Frequency", "ZoneTimestep"),
                    ("Units", out.units()),
                ],
                verbose,
            )?;
            names.push(name);
        }
    }
    Ok(names)
}

/// The key, variable and frequency of an `Output:Variable`, uppercased
type OutputRequest = (String, String, String);

fn output_request(key: &str, variable: &str, frequency: &str) -> OutputRequest {
    (
        key.trim().to_uppercase(),
        variable.trim().to_uppercase(),
        frequency.trim().to_uppercase(),
    )
}

/// Collects the outputs that the model already requests
fn requested_outputs<M: BuildingModel>(model: &M) -> Result<HashSet<OutputRequest>> {
    let mut ret = HashSet::new();
    for id in model.objects(OUTPUT_CLASS)? {
        let field = |name: &str| -> Result<String> {
            Ok(model.get_field(id, name)?.unwrap_or_default())
        };
        ret.insert(output_request(
            &field("Key_Value")?,
            &field("Variable_Name")?,
            &field("Reporting_Frequency")?,
        ));
    }
    Ok(ret)
}

/// Adds an `Output:Variable` unless it is in `requested`, which is
/// updated. Returns whether it was added.
fn request_output<M: BuildingModel>(
    model: &mut M,
    requested: &mut HashSet<OutputRequest>,
    key: &str,
    variable: &str,
    frequency: ReportingFrequency,
    verbose: bool,
) -> Result<bool> {
    let frequency = frequency.name();
    if !requested.insert(output_request(key, variable, frequency)) {
        log::debug!(
            "Not added - {} Output:Variable ({}, {}) already exists",
            variable,
            key,
            frequency
        );
        return Ok(false);
    }
    model.create(
        OUTPUT_CLASS,
        &[
            ("Key_Value", key),
            ("Variable_Name", variable),
            ("Reporting_Frequency", frequency),
        ],
    )?;
    log::log!(
        narration_level(verbose),
        "Added - {} Output:Variable ({}, {})",
        variable,
        key,
        frequency
    );
    Ok(true)
}

/// Requests an `Output:Variable`, unless the same key, variable and
/// frequency are requested already. Returns whether it was added.
pub fn ensure_output_variable<M: BuildingModel>(
    model: &mut M,
    key: &str,
    variable: &str,
    frequency: ReportingFrequency,
    verbose: bool,
) -> Result<bool> {
    let mut requested = requested_outputs(model)?;
    request_output(model, &mut requested, key, variable, frequency, verbose)
}

/// The air-velocity schedules of every `People`, when the era of the
/// model has such a field
fn air_velocity_schedules<M: BuildingModel>(model: &M) -> Result<Vec<String>> {
    let mut ret: Vec<String> = Vec::new();
    for id in model.objects("People")? {
        match model.get_field(id, "Air_Velocity_Schedule_Name") {
            Ok(Some(s)) => {
                if !ret.iter().any(|r| r.eq_ignore_ascii_case(&s)) {
                    ret.push(s)
                }
            }
            Ok(None) => {}
            Err(IdfError::UnknownField { .. }) => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(ret)
}

/// Requests the outputs at every frequency:
///
/// * The EMS outputs named `ems_outputs`
/// * The values of the PMV schedules of each zone in `zones`
/// * If `supplementary` is true, the [`SUPPLEMENTARY_OUTPUTS`] and
///   the air-velocity schedules of the `People`
///
/// Returns the number of outputs added.
pub fn add_output_variables<M: BuildingModel>(
    model: &mut M,
    ems_outputs: &[String],
    zones: &[String],
    frequencies: &[ReportingFrequency],
    supplementary: bool,
    verbose: bool,
) -> Result<usize> {
    let mut requests: Vec<(String, String)> = ems_outputs
        .iter()
        .map(|name| ("*".to_string(), name.clone()))
        .collect();
    for zone in zones {
        requests.push((heating_schedule_name(zone), "Schedule Value".to_string()));
        requests.push((cooling_schedule_name(zone), "Schedule Value".to_string()));
    }
    if supplementary {
        for variable in SUPPLEMENTARY_OUTPUTS {
            requests.push(("*".to_string(), variable.to_string()));
        }
        for schedule in air_velocity_schedules(model)? {
            requests.push((schedule, "Schedule Value".to_string()));
        }
    }

    let mut requested = requested_outputs(model)?;
    let mut n = 0;
    for freq in frequencies {
        for (key, variable) in &requests {
            if request_output(model, &mut requested, key, variable, *freq, verbose)? {
                n += 1;
            }
        }
    }
    Ok(n)
}

/// Makes sure EnergyPlus writes the CSV, MTR and ESO files. Models too
/// old to have `OutputControl:Files` are left alone.
pub fn enable_output_files<M: BuildingModel>(model: &mut M, verbose: bool) -> Result<()> {
    const FILES: [&str; 3] = ["Output_CSV", "Output_MTR", "Output_ESO"];

    let existing = match model.objects(OUTPUT_CONTROL_CLASS) {
        Ok(v) => v,
        Err(IdfError::UnsupportedClass { .. }) => {
            log::debug!("{} does not exist in this version... skipping it", OUTPUT_CONTROL_CLASS);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    match existing.first() {
        Some(id) => {
            for field in FILES {
                model.set_field(*id, field, "Yes")?;
            }
            log::debug!("Updated - {}", OUTPUT_CONTROL_CLASS);
        }
        None => {
            let fields: Vec<(&str, &str)> = FILES.iter().map(|f| (*f, "Yes")).collect();
            model.create(OUTPUT_CONTROL_CLASS, &fields)?;
            log::log!(narration_level(verbose), "Added - {}", OUTPUT_CONTROL_CLASS);
        }
    }
    Ok(())
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;
    use crate::targets::resolve_model;
    use idf::Idf;
    use test_models::*;

    #[test]
    fn test_ems_outputs() -> Result<()> {
        let mut model = get_zone_list_test_model()?;
        let (_, resolution) = resolve_model(&model)?;
        let names = add_ems_output_variables(&mut model, &resolution.targets, false)?;
        assert_eq!(names.len(), 33);
        assert_eq!(model.objects(EMS_OUTPUT_CLASS)?.len(), 33);

        let id = model.find(EMS_OUTPUT_CLASS, "Comfortable Hours_Z1_P")?.unwrap();
        assert_eq!(
            model.get_field(id, "EMS_Variable_Name")?,
            Some("comfhour_Z1_P".to_string())
        );
        assert_eq!(model.get_field(id, "Type_of_Data_in_Variable")?, Some("Summed".to_string()));
        assert_eq!(model.get_field(id, "Units")?, Some("H".to_string()));

        let id = model.find(EMS_OUTPUT_CLASS, "aPMV_Office")?.unwrap();
        assert_eq!(model.get_field(id, "Units")?, None);
        assert_eq!(model.get_field(id, "Update_Frequency")?, Some("ZoneTimestep".to_string()));

        let again = add_ems_output_variables(&mut model, &resolution.targets, false)?;
        assert_eq!(names, again);
        assert_eq!(model.objects(EMS_OUTPUT_CLASS)?.len(), 33);
        Ok(())
    }

    #[test]
    fn test_output_variables() -> Result<()> {
        let mut model = get_legacy_test_model()?;
        let ems = vec!["aPMV_Z1".to_string()];
        let zones = vec!["Z1".to_string()];
        let freqs = [ReportingFrequency::Hourly, ReportingFrequency::Timestep];

        let n = add_output_variables(&mut model, &ems, &zones, &freqs, false, false)?;
        assert_eq!(n, 6);
        let n = add_output_variables(&mut model, &ems, &zones, &freqs, true, false)?;
        // 19 supplementary and 2 air velocity schedules, twice
        assert_eq!(n, 42);
        assert_eq!(add_output_variables(&mut model, &ems, &zones, &freqs, true, false)?, 0);
        assert!(!ensure_output_variable(
            &mut model,
            "pmv_h_sp_z1",
            "schedule value",
            ReportingFrequency::Hourly,
            false
        )?);
        Ok(())
    }

    #[test]
    fn test_repeated_requests() -> Result<()> {
        let mut model = Idf::with_version("23.1");
        model.create(
            OUTPUT_CLASS,
            &[
                ("Key_Value", "*"),
                ("Variable_Name", "APMV_Z1"),
                ("Reporting_Frequency", "hourly"),
            ],
        )?;
        let ems = vec!["aPMV_Z1".to_string(), "aPMV_Z2".to_string(), "apmv_z2".to_string()];
        let n = add_output_variables(&mut model, &ems, &[], &[ReportingFrequency::Hourly], false, false)?;
        assert_eq!(n, 1);
        assert_eq!(model.objects(OUTPUT_CLASS)?.len(), 2);
        Ok(())
    }

    #[test]
    fn test_output_files() -> Result<()> {
        let mut model = Idf::with_version("9.4");
        enable_output_files(&mut model, false)?;
        enable_output_files(&mut model, false)?;
        let ids = model.objects(OUTPUT_CONTROL_CLASS)?;
        assert_eq!(ids.len(), 1);
        assert_eq!(model.get_field(ids[0], "Output_MTR")?, Some("Yes".to_string()));

        let id = ids[0];
        model.set_field(id, "Output_CSV", "No")?;
        enable_output_files(&mut model, false)?;
        assert_eq!(model.get_field(id, "Output_CSV")?, Some("Yes".to_string()));

        // not available yet
        let mut model = Idf::with_version("7.2");
        enable_output_files(&mut model, false)?;
        assert_eq!(model.len(), 1);
        Ok(())
    }
}
