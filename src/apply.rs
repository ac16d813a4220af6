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

use crate::error_msgs::{narration_level, print_warning, Warning};
use crate::generator::*;
use crate::infrastructure::ensure_infrastructure;
use crate::options::ApmvOptions;
use crate::parameters::ParameterTable;
use crate::targets::{resolve_model, Target};
use crate::Result;
use idf::BuildingModel;
use std::collections::BTreeMap;

const MODULE_NAME: &str = "aPMV setpoints";

/// The value of every entry in the [`input_template`]
pub const TEMPLATE_PLACEHOLDER: &str = "replace-me-with-float-value";

/// What [`apply_apmv_setpoints`] did to a model
#[derive(Debug, Clone, Default)]
pub struct ApplyReport {
    /// The targets that are now controlled by their aPMV
    pub targets: Vec<Target>,

    /// The parameters of each target
    pub parameters: ParameterTable,

    /// Everything that did not look right in the model or the options
    pub warnings: Vec<Warning>,

    /// The number of sensors added
    pub sensors: usize,

    /// The number of actuators added
    pub actuators: usize,

    /// The number of global variables added
    pub global_variables: usize,

    /// The names of the programs that drive the aPMV setpoints
    pub programs: Vec<String>,

    /// The number of calling managers added
    pub calling_managers: usize,

    /// The number of `Output:Variable` added
    pub output_variables: usize,
}

/// Makes every `People` in the model control the heating and cooling of
/// its zone through its adaptive PMV.
///
/// The model is modified in place. Nothing that is already in the model is
/// duplicated, so calling this twice with the same options leaves the model
/// as it was after the first call.
///
/// If something fails while the model is being modified, the model
/// should be discarded, as it might be half-way through the process.
///
/// ```
/// use apmv::{apply_apmv_setpoints, ApmvOptions};
/// use idf::{BuildingModel, Idf};
///
/// let mut model = Idf::with_version("23.1");
/// model.create("Zone", &[("Name", "Bedroom")]).unwrap();
/// model.create("People", &[
///     ("Name", "Bedroom People"),
///     ("Zone_or_ZoneList_or_Space_or_SpaceList_Name", "Bedroom"),
/// ]).unwrap();
///
/// let options = ApmvOptions { verbose: false, ..ApmvOptions::default() };
/// let report = apply_apmv_setpoints(&mut model, &options).unwrap();
/// assert_eq!(report.targets.len(), 1);
/// assert!(model.find("EnergyManagementSystem:Program", "apply_aPMV_Bedroom").unwrap().is_some());
/// ```
pub fn apply_apmv_setpoints<M: BuildingModel>(
    model: &mut M,
    options: &ApmvOptions,
) -> Result<ApplyReport> {
    let verbose = options.verbose;

    // Everything that can be checked is checked before touching the model
    let season = options.season()?;
    let (index, resolution) = resolve_model(model)?;
    resolution.check_zones(&index)?;

    let zones = resolution.unique_zones();
    let mut report = ApplyReport {
        warnings: resolution.warnings,
        ..ApplyReport::default()
    };
    let targets = resolution.targets;
    if targets.is_empty() {
        print_warning(MODULE_NAME, "there are no occupied zones in the model... nothing to do");
        return Ok(report);
    }
    log::log!(
        narration_level(verbose),
        "Found {} targets in {} zones",
        targets.len(),
        zones.len()
    );

    ensure_infrastructure(model, &zones, verbose)?;

    let (parameters, warnings) = ParameterTable::build(&targets, &options.parameter_inputs());
    report.warnings.extend(warnings);

    report.sensors = add_sensors(model, &targets, verbose)?;
    report.actuators = add_actuators(model, &targets, verbose)?;
    report.global_variables = add_global_variables(model, &targets, verbose)?;
    report.programs = add_programs(model, &season, &targets, &parameters, verbose)?;
    report.calling_managers = add_calling_managers(model, &report.programs, verbose)?;

    let ems_outputs = add_ems_output_variables(model, &targets, verbose)?;
    report.output_variables = add_output_variables(
        model,
        &ems_outputs,
        &zones,
        &options.outputs_freq,
        options.other_pmv_related_outputs,
        verbose,
    )?;
    enable_output_files(model, verbose)?;

    report.targets = targets;
    report.parameters = parameters;
    Ok(report)
}

/// Lists the lookup keys of the targets in a model, which are the keys
/// accepted by per-target options
pub fn available_target_names<M: BuildingModel>(model: &M) -> Result<Vec<String>> {
    let (_, resolution) = resolve_model(model)?;
    Ok(resolution.lookup_keys())
}

/// A per-target option with every target in the model, to be filled
/// in by the user
///
/// ```
/// use apmv::input_template;
/// use idf::{BuildingModel, Idf};
///
/// let mut model = Idf::with_version("9.4");
/// model.create("Zone", &[("Name", "Kitchen")]).unwrap();
/// model.create("ZoneList", &[("Name", "All"), ("Zone_1_Name", "Kitchen")]).unwrap();
/// model.create("People", &[("Name", "Cooks"), ("Zone_or_ZoneList_Name", "All")]).unwrap();
///
/// let template = input_template(&model).unwrap();
/// assert_eq!(template["Kitchen Cooks"], "replace-me-with-float-value");
/// ```
pub fn input_template<M: BuildingModel>(model: &M) -> Result<BTreeMap<String, String>> {
    Ok(available_target_names(model)?
        .into_iter()
        .map(|k| (k, TEMPLATE_PLACEHOLDER.to_string()))
        .collect())
}

/***********/
/* TESTING */
/***********/
