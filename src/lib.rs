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

#![deny(missing_docs)]

//! Adds an adaptive-PMV (aPMV) comfort control layer to EnergyPlus models.
//!
//! Every `People` object in a model is resolved into one or more
//! [`Target`]s (i.e., a group of people in a specific zone). Each target gets
//! EMS sensors, actuators, global variables and programs that transform
//! the PMV setpoints of its zone into aPMV setpoints, following
//!
//! ```text
//! aPMV = PMV / (1 + λ·PMV)
//! ```
//!
//! where λ is an adaptive coefficient that depends on the season.
//!
//! The zones of the targets get a Fanger thermal-comfort thermostat, driven
//! by schedules that the EMS programs overwrite at the beginning of each
//! timestep.
//!
//! ```
//! use apmv::{apply_apmv_setpoints, ApmvOptions, ParameterInput};
//! use idf::{BuildingModel, Idf};
//!
//! let mut model = Idf::with_version("9.4");
//! for zone in ["Kitchen", "Living"] {
//!     model.create("Zone", &[("Name", zone)]).unwrap();
//! }
//! model.create("ZoneList", &[
//!     ("Name", "Ground floor"),
//!     ("Zone_1_Name", "Kitchen"),
//!     ("Zone_2_Name", "Living"),
//! ]).unwrap();
//! model.create("People", &[
//!     ("Name", "Family"),
//!     ("Zone_or_ZoneList_Name", "Ground floor"),
//! ]).unwrap();
//!
//! // One target per zone in the list
//! assert_eq!(
//!     apmv::available_target_names(&model).unwrap(),
//!     vec!["Kitchen Family".to_string(), "Living Family".to_string()]
//! );
//!
//! let options = ApmvOptions {
//!     adap_coeff_cooling: ParameterInput::Scalar(0.35),
//!     verbose: false,
//!     ..ApmvOptions::default()
//! };
//! let report = apply_apmv_setpoints(&mut model, &options).unwrap();
//! assert_eq!(report.targets[1].ems_suffix, "Living_Family");
//! ```

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
pub type Float = f32;

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(not(feature = "float"))]
pub type Float = f64;

mod error;
pub use error::{ApmvError, Result};

/// Warnings and how they are reported
pub mod error_msgs;
pub use error_msgs::Warning;

mod sanitize;
pub use sanitize::sanitize;

/// Relations between zones, spaces and their lists
pub mod hierarchy;
pub use hierarchy::HierarchyIndex;

/// Finding what each `People` object controls
pub mod targets;
pub use targets::{resolve, resolve_model, Assignment, OccupantGroup, Resolution, Target};

/// The per-target coefficients
pub mod parameters;
pub use parameters::{Parameter, ParameterInput, ParameterRow, ParameterTable};

/// The options accepted when applying the aPMV setpoints
pub mod options;
pub use options::{ApmvOptions, ReportingFrequency, SeasonDay};

/// Schedules and thermostats of the controlled zones
pub mod infrastructure;
pub use infrastructure::ensure_infrastructure;

pub mod generator;

mod apply;
pub use apply::{
    apply_apmv_setpoints, available_target_names, input_template, ApplyReport,
    TEMPLATE_PLACEHOLDER,
};

/// Tweaks applied to a model after (or before) adding the aPMV setpoints
pub mod utils;
pub use utils::{set_timesteps, set_zones_always_occupied, update_adaptive_coefficients};

// Re-exports
pub use calendar::{Date, Season};
pub use idf::{BuildingModel, Idf, IdfError};
