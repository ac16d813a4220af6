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

use crate::error_msgs::Warning;
use crate::targets::Target;
use crate::{ApmvError, Float, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

const MODULE_NAME: &str = "Parameter Table";

/// The coefficients that can be tuned for each target
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    /// The adaptive coefficient (λ) used during the cooling season
    AdapCoeffCooling,
    /// The adaptive coefficient (λ) used during the heating season
    AdapCoeffHeating,
    /// The PMV above which cooling is needed
    PmvCoolingSp,
    /// The PMV below which heating is needed
    PmvHeatingSp,
    /// Added to the cooling aPMV setpoint during the cooling season
    ToleranceCoolingSpCoolingSeason,
    /// Added to the cooling aPMV setpoint during the heating season
    ToleranceCoolingSpHeatingSeason,
    /// Added to the heating aPMV setpoint during the cooling season
    ToleranceHeatingSpCoolingSeason,
    /// Added to the heating aPMV setpoint during the heating season
    ToleranceHeatingSpHeatingSeason,
}

impl Parameter {
    /// All the parameters, in the order in which they are loaded by
    /// the `set_zone_input_data` programs
    pub const ALL: [Parameter; 8] = [
        Parameter::AdapCoeffCooling,
        Parameter::AdapCoeffHeating,
        Parameter::PmvCoolingSp,
        Parameter::PmvHeatingSp,
        Parameter::ToleranceCoolingSpCoolingSeason,
        Parameter::ToleranceCoolingSpHeatingSeason,
        Parameter::ToleranceHeatingSpCoolingSeason,
        Parameter::ToleranceHeatingSpHeatingSeason,
    ];

    /// The name of the parameter, which is also the prefix of the
    /// EMS global variable that holds it
    pub fn name(&self) -> &'static str {
        match self {
            Parameter::AdapCoeffCooling => "adap_coeff_cooling",
            Parameter::AdapCoeffHeating => "adap_coeff_heating",
            Parameter::PmvCoolingSp => "pmv_cooling_sp",
            Parameter::PmvHeatingSp => "pmv_heating_sp",
            Parameter::ToleranceCoolingSpCoolingSeason => "tolerance_cooling_sp_cooling_season",
            Parameter::ToleranceCoolingSpHeatingSeason => "tolerance_cooling_sp_heating_season",
            Parameter::ToleranceHeatingSpCoolingSeason => "tolerance_heating_sp_cooling_season",
            Parameter::ToleranceHeatingSpHeatingSeason => "tolerance_heating_sp_heating_season",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The value given for a [`Parameter`]: either the same number
/// for every target or one number per target (by lookup key).
///
/// ```
/// use apmv::ParameterInput;
///
/// let scalar: ParameterInput = serde_json::from_str("0.293").unwrap();
/// assert_eq!(scalar, ParameterInput::Scalar(0.293));
///
/// let map: ParameterInput = serde_json::from_str(r#"{"Z1 P": 0.1}"#).unwrap();
/// assert!(matches!(map, ParameterInput::PerTarget(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterInput {
    /// The same value for all targets
    Scalar(Float),

    /// One value per target
    PerTarget(BTreeMap<String, Float>),
}

impl From<Float> for ParameterInput {
    fn from(v: Float) -> Self {
        ParameterInput::Scalar(v)
    }
}

/// The parameters of one target
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterRow {
    /// The EMS suffix of the target
    pub ems_suffix: String,

    values: [Option<Float>; 8],
}

impl ParameterRow {
    fn new(ems_suffix: &str) -> Self {
        Self {
            ems_suffix: ems_suffix.to_string(),
            values: [None; 8],
        }
    }

    /// Gets the value of a parameter, if it was given
    pub fn get(&self, parameter: Parameter) -> Option<Float> {
        self.values[parameter.index()]
    }

    /// Sets the value of a parameter
    pub fn set(&mut self, parameter: Parameter, value: Float) {
        self.values[parameter.index()] = Some(value)
    }
}

/// The parameters of every target, indexed by lookup key
#[derive(Debug, Clone, Default)]
pub struct ParameterTable {
    rows: BTreeMap<String, ParameterRow>,
}

impl ParameterTable {
    /// Builds a table from the values given for each parameter.
    ///
    /// Each input comes with the default used for the targets that
    /// a per-target input does not mention. Keys of per-target inputs
    /// that are not targets are dropped.
    pub fn build(
        targets: &[Target],
        inputs: &[(Parameter, &ParameterInput, Float)],
    ) -> (Self, Vec<Warning>) {
        let mut warnings = Vec::new();
        let mut rows: BTreeMap<String, ParameterRow> = targets
            .iter()
            .map(|t| (t.lookup_key.clone(), ParameterRow::new(&t.ems_suffix)))
            .collect();

        for (parameter, input, default) in inputs {
            match input {
                ParameterInput::Scalar(v) => {
                    for row in rows.values_mut() {
                        row.set(*parameter, *v);
                    }
                }
                ParameterInput::PerTarget(map) => {
                    for key in map.keys() {
                        if !rows.contains_key(key) {
                            Warning::UnknownTargetInMapping {
                                parameter: *parameter,
                                key: key.clone(),
                            }
                            .emit(MODULE_NAME, &mut warnings);
                        }
                    }
                    for t in targets {
                        let value = match map.get(&t.lookup_key) {
                            Some(v) => *v,
                            None => {
                                Warning::DefaultSubstituted {
                                    parameter: *parameter,
                                    target: t.lookup_key.clone(),
                                    default: *default,
                                }
                                .emit(MODULE_NAME, &mut warnings);
                                *default
                            }
                        };
                        if let Some(row) = rows.get_mut(&t.lookup_key) {
                            row.set(*parameter, value);
                        }
                    }
                }
            }
        }

        (Self { rows }, warnings)
    }

    /// Borrows the row of a target
    pub fn row(&self, lookup_key: &str) -> Option<&ParameterRow> {
        self.rows.get(lookup_key)
    }

    /// Gets the value of a parameter for a target, failing if there is none
    pub fn value(&self, lookup_key: &str, parameter: Parameter) -> Result<Float> {
        self.row(lookup_key)
            .and_then(|r| r.get(parameter))
            .ok_or_else(|| ApmvError::MissingParameterRow {
                target: lookup_key.to_string(),
                parameter,
            })
    }

    /// Iterates over the rows, sorted by lookup key
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParameterRow)> {
        self.rows.iter()
    }

    /// The number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Checks whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/***********/
/* TESTING */
/***********/
