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

use crate::parameters::{Parameter, ParameterInput};
use crate::{ApmvError, Float, Result};
use calendar::{Date, Season, DAYS_PER_YEAR};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// How often an `Output:Variable` is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ReportingFrequency {
    /// Every zone timestep
    Timestep,
    /// Every hour
    Hourly,
    /// Every day
    Daily,
    /// Every month
    Monthly,
    /// Once per run period
    RunPeriod,
    /// Once per year
    Annual,
}

impl ReportingFrequency {
    /// The name written into the `Reporting_Frequency` field
    pub fn name(&self) -> &'static str {
        match self {
            ReportingFrequency::Timestep => "Timestep",
            ReportingFrequency::Hourly => "Hourly",
            ReportingFrequency::Daily => "Daily",
            ReportingFrequency::Monthly => "Monthly",
            ReportingFrequency::RunPeriod => "RunPeriod",
            ReportingFrequency::Annual => "Annual",
        }
    }
}

impl fmt::Display for ReportingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ReportingFrequency {
    type Err = ApmvError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "timestep" => Ok(ReportingFrequency::Timestep),
            "hourly" => Ok(ReportingFrequency::Hourly),
            "daily" => Ok(ReportingFrequency::Daily),
            "monthly" => Ok(ReportingFrequency::Monthly),
            "runperiod" => Ok(ReportingFrequency::RunPeriod),
            "annual" => Ok(ReportingFrequency::Annual),
            _ => Err(ApmvError::InvalidOption {
                option: "outputs_freq".to_string(),
                msg: format!(
                    "'{}' is not one of timestep, hourly, daily, monthly, runperiod or annual",
                    s
                ),
            }),
        }
    }
}

impl TryFrom<String> for ReportingFrequency {
    type Error = ApmvError;
    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<ReportingFrequency> for String {
    fn from(f: ReportingFrequency) -> Self {
        f.name().to_string()
    }
}

/// A boundary of the cooling season: either a day of the year
/// or a `"dd/mm"` date.
///
/// ```
/// use apmv::SeasonDay;
///
/// let day: SeasonDay = serde_json::from_str("120").unwrap();
/// assert_eq!(day.day_of_year("start").unwrap(), 120);
///
/// let day: SeasonDay = serde_json::from_str(r#""01/05""#).unwrap();
/// assert_eq!(day.day_of_year("start").unwrap(), 121);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeasonDay {
    /// A day of the year, from 1 to 365
    DayOfYear(u16),

    /// A `"dd/mm"` date
    DayMonth(String),
}

impl SeasonDay {
    /// Finds the day of the year. The `option` is the name of the
    /// option being read, used for reporting errors.
    pub fn day_of_year(&self, option: &str) -> Result<u16> {
        match self {
            SeasonDay::DayOfYear(n) => {
                if *n == 0 || *n > DAYS_PER_YEAR {
                    Err(ApmvError::InvalidOption {
                        option: option.to_string(),
                        msg: format!("day of year must be between 1 and {}, found {}", DAYS_PER_YEAR, n),
                    })
                } else {
                    Ok(*n)
                }
            }
            SeasonDay::DayMonth(s) => {
                let date: Date = s.parse()?;
                Ok(date.ordinal()?)
            }
        }
    }
}

impl From<u16> for SeasonDay {
    fn from(n: u16) -> Self {
        SeasonDay::DayOfYear(n)
    }
}

/// Everything that can be configured when applying the
/// comfort-control layer. Missing fields take their default values.
///
/// ```
/// use apmv::{ApmvOptions, ParameterInput};
///
/// let options: ApmvOptions = json5::from_str("{
///     outputs_freq: ['hourly', 'TIMESTEP'],
///     adap_coeff_cooling: {'Z1 P': 0.3},
///     cooling_season_start: '01/06',
/// }").unwrap();
/// assert_eq!(options.outputs_freq.len(), 2);
/// assert!(matches!(options.adap_coeff_cooling, ParameterInput::PerTarget(_)));
/// assert_eq!(options.adap_coeff_heating, ParameterInput::Scalar(-0.293));
/// assert!(options.verbose);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApmvOptions {
    /// The frequencies at which the generated variables are reported
    pub outputs_freq: Vec<ReportingFrequency>,

    /// Also report the physical variables related to the PMV (e.g.,
    /// operative temperature, PPD, ventilation rates)
    pub other_pmv_related_outputs: bool,

    /// Adaptive coefficient during the cooling season
    pub adap_coeff_cooling: ParameterInput,
    /// Adaptive coefficient during the heating season
    pub adap_coeff_heating: ParameterInput,
    /// PMV cooling setpoint
    pub pmv_cooling_sp: ParameterInput,
    /// PMV heating setpoint
    pub pmv_heating_sp: ParameterInput,
    /// Tolerance of the cooling setpoint during the cooling season
    pub tolerance_cooling_sp_cooling_season: ParameterInput,
    /// Tolerance of the cooling setpoint during the heating season
    pub tolerance_cooling_sp_heating_season: ParameterInput,
    /// Tolerance of the heating setpoint during the cooling season
    pub tolerance_heating_sp_cooling_season: ParameterInput,
    /// Tolerance of the heating setpoint during the heating season
    pub tolerance_heating_sp_heating_season: ParameterInput,

    /// First day of the cooling season
    pub cooling_season_start: SeasonDay,
    /// Day after the last day of the cooling season
    pub cooling_season_end: SeasonDay,

    /// Used for targets missing from a per-target `adap_coeff_cooling`
    pub dflt_for_adap_coeff_cooling: Float,
    /// Used for targets missing from a per-target `adap_coeff_heating`
    pub dflt_for_adap_coeff_heating: Float,
    /// Used for targets missing from a per-target `pmv_cooling_sp`
    pub dflt_for_pmv_cooling_sp: Float,
    /// Used for targets missing from a per-target `pmv_heating_sp`
    pub dflt_for_pmv_heating_sp: Float,
    /// Used for targets missing from a per-target `tolerance_cooling_sp_cooling_season`
    pub dflt_for_tolerance_cooling_sp_cooling_season: Float,
    /// Used for targets missing from a per-target `tolerance_cooling_sp_heating_season`
    pub dflt_for_tolerance_cooling_sp_heating_season: Float,
    /// Used for targets missing from a per-target `tolerance_heating_sp_cooling_season`
    pub dflt_for_tolerance_heating_sp_cooling_season: Float,
    /// Used for targets missing from a per-target `tolerance_heating_sp_heating_season`
    pub dflt_for_tolerance_heating_sp_heating_season: Float,

    /// Report what is being added to the model
    pub verbose: bool,
}

impl Default for ApmvOptions {
    fn default() -> Self {
        Self {
            outputs_freq: vec![ReportingFrequency::Hourly],
            other_pmv_related_outputs: true,
            adap_coeff_cooling: ParameterInput::Scalar(0.293),
            adap_coeff_heating: ParameterInput::Scalar(-0.293),
            pmv_cooling_sp: ParameterInput::Scalar(-0.5),
            pmv_heating_sp: ParameterInput::Scalar(0.5),
            tolerance_cooling_sp_cooling_season: ParameterInput::Scalar(-0.1),
            tolerance_cooling_sp_heating_season: ParameterInput::Scalar(-0.1),
            tolerance_heating_sp_cooling_season: ParameterInput::Scalar(0.1),
            tolerance_heating_sp_heating_season: ParameterInput::Scalar(0.1),
            cooling_season_start: SeasonDay::DayOfYear(120),
            cooling_season_end: SeasonDay::DayOfYear(210),
            dflt_for_adap_coeff_cooling: 0.4,
            dflt_for_adap_coeff_heating: -0.4,
            dflt_for_pmv_cooling_sp: 0.5,
            dflt_for_pmv_heating_sp: -0.5,
            dflt_for_tolerance_cooling_sp_cooling_season: -0.1,
            dflt_for_tolerance_cooling_sp_heating_season: -0.1,
            dflt_for_tolerance_heating_sp_cooling_season: 0.1,
            dflt_for_tolerance_heating_sp_heating_season: 0.1,
            verbose: true,
        }
    }
}

impl ApmvOptions {
    /// Reads the options from a JSON or JSON5 file (chosen by
    /// the extension of the file)
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self> {
        let path = filename.as_ref();
        let config_err = |msg: String| ApmvError::Config {
            path: path.display().to_string(),
            msg,
        };
        let content = std::fs::read_to_string(path).map_err(|e| config_err(e.to_string()))?;
        let is_json5 = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json5"))
            .unwrap_or(false);
        if is_json5 {
            json5::from_str(&content).map_err(|e| config_err(e.to_string()))
        } else {
            serde_json::from_str(&content).map_err(|e| config_err(e.to_string()))
        }
    }

    /// The values given for each parameter, with the default used for
    /// the targets that a per-target value does not mention.
    pub fn parameter_inputs(&self) -> [(Parameter, &ParameterInput, Float); 8] {
        [
            (
                Parameter::AdapCoeffCooling,
                &self.adap_coeff_cooling,
                self.dflt_for_adap_coeff_cooling,
            ),
            (
                Parameter::AdapCoeffHeating,
                &self.adap_coeff_heating,
                self.dflt_for_adap_coeff_heating,
            ),
            (
                Parameter::PmvCoolingSp,
                &self.pmv_cooling_sp,
                self.dflt_for_pmv_cooling_sp,
            ),
            (
                Parameter::PmvHeatingSp,
                &self.pmv_heating_sp,
                self.dflt_for_pmv_heating_sp,
            ),
            (
                Parameter::ToleranceCoolingSpCoolingSeason,
                &self.tolerance_cooling_sp_cooling_season,
                self.dflt_for_tolerance_cooling_sp_cooling_season,
            ),
            (
                Parameter::ToleranceCoolingSpHeatingSeason,
                &self.tolerance_cooling_sp_heating_season,
                self.dflt_for_tolerance_cooling_sp_heating_season,
            ),
            (
                Parameter::ToleranceHeatingSpCoolingSeason,
                &self.tolerance_heating_sp_cooling_season,
                self.dflt_for_tolerance_heating_sp_cooling_season,
            ),
            (
                Parameter::ToleranceHeatingSpHeatingSeason,
                &self.tolerance_heating_sp_heating_season,
                self.dflt_for_tolerance_heating_sp_heating_season,
            ),
        ]
    }

    /// The cooling season
    pub fn season(&self) -> Result<Season> {
        let start = self.cooling_season_start.day_of_year("cooling_season_start")?;
        let end = self.cooling_season_end.day_of_year("cooling_season_end")?;
        Ok(Season::new(start, end)?)
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_frequency_parsing() -> Result<()> {
        assert_eq!("hourly".parse::<ReportingFrequency>()?, ReportingFrequency::Hourly);
        assert_eq!("RUNPERIOD".parse::<ReportingFrequency>()?, ReportingFrequency::RunPeriod);
        assert_eq!(ReportingFrequency::Timestep.to_string(), "Timestep");
        assert!(matches!(
            "weekly".parse::<ReportingFrequency>(),
            Err(ApmvError::InvalidOption { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_season_days() -> Result<()> {
        assert_eq!(SeasonDay::DayOfYear(1).day_of_year("x")?, 1);
        assert_eq!(SeasonDay::DayMonth("31/12".to_string()).day_of_year("x")?, 365);
        assert!(matches!(
            SeasonDay::DayOfYear(366).day_of_year("x"),
            Err(ApmvError::InvalidOption { .. })
        ));
        assert!(matches!(
            SeasonDay::DayOfYear(0).day_of_year("x"),
            Err(ApmvError::InvalidOption { .. })
        ));
        assert!(matches!(
            SeasonDay::DayMonth("30/02".to_string()).day_of_year("x"),
            Err(ApmvError::Date(_))
        ));
        Ok(())
    }

    #[test]
    fn test_defaults() -> Result<()> {
        let options: ApmvOptions = serde_json::from_str("{}").map_err(|e| ApmvError::Config {
            path: "inline".to_string(),
            msg: e.to_string(),
        })?;
        assert_eq!(options, ApmvOptions::default());
        let season = options.season()?;
        assert_eq!((season.start, season.end), (120, 210));

        let inputs = options.parameter_inputs();
        assert_eq!(inputs[0].0, Parameter::AdapCoeffCooling);
        assert_eq!(inputs[0].1, &ParameterInput::Scalar(0.293));
        assert_eq!(inputs[0].2, 0.4);
        assert_eq!(inputs[7].0, Parameter::ToleranceHeatingSpHeatingSeason);
        Ok(())
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let r: std::result::Result<ApmvOptions, _> = serde_json::from_str(r#"{"adap_coef": 1}"#);
        assert!(r.is_err());
    }

    #[test]
    fn test_from_file() -> Result<()> {
        let dir = tempfile::tempdir().map_err(|e| ApmvError::Config {
            path: "tempdir".to_string(),
            msg: e.to_string(),
        })?;

        let path = dir.path().join("options.json5");
        let mut f = std::fs::File::create(&path).map_err(|e| ApmvError::Config {
            path: path.display().to_string(),
            msg: e.to_string(),
        })?;
        writeln!(
            f,
            "{{ // comments are fine here\n verbose: false, cooling_season_start: 330, cooling_season_end: '31/03' }}"
        )
        .map_err(|e| ApmvError::Config {
            path: "options.json5".to_string(),
            msg: e.to_string(),
        })?;
        let options = ApmvOptions::from_file(&path)?;
        assert!(!options.verbose);
        let season = options.season()?;
        assert!(season.wraps());

        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ verbose: false }").map_err(|e| ApmvError::Config {
            path: path.display().to_string(),
            msg: e.to_string(),
        })?;
        assert!(matches!(
            ApmvOptions::from_file(&path),
            Err(ApmvError::Config { .. })
        ));
        Ok(())
    }
}
