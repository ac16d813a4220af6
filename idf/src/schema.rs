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

use serde::{Deserialize, Serialize};
use std::fmt;

/// The successive generations of the EnergyPlus input schema, as far as
/// occupant and zone grouping objects are concerned.
///
/// Eras are ordered, so `SchemaEra::ZoneList < SchemaEra::Space`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum SchemaEra {
    /// Before version 8.0. `People` point directly to a `Zone` and there are no `ZoneList`s
    PreZoneList,
    /// Versions 8.0 to 9.5. `People` can point to a `Zone` or a `ZoneList`
    ZoneList,
    /// Versions 9.6 onwards. `Space` and `SpaceList` exist, and `People` can point to any of them.
    #[default]
    Space,
}

impl fmt::Display for SchemaEra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SchemaEra::PreZoneList => "pre-ZoneList (< 8.0)",
            SchemaEra::ZoneList => "ZoneList (8.0 - 9.5)",
            SchemaEra::Space => "Space (>= 9.6)",
        };
        write!(f, "{}", s)
    }
}

impl SchemaEra {
    /// Classifies a `Version_Identifier` (e.g., `"9.4"`, `"23.1.0"`).
    ///
    /// Unparsable identifiers are assumed to be recent.
    ///
    /// ```
    /// use idf::SchemaEra;
    ///
    /// assert_eq!(SchemaEra::from_version("7.2"), SchemaEra::PreZoneList);
    /// assert_eq!(SchemaEra::from_version("9.4.0"), SchemaEra::ZoneList);
    /// assert_eq!(SchemaEra::from_version("9.6"), SchemaEra::Space);
    /// assert_eq!(SchemaEra::from_version("23.1"), SchemaEra::Space);
    /// assert_eq!(SchemaEra::from_version("banana"), SchemaEra::Space);
    /// ```
    pub fn from_version(version: &str) -> Self {
        let mut parts = version.trim().split('.');
        let major = parts.next().and_then(|v| v.trim().parse::<u32>().ok());
        let minor = parts
            .next()
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(0);
        match major {
            None => SchemaEra::Space,
            Some(m) if m < 8 => SchemaEra::PreZoneList,
            Some(m) if (m, minor) < (9, 6) => SchemaEra::ZoneList,
            Some(_) => SchemaEra::Space,
        }
    }
}

/// The field layout of an object type.
///
/// Field names follow the usual convention of replacing spaces by
/// underscores (e.g., `Zone_or_ZoneList_Name`). Lookups are case insensitive
/// and accept spaces instead of underscores.
#[derive(Debug)]
pub struct ClassSchema {
    /// The name of the object type, with its canonical casing
    pub class: &'static str,

    /// The fixed fields, in order
    pub fields: &'static [&'static str],

    /// The repeating group that follows the fixed fields. Each name
    /// contains a `#`, which is replaced by the (1-based) group number.
    pub extensible: &'static [&'static str],

    /// The first era in which this layout applies
    pub since: SchemaEra,

    /// The first era in which this layout no longer applies
    pub until: Option<SchemaEra>,
}

fn normalize(s: &str) -> String {
    s.trim().to_ascii_uppercase().replace(' ', "_")
}

impl ClassSchema {
    /// Checks whether this layout applies to a model of a certain era
    pub fn is_available(&self, era: SchemaEra) -> bool {
        era >= self.since && self.until.map_or(true, |until| era < until)
    }

    /// Returns the position of a field in the object (not counting the object type)
    ///
    /// ```
    /// use idf::{schema, SchemaEra};
    ///
    /// let zone_list = schema::schema_for("ZoneList", SchemaEra::Space).unwrap();
    /// assert_eq!(zone_list.field_index("Name"), Some(0));
    /// assert_eq!(zone_list.field_index("Zone_1_Name"), Some(1));
    /// assert_eq!(zone_list.field_index("zone 12 name"), Some(12));
    /// assert_eq!(zone_list.field_index("Zone_0_Name"), None);
    /// assert_eq!(zone_list.field_index("Volume"), None);
    /// ```
    pub fn field_index(&self, field: &str) -> Option<usize> {
        let wanted = normalize(field);
        if let Some(i) = self.fields.iter().position(|f| normalize(f) == wanted) {
            return Some(i);
        }

        let group_len = self.extensible.len();
        for (j, pattern) in self.extensible.iter().enumerate() {
            let pattern = normalize(pattern);
            let (prefix, suffix) = match pattern.split_once('#') {
                Some(v) => v,
                None => continue,
            };
            let number = wanted
                .strip_prefix(prefix)
                .and_then(|rest| rest.strip_suffix(suffix))
                .and_then(|n| n.parse::<usize>().ok());
            if let Some(n) = number {
                if n >= 1 {
                    return Some(self.fields.len() + (n - 1) * group_len + j);
                }
            }
        }
        None
    }

    /// Returns the name of the field in a certain position
    pub fn field_name(&self, index: usize) -> Option<String> {
        if let Some(name) = self.fields.get(index) {
            return Some(name.to_string());
        }
        if self.extensible.is_empty() {
            return None;
        }
        let k = index - self.fields.len();
        let group = k / self.extensible.len() + 1;
        let pattern = self.extensible[k % self.extensible.len()];
        Some(pattern.replace('#', &group.to_string()))
    }
}

/// Finds the layout of an object type that applies to a model of a certain era.
pub fn schema_for(class: &str, era: SchemaEra) -> Option<&'static ClassSchema> {
    SCHEMAS
        .iter()
        .find(|s| s.class.eq_ignore_ascii_case(class.trim()) && s.is_available(era))
}

/// Checks whether this crate knows the layout of an object type, in any era.
pub fn is_known(class: &str) -> bool {
    SCHEMAS
        .iter()
        .any(|s| s.class.eq_ignore_ascii_case(class.trim()))
}

const PEOPLE_PRE_ZONE_LIST: &[&str] = &[
    "Name",
    "Zone_Name",
    "Number_of_People_Schedule_Name",
    "Number_of_People_Calculation_Method",
    "Number_of_People",
    "People_per_Zone_Floor_Area",
    "Zone_Floor_Area_per_Person",
    "Fraction_Radiant",
    "Sensible_Heat_Fraction",
    "Activity_Level_Schedule_Name",
    "Enable_ASHRAE_55_Comfort_Warnings",
    "Mean_Radiant_Temperature_Calculation_Type",
    "Surface_NameAngle_Factor_List_Name",
    "Work_Efficiency_Schedule_Name",
    "Clothing_Insulation_Schedule_Name",
    "Air_Velocity_Schedule_Name",
];

const PEOPLE_ZONE_LIST: &[&str] = &[
    "Name",
    "Zone_or_ZoneList_Name",
    "Number_of_People_Schedule_Name",
    "Number_of_People_Calculation_Method",
    "Number_of_People",
    "People_per_Zone_Floor_Area",
    "Zone_Floor_Area_per_Person",
    "Fraction_Radiant",
    "Sensible_Heat_Fraction",
    "Activity_Level_Schedule_Name",
    "Carbon_Dioxide_Generation_Rate",
    "Enable_ASHRAE_55_Comfort_Warnings",
    "Mean_Radiant_Temperature_Calculation_Type",
    "Surface_NameAngle_Factor_List_Name",
    "Work_Efficiency_Schedule_Name",
    "Clothing_Insulation_Calculation_Method",
    "Clothing_Insulation_Calculation_Method_Schedule_Name",
    "Clothing_Insulation_Schedule_Name",
    "Air_Velocity_Schedule_Name",
];

const PEOPLE_SPACE: &[&str] = &[
    "Name",
    "Zone_or_ZoneList_or_Space_or_SpaceList_Name",
    "Number_of_People_Schedule_Name",
    "Number_of_People_Calculation_Method",
    "Number_of_People",
    "People_per_Floor_Area",
    "Floor_Area_per_Person",
    "Fraction_Radiant",
    "Sensible_Heat_Fraction",
    "Activity_Level_Schedule_Name",
    "Carbon_Dioxide_Generation_Rate",
    "Enable_ASHRAE_55_Comfort_Warnings",
    "Mean_Radiant_Temperature_Calculation_Type",
    "Surface_NameAngle_Factor_List_Name",
    "Work_Efficiency_Schedule_Name",
    "Clothing_Insulation_Calculation_Method",
    "Clothing_Insulation_Calculation_Method_Schedule_Name",
    "Clothing_Insulation_Schedule_Name",
    "Air_Velocity_Schedule_Name",
];

/// All the layouts known to this crate
pub static SCHEMAS: &[ClassSchema] = &[
    ClassSchema {
        class: "Version",
        fields: &["Version_Identifier"],
        extensible: &[],
        since: SchemaEra::PreZoneList,
        until: None,
    },
    ClassSchema {
        class: "Timestep",
        fields: &["Number_of_Timesteps_per_Hour"],
        extensible: &[],
        since: SchemaEra::PreZoneList,
        until: None,
    },
    ClassSchema {
        class: "Zone",
        fields: &[
            "Name",
            "Direction_of_Relative_North",
            "X_Origin",
            "Y_Origin",
            "Z_Origin",
            "Type",
            "Multiplier",
            "Ceiling_Height",
            "Volume",
            "Floor_Area",
            "Zone_Inside_Convection_Algorithm",
            "Zone_Outside_Convection_Algorithm",
            "Part_of_Total_Floor_Area",
        ],
        extensible: &[],
        since: SchemaEra::PreZoneList,
        until: None,
    },
    ClassSchema {
        class: "Space",
        fields: &[
            "Name",
            "Zone_Name",
            "Ceiling_Height",
            "Volume",
            "Floor_Area",
            "Space_Type",
        ],
        extensible: &["Tag_#"],
        since: SchemaEra::Space,
        until: None,
    },
    ClassSchema {
        class: "ZoneList",
        fields: &["Name"],
        extensible: &["Zone_#_Name"],
        since: SchemaEra::ZoneList,
        until: None,
    },
    ClassSchema {
        class: "SpaceList",
        fields: &["Name"],
        extensible: &["Space_#_Name"],
        since: SchemaEra::Space,
        until: None,
    },
    ClassSchema {
        class: "People",
        fields: PEOPLE_PRE_ZONE_LIST,
        extensible: &["Thermal_Comfort_Model_#_Type"],
        since: SchemaEra::PreZoneList,
        until: Some(SchemaEra::ZoneList),
    },
    ClassSchema {
        class: "People",
        fields: PEOPLE_ZONE_LIST,
        extensible: &["Thermal_Comfort_Model_#_Type"],
        since: SchemaEra::ZoneList,
        until: Some(SchemaEra::Space),
    },
    ClassSchema {
        class: "People",
        fields: PEOPLE_SPACE,
        extensible: &["Thermal_Comfort_Model_#_Type"],
        since: SchemaEra::Space,
        until: None,
    },
    ClassSchema {
        class: "ScheduleTypeLimits",
        fields: &[
            "Name",
            "Lower_Limit_Value",
            "Upper_Limit_Value",
            "Numeric_Type",
            "Unit_Type",
        ],
        extensible: &[],
        since: SchemaEra::PreZoneList,
        until: None,
    },
    ClassSchema {
        class: "Schedule:Compact",
        fields: &["Name", "Schedule_Type_Limits_Name"],
        extensible: &["Field_#"],
        since: SchemaEra::PreZoneList,
        until: None,
    },
    ClassSchema {
        class: "Schedule:Constant",
        fields: &["Name", "Schedule_Type_Limits_Name", "Hourly_Value"],
        extensible: &[],
        since: SchemaEra::PreZoneList,
        until: None,
    },
    ClassSchema {
        class: "ZoneControl:Thermostat",
        fields: &[
            "Name",
            "Zone_or_ZoneList_Name",
            "Control_Type_Schedule_Name",
        ],
        extensible: &["Control_#_Object_Type", "Control_#_Name"],
        since: SchemaEra::PreZoneList,
        until: None,
    },
    ClassSchema {
        class: "ThermostatSetpoint:DualSetpoint",
        fields: &[
            "Name",
            "Heating_Setpoint_Temperature_Schedule_Name",
            "Cooling_Setpoint_Temperature_Schedule_Name",
        ],
        extensible: &[],
        since: SchemaEra::PreZoneList,
        until: None,
    },
    ClassSchema {
        class: "ZoneControl:Thermostat:ThermalComfort",
        fields: &[
            "Name",
            "Zone_or_ZoneList_Name",
            "Averaging_Method",
            "Specific_People_Name",
            "Minimum_DryBulb_Temperature_Setpoint",
            "Maximum_DryBulb_Temperature_Setpoint",
            "Thermal_Comfort_Control_Type_Schedule_Name",
        ],
        extensible: &[
            "Thermal_Comfort_Control_#_Object_Type",
            "Thermal_Comfort_Control_#_Name",
        ],
        since: SchemaEra::PreZoneList,
        until: None,
    },
    ClassSchema {
        class: "ThermostatSetpoint:ThermalComfort:Fanger:DualSetpoint",
        fields: &[
            "Name",
            "Fanger_Thermal_Comfort_Heating_Schedule_Name",
            "Fanger_Thermal_Comfort_Cooling_Schedule_Name",
        ],
        extensible: &[],
        since: SchemaEra::PreZoneList,
        until: None,
    },
    ClassSchema {
        class: "EnergyManagementSystem:Sensor",
        fields: &[
            "Name",
            "OutputVariable_or_OutputMeter_Index_Key_Name",
            "OutputVariable_or_OutputMeter_Name",
        ],
        extensible: &[],
        since: SchemaEra::PreZoneList,
        until: None,
    },
    ClassSchema {
        class: "EnergyManagementSystem:Actuator",
        fields: &[
            "Name",
            "Actuated_Component_Unique_Name",
            "Actuated_Component_Type",
            "Actuated_Component_Control_Type",
        ],
        extensible: &[],
        since: SchemaEra::PreZoneList,
        until: None,
    },
    ClassSchema {
        class: "EnergyManagementSystem:GlobalVariable",
        fields: &[],
        extensible: &["Erl_Variable_#_Name"],
        since: SchemaEra::PreZoneList,
        until: None,
    },
    ClassSchema {
        class: "EnergyManagementSystem:Program",
        fields: &["Name"],
        extensible: &["Program_Line_#"],
        since: SchemaEra::PreZoneList,
        until: None,
    },
    ClassSchema {
        class: "EnergyManagementSystem:ProgramCallingManager",
        fields: &["Name", "EnergyPlus_Model_Calling_Point"],
        extensible: &["Program_Name_#"],
        since: SchemaEra::PreZoneList,
        until: None,
    },
    ClassSchema {
        class: "EnergyManagementSystem:OutputVariable",
        fields: &[
            "Name",
            "EMS_Variable_Name",
            "Type_of_Data_in_Variable",
            "Update_Frequency",
            "EMS_Program_or_Subroutine_Name",
            "Units",
        ],
        extensible: &[],
        since: SchemaEra::PreZoneList,
        until: None,
    },
    ClassSchema {
        class: "Output:Variable",
        fields: &[
            "Key_Value",
            "Variable_Name",
            "Reporting_Frequency",
            "Schedule_Name",
        ],
        extensible: &[],
        since: SchemaEra::PreZoneList,
        until: None,
    },
    ClassSchema {
        class: "OutputControl:Files",
        fields: &[
            "Output_CSV",
            "Output_MTR",
            "Output_ESO",
            "Output_EIO",
            "Output_Tabular",
            "Output_SQLite",
            "Output_JSON",
            "Output_AUDIT",
            "Output_Zone_Sizing",
            "Output_System_Sizing",
            "Output_DXF",
            "Output_BND",
            "Output_RDD",
            "Output_MDD",
            "Output_MTD",
            "Output_END",
            "Output_SHD",
        ],
        extensible: &[],
        since: SchemaEra::ZoneList,
        until: None,
    },
];

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_people_layout_by_era() {
        let legacy = schema_for("people", SchemaEra::PreZoneList).unwrap();
        assert_eq!(legacy.field_index("Zone_Name"), Some(1));
        assert!(legacy.field_index("Zone_or_ZoneList_Name").is_none());

        let zl = schema_for("PEOPLE", SchemaEra::ZoneList).unwrap();
        assert_eq!(zl.field_index("Zone or ZoneList Name"), Some(1));
        assert_eq!(zl.field_index("Air_Velocity_Schedule_Name"), Some(18));

        let modern = schema_for("People", SchemaEra::Space).unwrap();
        assert_eq!(
            modern.field_index("Zone_or_ZoneList_or_Space_or_SpaceList_Name"),
            Some(1)
        );
    }

    #[test]
    fn test_availability() {
        assert!(schema_for("SpaceList", SchemaEra::ZoneList).is_none());
        assert!(schema_for("SpaceList", SchemaEra::Space).is_some());
        assert!(schema_for("ZoneList", SchemaEra::PreZoneList).is_none());
        assert!(is_known("SpaceList"));
        assert!(!is_known("Material"));
    }

    #[test]
    fn test_grouped_extensible_fields() {
        let tc = schema_for("ZoneControl:Thermostat:ThermalComfort", SchemaEra::Space).unwrap();
        assert_eq!(
            tc.field_index("Thermal_Comfort_Control_Type_Schedule_Name"),
            Some(6)
        );
        assert_eq!(
            tc.field_index("Thermal_Comfort_Control_1_Object_Type"),
            Some(7)
        );
        assert_eq!(tc.field_index("Thermal_Comfort_Control_1_Name"), Some(8));
        assert_eq!(tc.field_index("Thermal_Comfort_Control_2_Name"), Some(10));

        assert_eq!(
            tc.field_name(9),
            Some("Thermal_Comfort_Control_2_Object_Type".to_string())
        );
        assert_eq!(tc.field_name(0), Some("Name".to_string()));

        let version = schema_for("Version", SchemaEra::Space).unwrap();
        assert_eq!(version.field_name(1), None);
    }

    #[test]
    fn test_global_variables_have_no_fixed_fields() {
        let gv = schema_for("EnergyManagementSystem:GlobalVariable", SchemaEra::Space).unwrap();
        assert_eq!(gv.field_index("Erl_Variable_1_Name"), Some(0));
        assert_eq!(gv.field_index("Erl_Variable_3_Name"), Some(2));
        assert_eq!(gv.field_index("Name"), None);
    }
}
