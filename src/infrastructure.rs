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
use crate::{Float, Result};
use idf::{BuildingModel, ObjectId};

/// The `ScheduleTypeLimits` used by every schedule created here
pub const ANY_NUMBER: &str = "Any Number";

/// The value of the heating schedule of a zone until the
/// EMS programs overwrite it
pub const DEFAULT_HEATING_PMV: Float = -0.5;

/// The value of the cooling schedule of a zone until the
/// EMS programs overwrite it
pub const DEFAULT_COOLING_PMV: Float = 0.5;

/// `ThermalComfortControlType` for dual-setpoint Fanger control
const FANGER_DUAL_SETPOINT_CONTROL: Float = 4.;

const FANGER_CLASS: &str = "ThermostatSetpoint:ThermalComfort:Fanger:DualSetpoint";
const COMFORT_THERMOSTAT_CLASS: &str = "ZoneControl:Thermostat:ThermalComfort";
const TEMPERATURE_THERMOSTAT_CLASS: &str = "ZoneControl:Thermostat";
const DUAL_SETPOINT_CLASS: &str = "ThermostatSetpoint:DualSetpoint";

/// The name of the schedule holding the PMV heating setpoint of a zone
pub fn heating_schedule_name(zone: &str) -> String {
    format!("PMV_H_SP_{}", zone)
}

/// The name of the schedule holding the PMV cooling setpoint of a zone
pub fn cooling_schedule_name(zone: &str) -> String {
    format!("PMV_C_SP_{}", zone)
}

fn control_type_schedule_name(zone: &str) -> String {
    format!("Thermal Comfort Control Type Schedule Name {}", zone)
}

fn fanger_name(zone: &str) -> String {
    format!("Fanger Setpoint {}", zone)
}

fn comfort_thermostat_name(zone: &str) -> String {
    format!("Thermostat Setpoint Dual Setpoint {}", zone)
}

/// Creates the `Any Number` `ScheduleTypeLimits`, unless it is already there
pub fn ensure_schedule_type_limits<M: BuildingModel>(model: &mut M, verbose: bool) -> Result<()> {
    if model.find("ScheduleTypeLimits", ANY_NUMBER)?.is_none() {
        model.create("ScheduleTypeLimits", &[("Name", ANY_NUMBER)])?;
        log::log!(narration_level(verbose), "Added - {} ScheduleTypeLimits", ANY_NUMBER);
    }
    Ok(())
}

/// Creates a `Schedule:Compact` with the same value all year long,
/// unless a schedule with that name exists.
pub fn ensure_constant_schedule<M: BuildingModel>(
    model: &mut M,
    name: &str,
    value: Float,
    verbose: bool,
) -> Result<ObjectId> {
    if let Some(id) = model.find("Schedule:Compact", name)? {
        log::debug!("Not added - {} Schedule already exists", name);
        return Ok(id);
    }
    let value = value.to_string();
    let id = model.create(
        "Schedule:Compact",
        &[
            ("Name", name),
            ("Schedule_Type_Limits_Name", ANY_NUMBER),
            ("Field_1", "Through: 12/31"),
            ("Field_2", "For: AllDays"),
            ("Field_3", "Until: 24:00"),
            ("Field_4", value.as_str()),
        ],
    )?;
    log::log!(narration_level(verbose), "Added - {} Schedule", name);
    Ok(id)
}

/// Where a kind of thermostat keeps its settings, used for copying it
struct ThermostatLayout {
    class: &'static str,
    fixed: &'static [&'static str],
    control_type: &'static str,
    control_name: &'static str,
}

const TEMPERATURE_THERMOSTAT: ThermostatLayout = ThermostatLayout {
    class: TEMPERATURE_THERMOSTAT_CLASS,
    fixed: &["Control_Type_Schedule_Name"],
    control_type: "Control_#_Object_Type",
    control_name: "Control_#_Name",
};

const COMFORT_THERMOSTAT: ThermostatLayout = ThermostatLayout {
    class: COMFORT_THERMOSTAT_CLASS,
    fixed: &[
        "Averaging_Method",
        "Specific_People_Name",
        "Minimum_DryBulb_Temperature_Setpoint",
        "Maximum_DryBulb_Temperature_Setpoint",
        "Thermal_Comfort_Control_Type_Schedule_Name",
    ],
    control_type: "Thermal_Comfort_Control_#_Object_Type",
    control_name: "Thermal_Comfort_Control_#_Name",
};

/// Lists the ZoneLists that contain `zone`, with all their members
fn zone_lists_containing<M: BuildingModel>(
    model: &M,
    zone: &str,
) -> Result<Vec<(String, Vec<String>)>> {
    let mut ret = Vec::new();
    for id in model.objects_or_empty("ZoneList")? {
        let members = model.extensible_values(id, "Zone_#_Name")?;
        if members.iter().any(|m| m.eq_ignore_ascii_case(zone)) {
            ret.push((model.name(id)?.unwrap_or_default(), members));
        }
    }
    Ok(ret)
}

/// Replaces a thermostat assigned to a ZoneList by one thermostat per
/// member, named `<zone> <thermostat>`. Returns the new thermostats
/// and their zones.
fn split_list_thermostat<M: BuildingModel>(
    model: &mut M,
    layout: &ThermostatLayout,
    id: ObjectId,
    members: &[String],
    verbose: bool,
) -> Result<Vec<(String, ObjectId)>> {
    let name = model.name(id)?.unwrap_or_default();
    let mut fixed = Vec::with_capacity(layout.fixed.len());
    for field in layout.fixed {
        if let Some(value) = model.get_field(id, field)? {
            fixed.push((*field, value));
        }
    }
    let types = model.extensible_values(id, layout.control_type)?;
    let names = model.extensible_values(id, layout.control_name)?;
    model.remove(id)?;
    log::log!(narration_level(verbose), "Removed - {} {}", name, layout.class);

    let mut ret = Vec::with_capacity(members.len());
    for zone in members {
        let new_name = format!("{} {}", zone, name);
        let new_id = model.create(
            layout.class,
            &[("Name", new_name.as_str()), ("Zone_or_ZoneList_Name", zone.as_str())],
        )?;
        for (field, value) in &fixed {
            model.set_field(new_id, field, value)?;
        }
        for (i, (control_type, control_name)) in types.iter().zip(&names).enumerate() {
            let n = (i + 1).to_string();
            model.set_field(new_id, &layout.control_type.replace('#', &n), control_type)?;
            model.set_field(new_id, &layout.control_name.replace('#', &n), control_name)?;
        }
        log::log!(narration_level(verbose), "Added - {} {}", new_name, layout.class);
        ret.push((zone.clone(), new_id));
    }
    Ok(ret)
}

/// Lists the thermostats of a kind that control `zone`. Those assigned
/// to a ZoneList containing `zone` are split first, so every zone of
/// the list gets its own copy.
fn controls_of_zone<M: BuildingModel>(
    model: &mut M,
    layout: &ThermostatLayout,
    zone: &str,
    verbose: bool,
) -> Result<Vec<ObjectId>> {
    let lists = zone_lists_containing(model, zone)?;
    let mut ret = Vec::new();
    for id in model.objects(layout.class)? {
        let assigned = match model.get_field(id, "Zone_or_ZoneList_Name")? {
            Some(z) => z,
            None => continue,
        };
        if assigned.eq_ignore_ascii_case(zone) {
            ret.push(id);
        } else if let Some((_, members)) =
            lists.iter().find(|(list, _)| list.eq_ignore_ascii_case(&assigned))
        {
            for (member, new_id) in split_list_thermostat(model, layout, id, members, verbose)? {
                if member.eq_ignore_ascii_case(zone) {
                    ret.push(new_id)
                }
            }
        }
    }
    Ok(ret)
}

/// Lists the `(object type, name)` pairs of the controls of a thermostat
fn thermostat_controls<M: BuildingModel>(model: &M, id: ObjectId) -> Result<Vec<(String, String)>> {
    let types = model.extensible_values(id, "Control_#_Object_Type")?;
    let names = model.extensible_values(id, "Control_#_Name")?;
    Ok(types.into_iter().zip(names).collect())
}

/// Removes the temperature-based thermostats of a zone, as well as the
/// dual setpoints that no other thermostat uses.
fn remove_temperature_thermostats<M: BuildingModel>(
    model: &mut M,
    zone: &str,
    verbose: bool,
) -> Result<()> {
    let mut setpoints = Vec::new();
    for id in controls_of_zone(model, &TEMPERATURE_THERMOSTAT, zone, verbose)? {
        for (class, name) in thermostat_controls(model, id)? {
            if class.eq_ignore_ascii_case(DUAL_SETPOINT_CLASS) {
                setpoints.push(name)
            }
        }
        let name = model.name(id)?.unwrap_or_default();
        model.remove(id)?;
        log::log!(
            narration_level(verbose),
            "Removed - {} ZoneControl:Thermostat",
            name
        );
    }

    'setpoints: for setpoint in setpoints {
        for id in model.objects(TEMPERATURE_THERMOSTAT_CLASS)? {
            for (_, name) in thermostat_controls(model, id)? {
                if name.eq_ignore_ascii_case(&setpoint) {
                    continue 'setpoints;
                }
            }
        }
        for id in model.objects(DUAL_SETPOINT_CLASS)? {
            if model
                .name(id)?
                .map(|n| n.eq_ignore_ascii_case(&setpoint))
                .unwrap_or(false)
            {
                model.remove(id)?;
                log::log!(
                    narration_level(verbose),
                    "Removed - {} ThermostatSetpoint:DualSetpoint",
                    setpoint
                );
            }
        }
    }
    Ok(())
}

/// Creates (or rewires) the Fanger dual setpoint of a zone so it
/// uses its PMV schedules
fn ensure_fanger_setpoint<M: BuildingModel>(
    model: &mut M,
    name: &str,
    zone: &str,
    verbose: bool,
) -> Result<()> {
    let heating = heating_schedule_name(zone);
    let cooling = cooling_schedule_name(zone);
    match model.find(FANGER_CLASS, name)? {
        Some(id) => {
            model.set_field(id, "Fanger_Thermal_Comfort_Heating_Schedule_Name", &heating)?;
            model.set_field(id, "Fanger_Thermal_Comfort_Cooling_Schedule_Name", &cooling)?;
            log::debug!("Updated - {} {}", name, FANGER_CLASS);
        }
        None => {
            model.create(
                FANGER_CLASS,
                &[
                    ("Name", name),
                    ("Fanger_Thermal_Comfort_Heating_Schedule_Name", heating.as_str()),
                    ("Fanger_Thermal_Comfort_Cooling_Schedule_Name", cooling.as_str()),
                ],
            )?;
            log::log!(narration_level(verbose), "Added - {} {}", name, FANGER_CLASS);
        }
    }
    Ok(())
}

/// Makes sure a zone is controlled by a Fanger thermal-comfort
/// thermostat driven by its PMV schedules.
///
/// * An existing thermal-comfort thermostat is kept, and its first
///   control becomes the Fanger dual setpoint of the zone (`Fanger Setpoint <zone>`)
/// * Temperature-based thermostats are replaced by a thermal-comfort one
/// * Zones without a thermostat get a thermal-comfort one
///
/// Thermostats shared through a ZoneList are split into one per zone beforehand.
pub fn ensure_comfort_thermostat<M: BuildingModel>(
    model: &mut M,
    zone: &str,
    verbose: bool,
) -> Result<()> {
    ensure_constant_schedule(model, &heating_schedule_name(zone), DEFAULT_HEATING_PMV, verbose)?;
    ensure_constant_schedule(model, &cooling_schedule_name(zone), DEFAULT_COOLING_PMV, verbose)?;

    let existing = controls_of_zone(model, &COMFORT_THERMOSTAT, zone, verbose)?;
    if let Some(id) = existing.first() {
        let fanger = fanger_name(zone);
        model.set_field(*id, "Thermal_Comfort_Control_1_Object_Type", FANGER_CLASS)?;
        model.set_field(*id, "Thermal_Comfort_Control_1_Name", &fanger)?;
        return ensure_fanger_setpoint(model, &fanger, zone, verbose);
    }

    remove_temperature_thermostats(model, zone, verbose)?;

    let control_type = control_type_schedule_name(zone);
    ensure_constant_schedule(model, &control_type, FANGER_DUAL_SETPOINT_CONTROL, verbose)?;
    let fanger = fanger_name(zone);
    ensure_fanger_setpoint(model, &fanger, zone, verbose)?;
    let name = comfort_thermostat_name(zone);
    model.create(
        COMFORT_THERMOSTAT_CLASS,
        &[
            ("Name", name.as_str()),
            ("Zone_or_ZoneList_Name", zone),
            ("Averaging_Method", "PeopleAverage"),
            ("Thermal_Comfort_Control_Type_Schedule_Name", control_type.as_str()),
            ("Thermal_Comfort_Control_1_Object_Type", FANGER_CLASS),
            ("Thermal_Comfort_Control_1_Name", fanger.as_str()),
        ],
    )?;
    log::log!(
        narration_level(verbose),
        "Added - {} {}",
        name,
        COMFORT_THERMOSTAT_CLASS
    );
    Ok(())
}

/// Prepares the schedules and thermostats of every zone that
/// contains at least one target. Can be called more than once.
pub fn ensure_infrastructure<M: BuildingModel>(
    model: &mut M,
    zones: &[String],
    verbose: bool,
) -> Result<()> {
    ensure_schedule_type_limits(model, verbose)?;
    for zone in zones {
        ensure_comfort_thermostat(model, zone, verbose)?;
    }
    Ok(())
}

/***********/
/* TESTING */
/***********/
