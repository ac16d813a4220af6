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

//! Functions for creating small EnergyPlus models, used for testing
//! and benchmarking the comfort-control generator.

use idf::{BuildingModel, Idf, ObjectId, Result, SchemaEra};

/// Adds a `Zone`
pub fn add_zone(model: &mut Idf, name: &str) -> Result<ObjectId> {
    model.create("Zone", &[("Name", name)])
}

/// Adds a `Space` within a `Zone`
pub fn add_space(model: &mut Idf, name: &str, zone: &str) -> Result<ObjectId> {
    model.create("Space", &[("Name", name), ("Zone_Name", zone)])
}

/// Adds a `ZoneList`
pub fn add_zone_list(model: &mut Idf, name: &str, zones: &[&str]) -> Result<ObjectId> {
    let id = model.create("ZoneList", &[("Name", name)])?;
    for (i, zone) in zones.iter().enumerate() {
        model.set_field(id, &format!("Zone_{}_Name", i + 1), zone)?;
    }
    Ok(id)
}

/// Adds a `SpaceList`
pub fn add_space_list(model: &mut Idf, name: &str, spaces: &[&str]) -> Result<ObjectId> {
    let id = model.create("SpaceList", &[("Name", name)])?;
    for (i, space) in spaces.iter().enumerate() {
        model.set_field(id, &format!("Space_{}_Name", i + 1), space)?;
    }
    Ok(id)
}

/// Adds a `People` object assigned to a container (i.e., a `Zone`,
/// `ZoneList`, `Space` or `SpaceList`), writing the container in whatever
/// field the era of the model uses for it.
///
/// The People get an `Occupancy` schedule and an air velocity schedule
/// called `Air Velocity <name>`.
pub fn add_people(model: &mut Idf, name: &str, container: &str) -> Result<ObjectId> {
    let container_field = match model.era() {
        SchemaEra::PreZoneList => "Zone_Name",
        SchemaEra::ZoneList => "Zone_or_ZoneList_Name",
        SchemaEra::Space => "Zone_or_ZoneList_or_Space_or_SpaceList_Name",
    };
    let air_velocity = format!("Air Velocity {}", name);
    model.create(
        "People",
        &[
            ("Name", name),
            (container_field, container),
            ("Number_of_People_Schedule_Name", "Occupancy"),
            ("Number_of_People_Calculation_Method", "People"),
            ("Number_of_People", "2"),
            ("Air_Velocity_Schedule_Name", air_velocity.as_str()),
        ],
    )
}

/// Adds a temperature-based `ZoneControl:Thermostat` (and its
/// `ThermostatSetpoint:DualSetpoint`) to a zone.
pub fn add_temperature_thermostat(model: &mut Idf, zone: &str) -> Result<ObjectId> {
    let setpoint = format!("{} Dual SP", zone);
    model.create(
        "ThermostatSetpoint:DualSetpoint",
        &[
            ("Name", setpoint.as_str()),
            ("Heating_Setpoint_Temperature_Schedule_Name", "Heating SP"),
            ("Cooling_Setpoint_Temperature_Schedule_Name", "Cooling SP"),
        ],
    )?;
    let name = format!("{} Thermostat", zone);
    model.create(
        "ZoneControl:Thermostat",
        &[
            ("Name", name.as_str()),
            ("Zone_or_ZoneList_Name", zone),
            ("Control_Type_Schedule_Name", "Control Type"),
            ("Control_1_Object_Type", "ThermostatSetpoint:DualSetpoint"),
            ("Control_1_Name", setpoint.as_str()),
        ],
    )
}

/// A model written for EnergyPlus 7.2, with two zones (`Z1`, `Z2`), each
/// occupied by its own People (`P1` and `P2`). `Z1` has a
/// temperature-based thermostat.
pub fn get_legacy_test_model() -> Result<Idf> {
    let mut model = Idf::with_version("7.2");
    model.create("Timestep", &[("Number_of_Timesteps_per_Hour", "4")])?;
    add_zone(&mut model, "Z1")?;
    add_zone(&mut model, "Z2")?;
    add_temperature_thermostat(&mut model, "Z1")?;
    add_people(&mut model, "P1", "Z1")?;
    add_people(&mut model, "P2", "Z2")?;
    Ok(model)
}

/// A model written for EnergyPlus 9.4, with a `ZoneList` (`L`) containing
/// `Z1` and `Z2` occupied by `P`, and an `Office` zone occupied
/// directly by `Office People`. Every zone has a temperature-based thermostat.
pub fn get_zone_list_test_model() -> Result<Idf> {
    let mut model = Idf::with_version("9.4");
    for zone in ["Z1", "Z2", "Office"] {
        add_zone(&mut model, zone)?;
        add_temperature_thermostat(&mut model, zone)?;
    }
    add_zone_list(&mut model, "L", &["Z1", "Z2"])?;
    add_people(&mut model, "P", "L")?;
    add_people(&mut model, "Office People", "Office")?;
    Ok(model)
}

/// A model written for EnergyPlus 23.1, with a `Z9` zone split into
/// spaces `S1` and `S2`. A `SpaceList` (`SL`) containing `S1` is occupied
/// by `Q`, and `S2` is occupied directly by `R`.
pub fn get_space_list_test_model() -> Result<Idf> {
    let mut model = Idf::with_version("23.1");
    add_zone(&mut model, "Z9")?;
    add_space(&mut model, "S1", "Z9")?;
    add_space(&mut model, "S2", "Z9")?;
    add_space_list(&mut model, "SL", &["S1"])?;
    add_people(&mut model, "Q", "SL")?;
    add_people(&mut model, "R", "S2")?;
    Ok(model)
}

/// A model written for EnergyPlus 23.1 with `n_zones` zones (`Zone 0`,
/// `Zone 1`...), grouped in lists of `zones_per_list` zones, each list
/// occupied by one People object.
pub fn get_large_test_model(n_zones: usize, zones_per_list: usize) -> Result<Idf> {
    let mut model = Idf::with_version("23.1");
    let names: Vec<String> = (0..n_zones).map(|i| format!("Zone {}", i)).collect();
    for name in &names {
        add_zone(&mut model, name)?;
    }
    for (i, chunk) in names.chunks(zones_per_list.max(1)).enumerate() {
        let list = format!("List {}", i);
        let members: Vec<&str> = chunk.iter().map(|s| s.as_str()).collect();
        add_zone_list(&mut model, &list, &members)?;
        add_people(&mut model, &format!("People {}", i), &list)?;
    }
    Ok(model)
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_people_container_field_by_era() -> Result<()> {
        let model = get_legacy_test_model()?;
        let people = model.objects("People")?;
        assert_eq!(model.get_field(people[0], "Zone_Name")?, Some("Z1".to_string()));

        let model = get_zone_list_test_model()?;
        let people = model.objects("People")?;
        assert_eq!(
            model.get_field(people[0], "Zone_or_ZoneList_Name")?,
            Some("L".to_string())
        );

        let model = get_space_list_test_model()?;
        let people = model.objects("People")?;
        assert_eq!(
            model.get_field(people[1], "Zone_or_ZoneList_or_Space_or_SpaceList_Name")?,
            Some("S2".to_string())
        );
        Ok(())
    }

    #[test]
    fn test_large_model() -> Result<()> {
        let model = get_large_test_model(10, 3)?;
        assert_eq!(model.objects("Zone")?.len(), 10);
        assert_eq!(model.objects("ZoneList")?.len(), 4);
        assert_eq!(model.objects("People")?.len(), 4);
        Ok(())
    }
}
