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

use crate::Result;
use idf::BuildingModel;
use std::collections::HashMap;

/// Lookup tables describing how zones, spaces and their lists relate
/// to each other in a model.
///
/// All the keys are case insensitive. Object types that do not exist in
/// the era of the model (e.g., `Space` in a model written for EnergyPlus 9.4)
/// simply produce empty tables.
#[derive(Debug, Clone, Default)]
pub struct HierarchyIndex {
    /// Zone name (uppercase) => Zone name, as written
    zones: HashMap<String, String>,

    /// Space name (uppercase) => name of its Zone, as written
    space_to_zone: HashMap<String, String>,

    /// ZoneList name (uppercase) => members
    zone_list_members: HashMap<String, Vec<String>>,

    /// SpaceList name (uppercase) => members
    space_list_members: HashMap<String, Vec<String>>,
}

fn key(name: &str) -> String {
    name.trim().to_uppercase()
}

impl HierarchyIndex {
    /// Reads the lookup tables from a model
    pub fn build<M: BuildingModel>(model: &M) -> Result<Self> {
        let mut ret = Self::default();

        for name in model.names("Zone")? {
            ret.zones.entry(key(&name)).or_insert(name);
        }

        for id in model.objects_or_empty("Space")? {
            let name = model.name(id)?;
            let zone = model.get_field(id, "Zone_Name")?;
            if let (Some(name), Some(zone)) = (name, zone) {
                ret.space_to_zone.entry(key(&name)).or_insert(zone);
            }
        }

        for id in model.objects_or_empty("ZoneList")? {
            if let Some(name) = model.name(id)? {
                let members = model.extensible_values(id, "Zone_#_Name")?;
                ret.zone_list_members.entry(key(&name)).or_insert(members);
            }
        }

        for id in model.objects_or_empty("SpaceList")? {
            if let Some(name) = model.name(id)? {
                let members = model.extensible_values(id, "Space_#_Name")?;
                ret.space_list_members.entry(key(&name)).or_insert(members);
            }
        }

        Ok(ret)
    }

    /// Checks whether the model has no zones at all
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Finds a Zone, returning its name as written in the model
    pub fn zone(&self, name: &str) -> Option<&str> {
        self.zones.get(&key(name)).map(|s| s.as_str())
    }

    /// Finds the Zone that contains a Space
    pub fn zone_of_space(&self, space: &str) -> Option<&str> {
        self.space_to_zone.get(&key(space)).map(|s| s.as_str())
    }

    /// Retrieves the members of a ZoneList
    pub fn zone_list(&self, name: &str) -> Option<&[String]> {
        self.zone_list_members.get(&key(name)).map(|v| v.as_slice())
    }

    /// Retrieves the members of a SpaceList
    pub fn space_list(&self, name: &str) -> Option<&[String]> {
        self.space_list_members.get(&key(name)).map(|v| v.as_slice())
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;
    use idf::Idf;
    use test_models::*;

    #[test]
    fn test_legacy_model() -> Result<()> {
        let model = get_legacy_test_model()?;
        let index = HierarchyIndex::build(&model)?;
        assert!(!index.is_empty());
        assert_eq!(index.zone("z1"), Some("Z1"));
        assert_eq!(index.zone("Z3"), None);
        assert!(index.zone_of_space("Z1").is_none());
        assert!(index.zone_list("L").is_none());
        Ok(())
    }

    #[test]
    fn test_lists() -> Result<()> {
        let model = get_space_list_test_model()?;
        let index = HierarchyIndex::build(&model)?;
        assert_eq!(index.zone_of_space("s1"), Some("Z9"));
        assert_eq!(index.space_list("sl"), Some(&["S1".to_string()][..]));

        let model = get_zone_list_test_model()?;
        let index = HierarchyIndex::build(&model)?;
        assert_eq!(
            index.zone_list(" l "),
            Some(&["Z1".to_string(), "Z2".to_string()][..])
        );
        Ok(())
    }

    #[test]
    fn test_lists_stop_at_first_blank() -> Result<()> {
        let mut model = Idf::with_version("23.1");
        let id = add_zone_list(&mut model, "L", &["A", "B"])?;
        model.set_field(id, "Zone_4_Name", "D")?;
        let index = HierarchyIndex::build(&model)?;
        assert_eq!(index.zone_list("L").map(|m| m.len()), Some(2));
        Ok(())
    }

    #[test]
    fn test_empty_model() -> Result<()> {
        let model = Idf::with_version("23.1");
        let index = HierarchyIndex::build(&model)?;
        assert!(index.is_empty());
        Ok(())
    }
}
