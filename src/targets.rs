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
use crate::generator::{target_identifiers, EmsNamespace};
use crate::hierarchy::HierarchyIndex;
use crate::sanitize::sanitize;
use crate::{ApmvError, Result};
use idf::{BuildingModel, IdfError, ObjectId};
use std::collections::{HashMap, HashSet};

const MODULE_NAME: &str = "Target Resolver";

/// The fields in which `People` objects store the name of the zone (or
/// list, or space) they occupy, from the most recent era to the oldest.
const CONTAINER_FIELDS: [&str; 3] = [
    "Zone_or_ZoneList_or_Space_or_SpaceList_Name",
    "Zone_or_ZoneList_Name",
    "Zone_Name",
];

/// A `People` object, reduced to what is needed for finding the zones it occupies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupantGroup {
    /// The name of the `People` object
    pub name: String,

    /// The name of the Zone, ZoneList, Space or SpaceList it is assigned to
    pub container: String,
}

/// Reads the container of a `People` object, from whichever field
/// the era of the model uses for it.
fn read_container<M: BuildingModel>(model: &M, id: ObjectId) -> Result<Option<String>> {
    for field in CONTAINER_FIELDS {
        match model.get_field(id, field) {
            Ok(v) => return Ok(v),
            Err(IdfError::UnknownField { .. }) => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(None)
}

/// Lists the `People` objects in a model.
///
/// `People` that are not assigned to anything are ignored.
pub fn occupant_groups<M: BuildingModel>(model: &M) -> Result<Vec<OccupantGroup>> {
    let mut ret = Vec::new();
    for id in model.objects("People")? {
        let name = model.name(id)?.unwrap_or_default();
        match read_container(model, id)? {
            Some(container) => ret.push(OccupantGroup { name, container }),
            None => log::debug!("People '{}' are not assigned to any zone... ignoring them", name),
        }
    }
    Ok(ret)
}

/// How an [`OccupantGroup`] reached the zone of a [`Target`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    /// Through a SpaceList and then a Space
    SpaceList,
    /// Through a ZoneList
    ZoneList,
    /// Through a Space
    Space,
    /// Directly
    Zone,
}

/// The unit of control: one `People` object in one zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// The key identifying this target in the per-target parameters
    pub lookup_key: String,

    /// The key of the sensors reading the PMV and occupant count
    pub sensor_key: String,

    /// The suffix of every EMS object generated for this target
    pub ems_suffix: String,

    /// The Zone that hosts the setpoint schedules
    pub owning_zone: String,

    /// The name of the `People` object
    pub people: String,

    /// How the `People` reached the zone
    pub assignment: Assignment,
}

impl Target {
    fn new(
        lookup_key: String,
        sensor_key: String,
        owning_zone: String,
        people: &str,
        assignment: Assignment,
    ) -> Self {
        Self {
            ems_suffix: sanitize(&lookup_key),
            lookup_key,
            sensor_key,
            owning_zone,
            people: people.to_string(),
            assignment,
        }
    }
}

/// The targets found in a model, and what went wrong while finding them
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// The targets, in the order in which their `People` appear in the model
    pub targets: Vec<Target>,

    /// The warnings
    pub warnings: Vec<Warning>,
}

impl Resolution {
    /// The lookup keys of all the targets
    pub fn lookup_keys(&self) -> Vec<String> {
        self.targets.iter().map(|t| t.lookup_key.clone()).collect()
    }

    /// The zones that contain at least one target, in order of
    /// appearance and without repetitions.
    pub fn unique_zones(&self) -> Vec<String> {
        let mut ret: Vec<String> = Vec::new();
        for t in &self.targets {
            if !ret.iter().any(|z| z.eq_ignore_ascii_case(&t.owning_zone)) {
                ret.push(t.owning_zone.clone());
            }
        }
        ret
    }

    /// Checks that every target ended up in a Zone that exists
    pub fn check_zones(&self, index: &HierarchyIndex) -> Result<()> {
        for t in &self.targets {
            if index.zone(&t.owning_zone).is_none() {
                return Err(ApmvError::UnknownZone {
                    zone: t.owning_zone.clone(),
                    people: t.people.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Expands one occupant group into its targets. Lists have priority over
/// single Spaces, which have priority over Zones: SpaceList > ZoneList > Space > Zone.
fn expand(group: &OccupantGroup, index: &HierarchyIndex, warnings: &mut Vec<Warning>) -> Vec<Target> {
    let container = group.container.as_str();
    let people = group.name.as_str();
    let zone_name = |z: &str| index.zone(z).unwrap_or(z).to_string();

    if let Some(spaces) = index.space_list(container) {
        let mut ret = Vec::with_capacity(spaces.len());
        for space in spaces {
            match index.zone_of_space(space) {
                Some(zone) => {
                    let key = format!("{} {}", space, people);
                    ret.push(Target::new(
                        key.clone(),
                        key,
                        zone_name(zone),
                        people,
                        Assignment::SpaceList,
                    ))
                }
                None => Warning::SpaceListMemberWithoutSpace {
                    space: space.clone(),
                    space_list: container.to_string(),
                    people: people.to_string(),
                }
                .emit(MODULE_NAME, warnings),
            }
        }
        ret
    } else if let Some(zones) = index.zone_list(container) {
        zones
            .iter()
            .map(|zone| {
                let key = format!("{} {}", zone, people);
                Target::new(key.clone(), key, zone_name(zone), people, Assignment::ZoneList)
            })
            .collect()
    } else if let Some(zone) = index.zone_of_space(container) {
        let key = format!("{} {}", container, people);
        vec![Target::new(
            key.clone(),
            key,
            zone_name(zone),
            people,
            Assignment::Space,
        )]
    } else {
        // Also used when the container is unknown, so that the
        // problem is reported when checking the zones.
        vec![Target::new(
            container.to_string(),
            people.to_string(),
            zone_name(container),
            people,
            Assignment::Zone,
        )]
    }
}

/// Checks that no two targets generate an EMS object with the same name.
/// Prefixes overlap (e.g., `adap_coeff` + `cooling_Office` is
/// `adap_coeff_cooling` + `Office`), so distinct suffixes are not enough.
fn check_identifiers(targets: &[Target]) -> Result<()> {
    let mut owners: HashMap<(EmsNamespace, String), usize> = HashMap::new();
    for (i, target) in targets.iter().enumerate() {
        for (namespace, identifier) in target_identifiers(&target.ems_suffix) {
            match owners.insert((namespace, identifier.to_uppercase()), i) {
                Some(first) if first != i => {
                    return Err(ApmvError::IdentifierCollision {
                        identifier,
                        first: targets[first].lookup_key.clone(),
                        second: target.lookup_key.clone(),
                    })
                }
                _ => {}
            }
        }
    }
    Ok(())
}

/// Finds the targets of a set of occupant groups.
///
/// Targets with a lookup key that was already produced by a previous
/// group are dropped (with a warning). Two targets whose EMS suffixes
/// or generated names would be the same (EMS names are not case
/// sensitive) are an error.
pub fn resolve(groups: &[OccupantGroup], index: &HierarchyIndex) -> Result<Resolution> {
    let mut ret = Resolution::default();
    let mut seen_keys: HashSet<String> = HashSet::new();
    let mut seen_suffixes: HashMap<String, String> = HashMap::new();

    for group in groups {
        for target in expand(group, index, &mut ret.warnings) {
            if !seen_keys.insert(target.lookup_key.to_uppercase()) {
                Warning::DuplicateTarget {
                    lookup_key: target.lookup_key,
                    people: target.people,
                }
                .emit(MODULE_NAME, &mut ret.warnings);
                continue;
            }
            if let Some(first) =
                seen_suffixes.insert(target.ems_suffix.to_uppercase(), target.lookup_key.clone())
            {
                return Err(ApmvError::SuffixCollision {
                    suffix: target.ems_suffix,
                    first,
                    second: target.lookup_key,
                });
            }
            ret.targets.push(target);
        }
    }
    check_identifiers(&ret.targets)?;
    Ok(ret)
}

/// Reads the occupant groups and the hierarchy of a model, and finds its targets
pub fn resolve_model<M: BuildingModel>(model: &M) -> Result<(HierarchyIndex, Resolution)> {
    let index = HierarchyIndex::build(model)?;
    let groups = occupant_groups(model)?;
    let resolution = resolve(&groups, &index)?;
    Ok((index, resolution))
}

/***********/
/* TESTING */
/***********/
