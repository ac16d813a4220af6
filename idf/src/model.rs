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

use crate::{IdfError, Result, SchemaEra};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The upper bound used when reading extensible lists (e.g., the members
/// of a `ZoneList`), which have no explicit length.
pub const MAX_EXTENSIBLE_GROUPS: usize = 500;

/// A handle to an object in a [`BuildingModel`].
///
/// Handles are only meaningful for the model that issued them, and become
/// stale once the object is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub(crate) u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The capabilities required from a building model.
///
/// Everything the rest of the workspace does to a model goes through this
/// trait, so any in-memory double can stand in for a real model file.
pub trait BuildingModel {
    /// The schema era of the model, which determines which object
    /// types exist and what their fields are called
    fn era(&self) -> SchemaEra;

    /// Lists the objects of a certain type, in the order in which they
    /// appear in the model
    ///
    /// Returns an [`IdfError::UnsupportedClass`] if the object type does
    /// not exist in the era of the model.
    fn objects(&self, class: &str) -> Result<Vec<ObjectId>>;

    /// Creates a new object, setting some of its fields by name. The
    /// rest are left blank.
    fn create(&mut self, class: &str, fields: &[(&str, &str)]) -> Result<ObjectId>;

    /// Removes an object from the model
    fn remove(&mut self, id: ObjectId) -> Result<()>;

    /// Retrieves the object type of an object
    fn class_of(&self, id: ObjectId) -> Result<String>;

    /// Reads a field by name. Blank and missing (but valid) fields are `None`.
    fn get_field(&self, id: ObjectId, field: &str) -> Result<Option<String>>;

    /// Writes a field by name
    fn set_field(&mut self, id: ObjectId, field: &str, value: &str) -> Result<()>;

    /// Like [`BuildingModel::objects`], but object types that do not
    /// exist in the era of the model are simply empty.
    fn objects_or_empty(&self, class: &str) -> Result<Vec<ObjectId>> {
        match self.objects(class) {
            Err(IdfError::UnsupportedClass { .. }) => Ok(Vec::new()),
            other => other,
        }
    }

    /// Reads the `Name` field of an object
    fn name(&self, id: ObjectId) -> Result<Option<String>> {
        self.get_field(id, "Name")
    }

    /// Finds an object of a certain type by its exact `Name`
    fn find(&self, class: &str, name: &str) -> Result<Option<ObjectId>> {
        for id in self.objects_or_empty(class)? {
            if self.name(id)?.as_deref() == Some(name) {
                return Ok(Some(id));
            }
        }
        Ok(None)
    }

    /// Lists the names of all the objects of a certain type
    fn names(&self, class: &str) -> Result<Vec<String>> {
        let mut ret = Vec::new();
        for id in self.objects_or_empty(class)? {
            if let Some(name) = self.name(id)? {
                ret.push(name);
            }
        }
        Ok(ret)
    }

    /// Reads an extensible field group (e.g., `Zone_#_Name`), from
    /// the first element until the first blank one.
    fn extensible_values(&self, id: ObjectId, pattern: &str) -> Result<Vec<String>> {
        let mut ret = Vec::new();
        for n in 1..=MAX_EXTENSIBLE_GROUPS {
            let field = pattern.replace('#', &n.to_string());
            match self.get_field(id, &field)? {
                Some(v) => ret.push(v),
                None => break,
            }
        }
        Ok(ret)
    }
}
