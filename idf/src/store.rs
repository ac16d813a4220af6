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

use crate::model::BuildingModel;
use crate::schema::{is_known, schema_for, ClassSchema};
use crate::scanner::{decode, IdfScanner};
use crate::{IdfError, IdfObject, ObjectId, Result, SchemaEra};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::fs;
use std::path::Path;

/// An in-memory EnergyPlus model.
///
/// Objects are kept in insertion order. Object types without a
/// field layout in the [`schema`](crate::schema) are preserved (so they
/// are written back untouched) and can be listed, but not created
/// or queried by field name.
#[derive(Debug, Clone, Default)]
pub struct Idf {
    objects: BTreeMap<ObjectId, IdfObject>,
    index: ObjectIndex,
    next_id: u64,
}

/// Lookup tables for the objects of an [`Idf`], by uppercase object
/// type and by uppercase object type and first field.
#[derive(Debug, Clone, Default)]
struct ObjectIndex {
    by_class: HashMap<String, BTreeSet<ObjectId>>,
    by_name: HashMap<(String, String), BTreeSet<ObjectId>>,
}

fn class_key(class: &str) -> String {
    class.trim().to_ascii_uppercase()
}

fn name_key(class: &str, name: &str) -> (String, String) {
    (class_key(class), name.trim().to_uppercase())
}

impl ObjectIndex {
    fn insert(&mut self, id: ObjectId, obj: &IdfObject) {
        self.by_class.entry(class_key(&obj.class)).or_default().insert(id);
        if let Some(name) = obj.field(0) {
            self.by_name.entry(name_key(&obj.class, name)).or_default().insert(id);
        }
    }

    fn remove(&mut self, id: ObjectId, obj: &IdfObject) {
        if let Some(ids) = self.by_class.get_mut(&class_key(&obj.class)) {
            ids.remove(&id);
        }
        if let Some(name) = obj.field(0) {
            if let Some(ids) = self.by_name.get_mut(&name_key(&obj.class, name)) {
                ids.remove(&id);
            }
        }
    }

    fn of_class(&self, class: &str) -> impl Iterator<Item = ObjectId> + '_ {
        self.by_class
            .get(&class_key(class))
            .into_iter()
            .flat_map(|ids| ids.iter().copied())
    }

    fn named(&self, class: &str, name: &str) -> impl Iterator<Item = ObjectId> + '_ {
        self.by_name
            .get(&name_key(class, name))
            .into_iter()
            .flat_map(|ids| ids.iter().copied())
    }
}

impl Idf {
    /// Creates a model containing only a `Version` object
    ///
    /// ```
    /// use idf::{BuildingModel, Idf, SchemaEra};
    ///
    /// let model = Idf::with_version("9.2");
    /// assert_eq!(model.len(), 1);
    /// assert_eq!(model.era(), SchemaEra::ZoneList);
    /// ```
    pub fn with_version(version: &str) -> Self {
        let mut ret = Self::default();
        ret.push(IdfObject::new("Version", vec![version.to_string()]));
        ret
    }

    /// Parses an [`Idf`] from an array of bytes, which are read as
    /// UTF-8 or (if that fails) as Latin-1. The model is always written
    /// as UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let text = decode(bytes);
        let mut scanner = IdfScanner::new(text.as_bytes(), 1);
        let mut ret = Self::default();
        for obj in scanner.parse_objects()? {
            ret.push(obj);
        }
        Ok(ret)
    }

    /// Parses an [`Idf`] from a text file
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self> {
        let bytes = fs::read(&filename).map_err(|source| IdfError::Io {
            path: filename.as_ref().display().to_string(),
            source,
        })?;
        Self::from_bytes(&bytes)
    }

    /// Writes the model into a text file
    ///
    /// ```
    /// use idf::{BuildingModel, Idf};
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let path = dir.path().join("model.idf");
    ///
    /// let mut model = Idf::with_version("23.1");
    /// model.create("Zone", &[("Name", "Bedroom")]).unwrap();
    /// model.write_file(&path).unwrap();
    ///
    /// let other = Idf::from_file(&path).unwrap();
    /// assert_eq!(other.len(), 2);
    /// assert!(other.find("Zone", "Bedroom").unwrap().is_some());
    /// ```
    pub fn write_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        fs::write(&filename, self.to_string()).map_err(|source| IdfError::Io {
            path: filename.as_ref().display().to_string(),
            source,
        })
    }

    /// Serializes the objects of the model into a JSON array
    pub fn to_json(&self) -> Result<String> {
        let objects: Vec<&IdfObject> = self.objects.values().collect();
        Ok(serde_json::to_string_pretty(&objects)?)
    }

    /// Builds a model from a JSON array of objects
    ///
    /// ```
    /// use idf::{BuildingModel, Idf};
    ///
    /// let model = Idf::from_json(r#"[
    ///     {"class": "Version", "fields": ["23.1"]},
    ///     {"class": "Zone", "fields": ["Bedroom"]}
    /// ]"#).unwrap();
    /// assert_eq!(model.names("Zone").unwrap(), vec!["Bedroom".to_string()]);
    ///
    /// let again = Idf::from_json(&model.to_json().unwrap()).unwrap();
    /// assert_eq!(again.len(), 2);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let objects: Vec<IdfObject> = serde_json::from_str(json)?;
        let mut ret = Self::default();
        for obj in objects {
            ret.push(obj);
        }
        Ok(ret)
    }

    /// Appends an object as is, without validating it
    pub fn push(&mut self, obj: IdfObject) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.index.insert(id, &obj);
        self.objects.insert(id, obj);
        id
    }

    /// Borrows an object
    pub fn get(&self, id: ObjectId) -> Option<&IdfObject> {
        self.objects.get(&id)
    }

    /// Iterates over all the objects in the model
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &IdfObject)> {
        self.objects.iter().map(|(k, v)| (*k, v))
    }

    /// The number of objects in the model
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Checks whether the model has no objects at all
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn schema(&self, class: &str) -> Result<&'static ClassSchema> {
        let era = self.era();
        match schema_for(class, era) {
            Some(s) => Ok(s),
            None if is_known(class) => Err(IdfError::UnsupportedClass {
                class: class.to_string(),
                era,
            }),
            None => Err(IdfError::UnknownClass(class.to_string())),
        }
    }

    fn field_index(&self, obj: &IdfObject, field: &str) -> Result<usize> {
        let schema = self.schema(&obj.class)?;
        schema
            .field_index(field)
            .ok_or_else(|| IdfError::UnknownField {
                class: obj.class.clone(),
                field: field.to_string(),
            })
    }

    fn get_object(&self, id: ObjectId) -> Result<&IdfObject> {
        self.objects.get(&id).ok_or(IdfError::StaleHandle(id))
    }
}

impl BuildingModel for Idf {
    fn era(&self) -> SchemaEra {
        self.index
            .of_class("Version")
            .next()
            .and_then(|id| self.objects.get(&id))
            .and_then(|o| o.field(0))
            .map(SchemaEra::from_version)
            .unwrap_or_default()
    }

    fn objects(&self, class: &str) -> Result<Vec<ObjectId>> {
        if schema_for(class, self.era()).is_none() && is_known(class) {
            return Err(IdfError::UnsupportedClass {
                class: class.to_string(),
                era: self.era(),
            });
        }
        Ok(self.index.of_class(class).collect())
    }

    fn create(&mut self, class: &str, fields: &[(&str, &str)]) -> Result<ObjectId> {
        let schema = self.schema(class)?;
        let mut obj = IdfObject::new(schema.class, Vec::new());
        for (field, value) in fields {
            let index = schema
                .field_index(field)
                .ok_or_else(|| IdfError::UnknownField {
                    class: schema.class.to_string(),
                    field: field.to_string(),
                })?;
            obj.set_field(index, *value);
        }
        Ok(self.push(obj))
    }

    fn remove(&mut self, id: ObjectId) -> Result<()> {
        let obj = self.objects.remove(&id).ok_or(IdfError::StaleHandle(id))?;
        self.index.remove(id, &obj);
        Ok(())
    }

    fn class_of(&self, id: ObjectId) -> Result<String> {
        Ok(self.get_object(id)?.class.clone())
    }

    fn get_field(&self, id: ObjectId, field: &str) -> Result<Option<String>> {
        let obj = self.get_object(id)?;
        let index = self.field_index(obj, field)?;
        Ok(obj.field(index).map(|v| v.trim().to_string()))
    }

    fn set_field(&mut self, id: ObjectId, field: &str, value: &str) -> Result<()> {
        let index = {
            let obj = self.get_object(id)?;
            self.field_index(obj, field)?
        };
        let obj = self.objects.get_mut(&id).ok_or(IdfError::StaleHandle(id))?;
        if index == 0 {
            self.index.remove(id, obj);
            obj.set_field(index, value);
            self.index.insert(id, obj);
        } else {
            obj.set_field(index, value);
        }
        Ok(())
    }

    fn find(&self, class: &str, name: &str) -> Result<Option<ObjectId>> {
        let schema = match self.schema(class) {
            Ok(s) => s,
            Err(IdfError::UnsupportedClass { .. }) => return Ok(None),
            Err(e) => return Err(e),
        };
        if schema.field_index("Name") != Some(0) {
            return Err(IdfError::UnknownField {
                class: schema.class.to_string(),
                field: "Name".to_string(),
            });
        }
        Ok(self.index.named(class, name).find(|id| {
            self.objects
                .get(id)
                .and_then(|o| o.field(0))
                .map(|v| v.trim() == name)
                .unwrap_or(false)
        }))
    }
}

impl fmt::Display for Idf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let era = self.era();
        for obj in self.objects.values() {
            if obj.fields.is_empty() {
                writeln!(f, "{};\n", obj.class)?;
                continue;
            }
            writeln!(f, "{},", obj.class)?;
            let schema = schema_for(&obj.class, era);
            let n = obj.fields.len();
            for (i, value) in obj.fields.iter().enumerate() {
                let sep = if i + 1 == n { ';' } else { ',' };
                let value = format!("{}{}", value, sep);
                match schema.and_then(|s| s.field_name(i)) {
                    Some(name) => {
                        writeln!(f, "    {:<30}!- {}", value, name.replace('_', " "))?
                    }
                    None => writeln!(f, "    {}", value)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/***********/
/* TESTING */
/***********/
