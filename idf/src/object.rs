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

/// An object in an EnergyPlus model: its type and its (ordered) fields.
///
/// Fields are stored as written, without the object type. Blank fields
/// are kept as empty strings so that positions are preserved.
///
/// ```
/// use idf::IdfObject;
///
/// let zone = IdfObject::new("Zone", vec!["Bedroom".to_string()]);
/// assert_eq!(zone.class, "Zone");
/// assert_eq!(zone.field(0), Some("Bedroom"));
/// assert_eq!(zone.field(3), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdfObject {
    /// The object type (e.g., `Schedule:Compact`)
    pub class: String,

    /// The values of the fields
    #[serde(default)]
    pub fields: Vec<String>,
}

impl IdfObject {
    /// Creates a new [`IdfObject`]
    pub fn new<S: Into<String>>(class: S, fields: Vec<String>) -> Self {
        Self {
            class: class.into(),
            fields,
        }
    }

    /// Borrows the value of a field, if it exists and is not blank
    pub fn field(&self, index: usize) -> Option<&str> {
        match self.fields.get(index) {
            Some(v) if !v.trim().is_empty() => Some(v.as_str()),
            _ => None,
        }
    }

    /// Sets the value of a field, padding the object with blank
    /// fields if needed
    pub fn set_field<S: Into<String>>(&mut self, index: usize, value: S) {
        if self.fields.len() <= index {
            self.fields.resize(index + 1, String::new());
        }
        self.fields[index] = value.into();
    }

    /// Checks whether this object is of a certain type (case insensitive)
    pub fn is_a(&self, class: &str) -> bool {
        self.class.eq_ignore_ascii_case(class.trim())
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_set_field_pads() {
        let mut obj = IdfObject::new("Schedule:Compact", vec!["A".to_string()]);
        obj.set_field(3, "Through: 12/31");
        assert_eq!(obj.fields.len(), 4);
        assert_eq!(obj.field(1), None);
        assert_eq!(obj.field(2), None);
        assert_eq!(obj.field(3), Some("Through: 12/31"));

        obj.set_field(0, "B");
        assert_eq!(obj.field(0), Some("B"));
        assert_eq!(obj.fields.len(), 4);
    }

    #[test]
    fn test_is_a() {
        let obj = IdfObject::new("ZoneList", vec![]);
        assert!(obj.is_a("zonelist"));
        assert!(obj.is_a(" ZONELIST "));
        assert!(!obj.is_a("Zone"));
    }
}
