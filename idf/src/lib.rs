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

//! This crate contains the data structure utilized for describing
//! an EnergyPlus input file (`IDF`) and the capability interface through
//! which the rest of the workspace reads and mutates it.
//!
//! # Introduction
//!
//! EnergyPlus models are flat lists of objects. Each object has a type
//! (e.g., `Zone`, `People`, `EnergyManagementSystem:Program`) and an ordered
//! list of fields. This crate keeps that flat representation and adds
//! two things on top:
//!
//! * A [`schema`] with the field names of the object types this workspace
//!   touches, so that fields can be read and written by name (e.g., `Zone_Name`,
//!   `Program_Line_12`), and a [`SchemaEra`] describing which of those types exist in
//!   the version of EnergyPlus the model was written for.
//! * The [`BuildingModel`] trait, which is the only thing the comfort-control
//!   generator knows about a model: list objects by type, create, remove, get and set fields.
//!
//! # Example
//!
//! ```
//! use idf::{BuildingModel, Idf};
//!
//! let mut model = Idf::from_bytes(b"
//!     Version, 23.1;
//!     Zone, Bedroom;
//!     People, Sleepers, Bedroom, Occupancy Schedule;
//! ").unwrap();
//!
//! let people = model.objects("People").unwrap();
//! assert_eq!(people.len(), 1);
//! let zone = model
//!     .get_field(people[0], "Zone_or_ZoneList_or_Space_or_SpaceList_Name")
//!     .unwrap();
//! assert_eq!(zone, Some("Bedroom".to_string()));
//!
//! let id = model.create("Zone", &[("Name", "Kitchen")]).unwrap();
//! assert_eq!(model.name(id).unwrap(), Some("Kitchen".to_string()));
//! ```

/// Errors produced while reading, writing or querying a model
mod error;
pub use error::{IdfError, Result};

/// The field layout of the object types known to this crate
pub mod schema;
pub use schema::{ClassSchema, SchemaEra};

/// A single object in the model
mod object;
pub use object::IdfObject;

/// The capability interface over a building model
mod model;
pub use crate::model::{BuildingModel, ObjectId};

/// The in-memory model
mod store;
pub use store::Idf;

/// The module containing the functions that allow parsing a model from text files
pub mod scanner;
