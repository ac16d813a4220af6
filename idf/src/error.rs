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

use crate::{ObjectId, SchemaEra};
use thiserror::Error;

/// The result of any operation over a model
pub type Result<T> = std::result::Result<T, IdfError>;

/// Everything that can go wrong when reading or querying a model
#[derive(Error, Debug)]
pub enum IdfError {
    /// The object type exists in EnergyPlus, but not in the version
    /// the model was written for (e.g., `SpaceList` before 9.6)
    #[error("object type '{class}' is not available in {era} models")]
    UnsupportedClass {
        /// The requested object type
        class: String,
        /// The era of the model
        era: SchemaEra,
    },

    /// The object type has no field layout in the [`schema`](crate::schema),
    /// so it cannot be created or queried by field name
    #[error("object type '{0}' has no known field layout")]
    UnknownClass(String),

    /// The object type does not have such a field
    #[error("object type '{class}' has no field called '{field}'")]
    UnknownField {
        /// The object type
        class: String,
        /// The requested field
        field: String,
    },

    /// The handle does not point to an object in the model (e.g., it was removed)
    #[error("there is no object with handle {0}")]
    StaleHandle(ObjectId),

    /// The text could not be parsed as an IDF
    #[error("Error [in line {line}]: {msg}")]
    Syntax {
        /// Line in which the error was found
        line: usize,
        /// What went wrong
        msg: String,
    },

    /// A file could not be read or written
    #[error("could not access file '{path}': {source}")]
    Io {
        /// The file
        path: String,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },

    /// The JSON representation of the model could not be produced or read
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
