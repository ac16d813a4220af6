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

use crate::parameters::Parameter;
use thiserror::Error;

/// The result of applying the comfort-control layer
pub type Result<T> = std::result::Result<T, ApmvError>;

/// Everything that stops the comfort-control layer from being applied
#[derive(Error, Debug)]
pub enum ApmvError {
    /// The model could not be read or modified
    #[error(transparent)]
    Model(#[from] idf::IdfError),

    /// A generated program could not be evaluated
    #[error(transparent)]
    Program(#[from] erl::EvalError),

    /// A season boundary is not a valid date
    #[error(transparent)]
    Date(#[from] calendar::DateError),

    /// A target ended up in a zone that does not exist in the model
    #[error("People '{people}' resolve to zone '{zone}', which does not exist in the model")]
    UnknownZone {
        /// The zone
        zone: String,
        /// The People object that pointed there
        people: String,
    },

    /// Two targets would share their EMS names
    #[error("targets '{first}' and '{second}' would both use the EMS suffix '{suffix}'")]
    SuffixCollision {
        /// The suffix
        suffix: String,
        /// The lookup key of the first target
        first: String,
        /// The lookup key of the second target
        second: String,
    },

    /// Two targets with different suffixes would still generate
    /// an EMS object with the same name
    #[error("targets '{first}' and '{second}' would both generate the EMS name '{identifier}'")]
    IdentifierCollision {
        /// The name generated twice
        identifier: String,
        /// The lookup key of the first target
        first: String,
        /// The lookup key of the second target
        second: String,
    },

    /// The parameter table has no row for a target
    #[error("there is no {parameter} value for target '{target}'")]
    MissingParameterRow {
        /// The lookup key of the target
        target: String,
        /// The missing parameter
        parameter: Parameter,
    },

    /// An option has a value that cannot be used
    #[error("invalid option '{option}': {msg}")]
    InvalidOption {
        /// The name of the option
        option: String,
        /// What is wrong with it
        msg: String,
    },

    /// A configuration file could not be read
    #[error("could not read configuration file '{path}': {msg}")]
    Config {
        /// The file
        path: String,
        /// What went wrong
        msg: String,
    },
}
