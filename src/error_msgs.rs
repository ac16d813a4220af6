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
use crate::Float;
use std::fmt::{self, Display};

/// A problem in the configuration that does not stop the comfort-control
/// layer from being applied, but that the user should know about.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// A per-target mapping has a key that is not a known target
    UnknownTargetInMapping {
        /// The parameter being mapped
        parameter: Parameter,
        /// The unknown key, which is dropped
        key: String,
    },

    /// A per-target mapping does not have a value for a known target
    DefaultSubstituted {
        /// The parameter being mapped
        parameter: Parameter,
        /// The lookup key of the target
        target: String,
        /// The value used instead
        default: Float,
    },

    /// A SpaceList contains a name that is not a Space
    SpaceListMemberWithoutSpace {
        /// The member
        space: String,
        /// The SpaceList
        space_list: String,
        /// The People assigned to the SpaceList
        people: String,
    },

    /// Two People produce the same target, so the second one is ignored
    DuplicateTarget {
        /// The lookup key shared by both
        lookup_key: String,
        /// The People that was ignored
        people: String,
    },
}

impl Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnknownTargetInMapping { parameter, key } => write!(
                f,
                "'{}' is not a known target, so it was dropped from the {} values",
                key, parameter
            ),
            Warning::DefaultSubstituted {
                parameter,
                target,
                default,
            } => write!(
                f,
                "no {} value was given for target '{}'... using default value {}",
                parameter, target, default
            ),
            Warning::SpaceListMemberWithoutSpace {
                space,
                space_list,
                people,
            } => write!(
                f,
                "Space '{}' is listed in SpaceList '{}' (occupied by People '{}') but there is no such Space... skipping it",
                space, space_list, people
            ),
            Warning::DuplicateTarget { lookup_key, people } => write!(
                f,
                "People '{}' resolve to target '{}', which already exists... ignoring them",
                people, lookup_key
            ),
        }
    }
}

impl Warning {
    /// Prints the warning and stores it
    pub(crate) fn emit<C: Display>(self, module_name: C, sink: &mut Vec<Warning>) {
        print_warning(module_name, &self);
        sink.push(self);
    }
}

/// Prints a warning message.
///
/// This is meant to be used from within the different modules,
/// so that the user can know where is the warning comming from
///
/// ```
/// use apmv::error_msgs::print_warning;
/// print_warning("Name of the module", "some warning");
/// ```
pub fn print_warning<C: Display, T: Display>(module_name: C, msg: T) {
    log::warn!("[in {}] {}", module_name, msg)
}

/// The level at which progress is reported: `Info` when the user
/// asked for verbose output, `Debug` otherwise.
pub(crate) fn narration_level(verbose: bool) -> log::Level {
    if verbose {
        log::Level::Info
    } else {
        log::Level::Debug
    }
}

/// Prints an error message, in the same fashion as [`print_warning`]
///
/// ```
/// use apmv::error_msgs::print_error;
/// print_error("Name of the module", "something went wrong");
/// ```
pub fn print_error<C: Display, T: Display>(module_name: C, msg: T) {
    log::error!("[in {}] {}", module_name, msg)
}

/***********/
/* TESTING */
/***********/
