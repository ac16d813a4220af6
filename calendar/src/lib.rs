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

//! This is a library containing an extremely simple Date object. The
//! purpose is to help define seasons for Building Performance calculations, so it only
//! contains month and day. **It does not consider years at all**: every
//! year is assumed to have 365 days, like the weather years used in simulation.
//! Days and Months are counted from 1 (e.g. January is 1, not 0).
//!
//! ```
//! use calendar::{Date, Season};
//!
//! let date: Date = "01/05".parse().unwrap(); // 1st of May
//! assert_eq!(date.ordinal().unwrap(), 121);
//!
//! // A cooling season that goes from late November to the end of March
//! let season = Season::new(330, 90).unwrap();
//! assert!(season.contains(10));
//! assert!(!season.contains(200));
//! ```
//!
//! # Interaction with Serde
//!
//! You can enable the `serde` feature and do stuff like this:
//!
//! ```ignore
//! use calendar::Date;
//! use serde_json; // import "serde_json" and enable feature "serde"
//!
//! let v = r#"{"month": 9,"day": 4}"#;
//! let d : Date = serde_json::from_str(&v).unwrap();
//! assert_eq!(d.month, 9);
//! assert_eq!(d.day, 4);
//! ```

mod error;
pub use crate::error::{DateError, Result};

mod date;
pub use crate::date::Date;

mod season;
pub use crate::season::Season;

/// The number of days in the years considered by this library
pub const DAYS_PER_YEAR: u16 = 365;
