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

use thiserror::Error;

/// The result of parsing or building dates
pub type Result<T> = std::result::Result<T, DateError>;

/// Everything that can go wrong when dealing with dates
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The text is not written as `dd/mm`
    #[error("'{0}' is not a date in the 'dd/mm' format")]
    Malformed(String),

    /// The month has no such day (e.g., 30/02)
    #[error("there is no day {day} in month {month}")]
    Impossible {
        /// Day of the month
        day: u32,
        /// Month of the year
        month: u32,
    },

    /// The day of the year is not in `1..=365`
    #[error("day of the year {0} is out of range (it should be between 1 and 365)")]
    OutOfRange(i64),
}
