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

use crate::{DateError, Result, DAYS_PER_YEAR};

/// A period of the year, defined by the day of the year in which it
/// starts (inclusive) and the one in which it ends (exclusive).
///
/// If the end comes before the start, the season goes across the
/// new year. A season that ends on the same day it starts contains no days.
///
/// ```
/// use calendar::Season;
///
/// let summer = Season::new(120, 210).unwrap();
/// assert!(summer.contains(120));
/// assert!(!summer.contains(210));
///
/// let southern_summer = Season::new(330, 90).unwrap();
/// assert!(southern_summer.wraps());
/// assert!(southern_summer.contains(340));
/// assert!(southern_summer.contains(10));
/// assert!(!southern_summer.contains(90));
/// assert!(!southern_summer.contains(200));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Season {
    /// The first day of the season
    pub start: u16,

    /// The first day after the season
    pub end: u16,
}

impl Season {
    /// Creates a new `Season`, checking that both days exist
    pub fn new(start: u16, end: u16) -> Result<Self> {
        for d in [start, end] {
            if d == 0 || d > DAYS_PER_YEAR {
                return Err(DateError::OutOfRange(d as i64));
            }
        }
        Ok(Self { start, end })
    }

    /// Checks whether the season goes across the new year
    pub fn wraps(&self) -> bool {
        self.start > self.end
    }

    /// Checks whether a day of the year is within the season
    pub fn contains(&self, day: u16) -> bool {
        if self.end > self.start {
            day >= self.start && day < self.end
        } else if self.start > self.end {
            day >= self.start || day < self.end
        } else {
            false
        }
    }

    /// The number of days in the season
    pub fn len(&self) -> u16 {
        if self.wraps() {
            DAYS_PER_YEAR - self.start + self.end
        } else {
            self.end - self.start
        }
    }

    /// Checks whether the season has no days at all
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/***********/
/* TESTING */
/***********/
