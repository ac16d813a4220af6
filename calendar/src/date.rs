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
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Any non-leap year works. Dates are mapped into it so that
/// `chrono` can do the validation and the day counting.
const REFERENCE_YEAR: i32 = 2007;

/// An extremely simple Date object.
/// It does not consider years at all!
/// Days and Months are counted from 1
/// (e.g. January is 1, not 0)
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Date {
    /// Months of the year, from 1 to 12
    pub month: u8,

    /// Day of the month, from 1 to N
    pub day: u8,
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.day, self.month)
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a `dd/mm` string
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || DateError::Malformed(s.to_string());
        let (day, month) = s.trim().split_once('/').ok_or_else(malformed)?;
        let day: u8 = day.trim().parse().map_err(|_| malformed())?;
        let month: u8 = month.trim().parse().map_err(|_| malformed())?;
        Date::new(month, day)
    }
}

impl Date {
    /// Creates a new `Date`, checking that it exists
    pub fn new(month: u8, day: u8) -> Result<Self> {
        let ret = Self { month, day };
        ret.naive()?;
        Ok(ret)
    }

    fn naive(&self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(REFERENCE_YEAR, self.month as u32, self.day as u32).ok_or(
            DateError::Impossible {
                day: self.day as u32,
                month: self.month as u32,
            },
        )
    }

    /// Retrieves the day of the year corresponding to the date,
    /// counting the 1st of January as day 1
    pub fn ordinal(&self) -> Result<u16> {
        Ok(self.naive()?.ordinal() as u16)
    }

    /// Transforms a day of the year (from 1 to 365) into a date
    pub fn from_ordinal(n: u16) -> Result<Self> {
        if n == 0 || n > DAYS_PER_YEAR {
            return Err(DateError::OutOfRange(n as i64));
        }
        let d = NaiveDate::from_yo_opt(REFERENCE_YEAR, n as u32)
            .ok_or(DateError::OutOfRange(n as i64))?;
        Ok(Self {
            month: d.month() as u8,
            day: d.day() as u8,
        })
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_ordinal() -> Result<()> {
        assert_eq!(Date::new(1, 1)?.ordinal()?, 1);
        assert_eq!(Date::new(2, 1)?.ordinal()?, 32);
        assert_eq!(Date::new(3, 1)?.ordinal()?, 60);
        assert_eq!(Date::new(5, 1)?.ordinal()?, 121);
        assert_eq!(Date::new(12, 31)?.ordinal()?, 365);
        Ok(())
    }

    #[test]
    fn test_from_ordinal() -> Result<()> {
        for n in 1..=DAYS_PER_YEAR {
            let d = Date::from_ordinal(n)?;
            assert_eq!(d.ordinal()?, n);
        }
        assert_eq!(Date::from_ordinal(0), Err(DateError::OutOfRange(0)));
        assert_eq!(Date::from_ordinal(366), Err(DateError::OutOfRange(366)));
        Ok(())
    }

    #[test]
    fn test_parse() -> Result<()> {
        let d: Date = "30/04".parse()?;
        assert_eq!(d, Date { month: 4, day: 30 });
        assert_eq!(d.ordinal()?, 120);
        assert_eq!(d.to_string(), "30/04");

        let d: Date = " 1/8 ".parse()?;
        assert_eq!(d.ordinal()?, 213);

        assert_eq!(
            "29/02".parse::<Date>(),
            Err(DateError::Impossible { day: 29, month: 2 })
        );
        assert!(matches!(
            "2023-04-30".parse::<Date>(),
            Err(DateError::Malformed(_))
        ));
        assert!(matches!("aa/bb".parse::<Date>(), Err(DateError::Malformed(_))));
        Ok(())
    }

    #[test]
    fn test_compare() -> Result<()> {
        let mut dates = vec![
            Date::new(12, 1)?,
            Date::new(1, 31)?,
            Date::new(2, 1)?,
            Date::new(1, 1)?,
        ];
        dates.sort();
        let ordinals: Vec<u16> = dates.iter().map(|d| d.ordinal()).collect::<Result<_>>()?;
        assert_eq!(ordinals, vec![1, 31, 32, 335]);
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() -> std::result::Result<(), String> {
        let v = r#"{
            "month": 9,
            "day": 4
        }"#;
        let d: Date = serde_json::from_str(v).map_err(|e| format!("{}", e))?;
        assert_eq!(d.month, 9);
        assert_eq!(d.day, 4);
        Ok(())
    }
}
