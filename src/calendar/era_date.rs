//! The era-tagged date value type and Gregorian conversion.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::Era;

/// A date expressed as (era, year-within-era, month, day).
///
/// The tuple is only meaningful when it maps to a real Gregorian calendar
/// date; [`EraDate::to_gregorian`] performs that check. Conversion back from
/// the Gregorian calendar always selects the era per the year-boundary rule,
/// so an `EraDate` carrying the "wrong" era for its Gregorian year does not
/// round-trip. That is intentional: callers must not back-date era labels
/// across boundaries.
///
/// # Example
///
/// ```
/// use filing_engine::calendar::{Era, EraDate};
/// use chrono::NaiveDate;
///
/// let date = EraDate { era: Era::Reiwa, year: 6, month: 4, day: 1 };
/// assert_eq!(
///     date.to_gregorian().unwrap(),
///     NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EraDate {
    /// The named era.
    pub era: Era,
    /// The era-relative year (1-based).
    pub year: u32,
    /// The month (1 to 12).
    pub month: u32,
    /// The day of month (1 to 31).
    pub day: u32,
}

impl EraDate {
    /// Converts this era-tagged date to a Gregorian date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDate`] when the tuple does not denote a
    /// real calendar date (zero year, month or day out of range, day absent
    /// from the month) or when the era is Meiji, which has no defined
    /// conversion offset.
    ///
    /// # Example
    ///
    /// ```
    /// use filing_engine::calendar::{Era, EraDate};
    ///
    /// let bad = EraDate { era: Era::Heisei, year: 31, month: 2, day: 30 };
    /// assert!(bad.to_gregorian().is_err());
    /// ```
    pub fn to_gregorian(&self) -> EngineResult<NaiveDate> {
        let offset = self
            .era
            .year_offset()
            .ok_or_else(|| EngineError::InvalidDate {
                message: format!("era '{}' has no defined conversion offset", self.era),
            })?;

        if self.year == 0 {
            return Err(EngineError::InvalidDate {
                message: format!("{} year 0 is not a valid era-relative year", self.era),
            });
        }

        let gregorian_year = self.year as i32 + offset;
        NaiveDate::from_ymd_opt(gregorian_year, self.month, self.day).ok_or_else(|| {
            EngineError::InvalidDate {
                message: format!(
                    "{} {}-{:02}-{:02} does not denote a real calendar date",
                    self.era, self.year, self.month, self.day
                ),
            }
        })
    }

    /// Converts a Gregorian date to an era-tagged date.
    ///
    /// The era whose start year is the greatest one not exceeding the input
    /// year is selected (see [`Era::for_gregorian_year`]).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDate`] for Gregorian years before 1912,
    /// for which no era offset is defined.
    ///
    /// # Example
    ///
    /// ```
    /// use filing_engine::calendar::{Era, EraDate};
    /// use chrono::NaiveDate;
    ///
    /// let date = EraDate::from_gregorian(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()).unwrap();
    /// assert_eq!(date, EraDate { era: Era::Reiwa, year: 6, month: 4, day: 1 });
    /// ```
    pub fn from_gregorian(date: NaiveDate) -> EngineResult<EraDate> {
        let era =
            Era::for_gregorian_year(date.year()).ok_or_else(|| EngineError::InvalidDate {
                message: format!(
                    "no era conversion is defined for Gregorian year {}",
                    date.year()
                ),
            })?;

        // for_gregorian_year never returns Meiji, so the offset is present.
        let offset = era.year_offset().unwrap_or(0);

        Ok(EraDate {
            era,
            year: (date.year() - offset) as u32,
            month: date.month(),
            day: date.day(),
        })
    }

    /// Renders the fixed-width `(code)-(YY)(MM)(DD)` display encoding used on
    /// agency paperwork, with the era's numeric code and each component
    /// zero-padded to two digits.
    ///
    /// This is a pure formatting transform; no parser for it exists.
    ///
    /// The encoding has no century digit, so only era years up to 99 are
    /// representable. No era in the supported range has reached year 100
    /// (reiwa would in Gregorian 2118); a year beyond the two-digit domain
    /// trips a debug assertion rather than silently encoding a wrapped year.
    ///
    /// # Example
    ///
    /// ```
    /// use filing_engine::calendar::{Era, EraDate};
    ///
    /// let date = EraDate { era: Era::Reiwa, year: 6, month: 4, day: 1 };
    /// assert_eq!(date.to_compact_string(), "9-060401");
    /// ```
    pub fn to_compact_string(&self) -> String {
        debug_assert!(
            self.year < 100,
            "era year {} does not fit the two-digit encoding",
            self.year
        );
        format!(
            "{}-{:02}{:02}{:02}",
            self.era.display_code(),
            self.year % 100,
            self.month,
            self.day
        )
    }
}

impl std::fmt::Display for EraDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}-{:02}-{:02}",
            self.era, self.year, self.month, self.day
        )
    }
}
