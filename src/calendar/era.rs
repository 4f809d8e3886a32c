//! Japanese calendar eras and their Gregorian year offsets.

use serde::{Deserialize, Serialize};

/// A named era of the Japanese calendar.
///
/// Each era (except Meiji, see [`Era::year_offset`]) carries a fixed offset
/// that maps an era-relative year to its Gregorian year, and a numeric code
/// used in the fixed-width display encoding on agency paperwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Era {
    /// Meiji era. Recognized for display only; no conversion offset is defined.
    Meiji,
    /// Taisho era (Gregorian years up to 1925 under the boundary rule).
    Taisho,
    /// Showa era (Gregorian years 1926 to 1988).
    Showa,
    /// Heisei era (Gregorian years 1989 to 2018).
    Heisei,
    /// Reiwa era (Gregorian years 2019 onward).
    Reiwa,
}

impl Era {
    /// Returns the offset added to an era-relative year to obtain the
    /// Gregorian year, or `None` for Meiji which has no defined offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use filing_engine::calendar::Era;
    ///
    /// assert_eq!(Era::Reiwa.year_offset(), Some(2018));
    /// assert_eq!(Era::Meiji.year_offset(), None);
    /// ```
    pub fn year_offset(&self) -> Option<i32> {
        match self {
            Era::Meiji => None,
            Era::Taisho => Some(1911),
            Era::Showa => Some(1925),
            Era::Heisei => Some(1988),
            Era::Reiwa => Some(2018),
        }
    }

    /// Returns the numeric code used by the fixed-width display encoding.
    ///
    /// # Examples
    ///
    /// ```
    /// use filing_engine::calendar::Era;
    ///
    /// assert_eq!(Era::Reiwa.display_code(), 9);
    /// assert_eq!(Era::Taisho.display_code(), 3);
    /// ```
    pub fn display_code(&self) -> u8 {
        match self {
            Era::Meiji => 1,
            Era::Taisho => 3,
            Era::Showa => 5,
            Era::Heisei => 7,
            Era::Reiwa => 9,
        }
    }

    /// Selects the era for a Gregorian year.
    ///
    /// The era whose start year is the greatest one not exceeding the input
    /// year is chosen: years before 1926 are Taisho, 1926 to 1988 are Showa,
    /// 1989 to 2018 are Heisei, and 2019 onward are Reiwa. Years before 1912
    /// are refused because the Taisho offset would yield a non-positive
    /// era-relative year.
    pub fn for_gregorian_year(year: i32) -> Option<Era> {
        match year {
            y if y >= 2019 => Some(Era::Reiwa),
            y if y >= 1989 => Some(Era::Heisei),
            y if y >= 1926 => Some(Era::Showa),
            y if y >= 1912 => Some(Era::Taisho),
            _ => None,
        }
    }

    /// Returns the lowercase name of the era.
    pub fn as_str(&self) -> &'static str {
        match self {
            Era::Meiji => "meiji",
            Era::Taisho => "taisho",
            Era::Showa => "showa",
            Era::Heisei => "heisei",
            Era::Reiwa => "reiwa",
        }
    }
}

impl std::fmt::Display for Era {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ERA-001: offsets match the statutory table
    #[test]
    fn test_year_offsets_match_table() {
        assert_eq!(Era::Taisho.year_offset(), Some(1911));
        assert_eq!(Era::Showa.year_offset(), Some(1925));
        assert_eq!(Era::Heisei.year_offset(), Some(1988));
        assert_eq!(Era::Reiwa.year_offset(), Some(2018));
    }

    /// ERA-002: meiji has no defined offset
    #[test]
    fn test_meiji_has_no_offset() {
        assert_eq!(Era::Meiji.year_offset(), None);
    }

    /// ERA-003: display codes match the paperwork table
    #[test]
    fn test_display_codes() {
        assert_eq!(Era::Meiji.display_code(), 1);
        assert_eq!(Era::Taisho.display_code(), 3);
        assert_eq!(Era::Showa.display_code(), 5);
        assert_eq!(Era::Heisei.display_code(), 7);
        assert_eq!(Era::Reiwa.display_code(), 9);
    }

    /// ERA-004: boundary years select the correct era
    #[test]
    fn test_era_selection_boundaries() {
        assert_eq!(Era::for_gregorian_year(1912), Some(Era::Taisho));
        assert_eq!(Era::for_gregorian_year(1925), Some(Era::Taisho));
        assert_eq!(Era::for_gregorian_year(1926), Some(Era::Showa));
        assert_eq!(Era::for_gregorian_year(1988), Some(Era::Showa));
        assert_eq!(Era::for_gregorian_year(1989), Some(Era::Heisei));
        assert_eq!(Era::for_gregorian_year(2018), Some(Era::Heisei));
        assert_eq!(Era::for_gregorian_year(2019), Some(Era::Reiwa));
        assert_eq!(Era::for_gregorian_year(2100), Some(Era::Reiwa));
    }

    /// ERA-005: pre-1912 years are unhandled
    #[test]
    fn test_pre_taisho_years_refused() {
        assert_eq!(Era::for_gregorian_year(1911), None);
        assert_eq!(Era::for_gregorian_year(1), None);
    }

    #[test]
    fn test_era_serialization_is_snake_case() {
        assert_eq!(serde_json::to_string(&Era::Reiwa).unwrap(), "\"reiwa\"");
        assert_eq!(serde_json::to_string(&Era::Heisei).unwrap(), "\"heisei\"");
        let era: Era = serde_json::from_str("\"showa\"").unwrap();
        assert_eq!(era, Era::Showa);
    }

    #[test]
    fn test_era_display() {
        assert_eq!(Era::Reiwa.to_string(), "reiwa");
        assert_eq!(Era::Meiji.to_string(), "meiji");
    }
}
