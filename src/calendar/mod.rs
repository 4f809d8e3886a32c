//! Era-tagged calendar dates and Gregorian conversion.
//!
//! This module contains the [`Era`] and [`EraDate`] types together with the
//! bidirectional conversion between era-tagged dates and the Gregorian
//! calendar, and the fixed-width display encoding used on agency paperwork.

mod era;
mod era_date;

pub use era::Era;
pub use era_date::EraDate;
