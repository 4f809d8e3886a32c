//! Filing engine for Japanese social-insurance paperwork
//!
//! This crate provides the business core of a social-insurance filing tool:
//! era-tagged calendar dates, standard-reward and bonus calculations,
//! dependent conditional validation, typed filing schemas, and the filing
//! lifecycle state machine.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod external;
pub mod lifecycle;
pub mod models;
pub mod schema;
pub mod validation;
