//! Core data models for the filing engine.
//!
//! This module contains all the domain models used throughout the engine.

mod bonus;
mod dependent;
mod filing;
mod person;
mod salary;

pub use bonus::{BonusPaymentPerson, PaymentAmount};
pub use dependent::{
    ChangeAfter, ChangeType, DependentEnd, DependentRecord, DependentStart, OverseasException,
    OverseasExceptionStatus, OverseasPeriod, SpouseRecord,
};
pub use filing::{
    Actor, ActorRole, Attachment, Filing, FilingCategory, FilingStatus, FilingType,
    RejectionSnapshot,
};
pub use person::{Address, Gender, Identification, PersonIdentity, PersonName};
pub use salary::{RetroactivePayment, RewardPeriodGroup, SalaryMonth};
