//! HTTP API for the filing engine.
//!
//! A thin edge over the core: schema instantiation, payload validation,
//! and the reward/bonus calculators. Lifecycle transitions stay in the
//! library; persistence-backed flows belong to the calling service.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BonusCalculationRequest, CreateFilingRequest, RewardCalculationRequest, ValidateRequest,
};
pub use response::{ApiError, ApiErrorResponse, ValidationResponse};
pub use state::AppState;
