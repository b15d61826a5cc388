//! # IO Module
//!
//! Interface layer between a presentation layer and the domain logic. It
//! translates HTTP requests into domain commands and domain results into the
//! DTOs of the `shared` crate. No business rules live here.

pub mod rest;

pub use rest::{create_router, AppState};
