//! # UYD Shared
//!
//! Types shared between the API surface and anything that renders it:
//! standardized response envelopes and the page view-models built from
//! query-layer output.

pub mod dto;
pub mod response;
pub mod viewmodel;

pub use response::{ErrorResponse, MessageResponse};
