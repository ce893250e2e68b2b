//! # UYD Infra
//!
//! Infrastructure layer: SeaORM repositories for the three content
//! collections, the local-filesystem image store and the API key verifier.

pub mod auth;
pub mod database;
pub mod storage;
