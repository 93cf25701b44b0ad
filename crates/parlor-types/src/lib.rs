//! Shared domain types for Parlor.
//!
//! This crate contains the message log entity, pagination, configuration and
//! the error types shared by the core, infra and API layers.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod message;
