//! Chat exchange orchestration.

pub mod service;
