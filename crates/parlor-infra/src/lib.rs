//! Infrastructure layer for Parlor.
//!
//! Contains the SQLite implementation of the `MessageRepository` port defined
//! in `parlor-core`, plus the TOML configuration loader.

pub mod config;
pub mod sqlite;
