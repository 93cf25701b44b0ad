//! Business logic and repository trait definitions for Parlor.
//!
//! This crate defines the storage "port" (`MessageRepository`) that the
//! infrastructure layer implements, the canned-reply `Responder`, and the
//! `ChatService` that sequences one exchange. It depends only on
//! `parlor-types` -- never on `parlor-infra` or any database crate.

pub mod chat;
pub mod reply;
pub mod repository;
