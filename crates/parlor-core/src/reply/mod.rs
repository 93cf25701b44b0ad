//! Canned reply generation.
//!
//! Replies are chosen by keyword rules over the user's text (see
//! [`rules::classify`]); the question and fallback rules pick uniformly from
//! a fixed phrase table using an injectable random source.

pub mod phrases;
pub mod responder;
pub mod rules;

pub use responder::Responder;
pub use rules::{ReplyRule, classify};
