//! Reply generator with an injectable random source.

use std::sync::Mutex;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use super::rules::{ReplyRule, classify};

/// Produces the bot's reply for a user message.
///
/// Greeting and farewell replies are fixed. Question and generic replies are
/// drawn uniformly from their phrase table; seed the responder with
/// [`Responder::seeded`] to make those draws reproducible.
pub struct Responder {
    rng: Mutex<StdRng>,
}

impl Responder {
    /// A responder seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// A responder whose phrase selection is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Generate the reply for `input`.
    pub fn generate(&self, input: &str) -> String {
        let rule = classify(input);
        let phrases = rule.phrases();

        let reply = match rule {
            ReplyRule::Greeting | ReplyRule::Farewell => phrases[0],
            ReplyRule::Question | ReplyRule::Generic => {
                let mut rng = self.rng.lock().unwrap_or_else(|p| p.into_inner());
                phrases.choose(&mut *rng).copied().unwrap_or(phrases[0])
            }
        };

        tracing::debug!(rule = ?rule, "Generated reply");
        reply.to_string()
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}
