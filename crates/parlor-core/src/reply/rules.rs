//! Keyword rules mapping user text to a reply category.

use super::phrases;

/// Which reply rule matched a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyRule {
    Greeting,
    Farewell,
    Question,
    Generic,
}

impl ReplyRule {
    /// Every phrase this rule can produce.
    pub fn phrases(&self) -> &'static [&'static str] {
        match self {
            ReplyRule::Greeting => std::slice::from_ref(&phrases::GREETING),
            ReplyRule::Farewell => std::slice::from_ref(&phrases::FAREWELL),
            ReplyRule::Question => &phrases::QUESTION_ACKS,
            ReplyRule::Generic => &phrases::GENERIC_ACKS,
        }
    }
}

/// Classify a message. First match wins; keyword checks are case-insensitive
/// substring matches, so "this" counts as a greeting.
pub fn classify(input: &str) -> ReplyRule {
    let lowered = input.to_lowercase();

    if lowered.contains("hello") || lowered.contains("hi") {
        return ReplyRule::Greeting;
    }

    if lowered.contains("bye") || lowered.contains("goodbye") {
        return ReplyRule::Farewell;
    }

    if input.contains('?') {
        return ReplyRule::Question;
    }

    ReplyRule::Generic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_matches_case_insensitively() {
        assert_eq!(classify("hello there"), ReplyRule::Greeting);
        assert_eq!(classify("HELLO"), ReplyRule::Greeting);
        assert_eq!(classify("Hi!"), ReplyRule::Greeting);
    }

    #[test]
    fn test_greeting_is_substring_match() {
        // "hi" inside "this" still wins over the question rule.
        assert_eq!(classify("is this working?"), ReplyRule::Greeting);
    }

    #[test]
    fn test_greeting_beats_farewell() {
        assert_eq!(classify("hello and goodbye"), ReplyRule::Greeting);
    }

    #[test]
    fn test_farewell() {
        assert_eq!(classify("bye"), ReplyRule::Farewell);
        assert_eq!(classify("Goodbye now"), ReplyRule::Farewell);
    }

    #[test]
    fn test_farewell_beats_question() {
        assert_eq!(classify("bye?"), ReplyRule::Farewell);
    }

    #[test]
    fn test_question() {
        assert_eq!(classify("what time is it?"), ReplyRule::Question);
        assert_eq!(classify("?"), ReplyRule::Question);
    }

    #[test]
    fn test_generic() {
        assert_eq!(classify("the weather is nice"), ReplyRule::Generic);
        assert_eq!(classify(""), ReplyRule::Generic);
    }

    #[test]
    fn test_phrase_table_sizes() {
        assert_eq!(ReplyRule::Greeting.phrases().len(), 1);
        assert_eq!(ReplyRule::Farewell.phrases().len(), 1);
        assert_eq!(ReplyRule::Question.phrases().len(), 4);
        assert_eq!(ReplyRule::Generic.phrases().len(), 15);
        assert!(
            ReplyRule::Generic
                .phrases()
                .iter()
                .chain(ReplyRule::Question.phrases())
                .all(|p| !p.is_empty())
        );
    }
}
