//! Prompt building and `random` substitution
//!
//! A headline request carries four free-text fields. Three of them are
//! categorical and may hold the sentinel `random` (any case), which is
//! replaced by a uniform draw from the matching [`Vocabulary`] every time the
//! request is resolved. Any other value passes through unchanged, even when
//! it is not part of the vocabulary.

use rand::Rng;
use serde::Deserialize;

use crate::vocabulary::Vocabulary;

/// Sentinel value asking for a random vocabulary entry
pub const RANDOM_SENTINEL: &str = "random";

pub const HEADLINE_MAX_TOKENS: u32 = 100;
pub const EMOJI_MAX_TOKENS: u32 = 10;
pub const DESCRIPTION_MAX_TOKENS: u32 = 60;

/// Upper bound on whitespace-separated words kept in a description
pub const DESCRIPTION_MAX_WORDS: usize = 30;

/// Raw form submission
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlineRequest {
    pub user: String,
    pub topic: String,
    pub engagement_format: String,
    pub emotional_trigger: String,
    pub tone: String,
}

/// A categorical field after parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Random,
    Value(String),
}

impl Choice {
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case(RANDOM_SENTINEL) {
            Choice::Random
        } else {
            Choice::Value(raw.to_string())
        }
    }

    pub fn resolve<R: Rng + ?Sized>(&self, vocab: Vocabulary, rng: &mut R) -> String {
        match self {
            Choice::Random => vocab.pick(rng).to_string(),
            Choice::Value(value) => value.clone(),
        }
    }
}

/// Concrete values used for one generated row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFields {
    pub topic: String,
    pub engagement_format: String,
    pub emotional_trigger: String,
    pub tone: String,
}

/// Parsed request, ready to be resolved once per generated row
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    topic: String,
    engagement_format: Choice,
    emotional_trigger: Choice,
    tone: Choice,
}

impl PromptBuilder {
    pub fn new(topic: &str, engagement_format: &str, emotional_trigger: &str, tone: &str) -> Self {
        Self {
            topic: topic.to_string(),
            engagement_format: Choice::parse(engagement_format),
            emotional_trigger: Choice::parse(emotional_trigger),
            tone: Choice::parse(tone),
        }
    }

    pub fn from_request(request: &HeadlineRequest) -> Self {
        Self::new(
            &request.topic,
            &request.engagement_format,
            &request.emotional_trigger,
            &request.tone,
        )
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Draw fresh values for every `random` field
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> ResolvedFields {
        ResolvedFields {
            topic: self.topic.clone(),
            engagement_format: self
                .engagement_format
                .resolve(Vocabulary::EngagementFormat, rng),
            emotional_trigger: self
                .emotional_trigger
                .resolve(Vocabulary::EmotionalTrigger, rng),
            tone: self.tone.resolve(Vocabulary::Tone, rng),
        }
    }
}

pub fn headline_prompt(fields: &ResolvedFields) -> String {
    format!(
        "Create an ad headline for {topic} with the tone {tone} and the following conditions:\n\
         1. Engagement Format: {format}\n\
         2. Emotional Trigger: {trigger}\n\
         3. Tone: {tone}",
        topic = fields.topic,
        tone = fields.tone,
        format = fields.engagement_format,
        trigger = fields.emotional_trigger,
    )
}

pub fn emoji_prompt(headline: &str) -> String {
    format!(
        "What is an appropriate emoji to go with this headline: {}?",
        headline
    )
}

pub fn description_prompt(topic: &str) -> String {
    format!(
        "Describe the idea behind the topic {} in {} words or less.",
        topic, DESCRIPTION_MAX_WORDS
    )
}

/// Prefix a headline with an emoji, skipping the separator when there is none
pub fn with_emoji(emoji: &str, headline: &str) -> String {
    let emoji = emoji.trim();
    if emoji.is_empty() {
        headline.to_string()
    } else {
        format!("{} {}", emoji, headline)
    }
}

/// Keep at most `max_words` whitespace-separated tokens, joined by single spaces
pub fn truncate_words(text: &str, max_words: usize) -> String {
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::{EMOTIONAL_TRIGGERS, ENGAGEMENT_FORMATS, TONES};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_choice_parse_is_case_insensitive() {
        assert_eq!(Choice::parse("random"), Choice::Random);
        assert_eq!(Choice::parse("RANDOM"), Choice::Random);
        assert_eq!(Choice::parse("RaNdOm"), Choice::Random);
        assert_eq!(
            Choice::parse("Urgency"),
            Choice::Value("Urgency".to_string())
        );
        // Not trimmed: only the exact sentinel counts
        assert_eq!(
            Choice::parse(" random"),
            Choice::Value(" random".to_string())
        );
    }

    #[test]
    fn test_resolve_random_fields() {
        let builder = PromptBuilder::new("knee pain relief", "Random", "Urgency", "random");
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..50 {
            let fields = builder.resolve(&mut rng);
            assert_eq!(fields.topic, "knee pain relief");
            assert_eq!(fields.emotional_trigger, "Urgency");
            assert!(ENGAGEMENT_FORMATS.contains(&fields.engagement_format.as_str()));
            assert!(TONES.contains(&fields.tone.as_str()));
        }
    }

    #[test]
    fn test_out_of_vocabulary_values_pass_through() {
        let builder = PromptBuilder::new("solar", "Limerick", "Whimsy", "Pirate");
        let fields = builder.resolve(&mut StdRng::seed_from_u64(3));
        assert_eq!(fields.engagement_format, "Limerick");
        assert_eq!(fields.emotional_trigger, "Whimsy");
        assert_eq!(fields.tone, "Pirate");
        assert!(!EMOTIONAL_TRIGGERS.contains(&"Whimsy"));
    }

    #[test]
    fn test_headline_prompt_embeds_every_field() {
        let fields = ResolvedFields {
            topic: "home insurance".to_string(),
            engagement_format: "How To".to_string(),
            emotional_trigger: "Security".to_string(),
            tone: "Calm".to_string(),
        };
        let prompt = headline_prompt(&fields);
        assert!(prompt.starts_with("Create an ad headline for home insurance with the tone Calm"));
        assert!(prompt.contains("1. Engagement Format: How To"));
        assert!(prompt.contains("2. Emotional Trigger: Security"));
        assert!(prompt.ends_with("3. Tone: Calm"));
    }

    #[test]
    fn test_emoji_and_description_prompts() {
        assert_eq!(
            emoji_prompt("Sleep Better Tonight"),
            "What is an appropriate emoji to go with this headline: Sleep Better Tonight?"
        );
        assert_eq!(
            description_prompt("knee pain relief"),
            "Describe the idea behind the topic knee pain relief in 30 words or less."
        );
    }

    #[test]
    fn test_with_emoji() {
        assert_eq!(with_emoji("🔥", "Hot Deals"), "🔥 Hot Deals");
        assert_eq!(with_emoji("  ", "Hot Deals"), "Hot Deals");
    }

    #[test]
    fn test_truncate_words() {
        let long = (1..=45).map(|n| format!("w{}", n)).collect::<Vec<_>>().join("  \n");
        let cut = truncate_words(&long, DESCRIPTION_MAX_WORDS);
        assert_eq!(cut.split_whitespace().count(), 30);
        assert!(cut.starts_with("w1 w2"));
        assert!(cut.ends_with("w30"));

        assert_eq!(truncate_words("  short   text ", 30), "short text");
        assert_eq!(truncate_words("", 30), "");
    }
}
