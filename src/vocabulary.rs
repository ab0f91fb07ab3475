//! Fixed categorical vocabularies used when a form field asks for `random`

use rand::seq::IndexedRandom;
use rand::Rng;

/// Rhetorical structures an ad headline can follow
pub const ENGAGEMENT_FORMATS: &[&str] = &[
    "Call to Action",
    "Clickbait",
    "Innovation Driving Cost Benefit",
    "Missed Opportunity Awareness",
    "Offer Announcement + Call to Action",
    "Offer Announcement + Inclusivity",
    "Price Discovery",
    "Prices May Surprise You",
    "Problem Statement + Solution",
    "Provocative Questioning",
    "Question",
    "Question + Call to Action",
    "Question + Problem Statement + Solution",
    "Question + Solution",
    "Search Call to Action",
    "Statement",
    "Statement + Call to Action",
    "Statement + Expectation Challenge",
    "Statement Regarding Health Symptoms",
    "Statistics Based",
    "Topic Introduction",
    "Offer Announcement + Exclusivity",
    "Fear of Missing Out",
    "Tactics to Try Tonight",
    "Question + Urgency",
    "Question + Offer",
    "How To",
    "How To + Treatments",
    "Seniors Have Been Experiencing",
    "List of Symptoms",
    "Deals",
];

/// Emotional appeals a headline can invoke
pub const EMOTIONAL_TRIGGERS: &[&str] = &[
    "Adventure",
    "Affinity",
    "Affordability",
    "Ambition",
    "Anger",
    "Anticipation",
    "Convenience",
    "Cost Sensitivity",
    "Curiosity",
    "Danger",
    "Discovery",
    "Easy Accessibility",
    "Empowerment",
    "Envy",
    "Fear of Ignoring Health Symptoms",
    "Fear of Missing Information",
    "Fear of Missing Out",
    "Fear of Old Age",
    "Fear of Potential Health Issue",
    "Financial Gain",
    "Greed",
    "Hope",
    "Hop and Affordability",
    "Improve Compensation Level",
    "Improve Financial Situation",
    "Improve Quality of Life",
    "Localization",
    "Love",
    "Nostalgia",
    "Not Too Late",
    "Opportunity",
    "Optimism",
    "Relief",
    "Savings",
    "Scarcity",
    "Security",
    "Surprise",
    "Timeliness",
    "Transparency",
    "Trust",
    "Urgency",
    "Validation",
    "Vanity",
];

/// Stylistic voices
pub const TONES: &[&str] = &[
    "Happy",
    "Excited",
    "Sad",
    "Anxious",
    "Calm",
    "Passionate",
    "Serious",
    "Humorous",
    "Ironic",
    "Inspiring",
    "Empathetic",
    "Formal",
    "Casual",
    "Optimistic",
    "Pessimistic",
    "Fearful",
    "Nostalgic",
    "Affectionate",
    "Sympathetic",
    "Curious",
    "Energetic",
    "Indifferent",
    "Confident",
    "Surprised",
    "Angry",
    "Suspenseful",
    "Mysterious",
    "Hopeful",
    "Gloomy",
    "Skeptical",
];

/// One of the three categorical form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary {
    EngagementFormat,
    EmotionalTrigger,
    Tone,
}

impl Vocabulary {
    pub const ALL: [Vocabulary; 3] = [
        Vocabulary::EngagementFormat,
        Vocabulary::EmotionalTrigger,
        Vocabulary::Tone,
    ];

    pub fn entries(self) -> &'static [&'static str] {
        match self {
            Vocabulary::EngagementFormat => ENGAGEMENT_FORMATS,
            Vocabulary::EmotionalTrigger => EMOTIONAL_TRIGGERS,
            Vocabulary::Tone => TONES,
        }
    }

    /// Form field name carrying this vocabulary
    pub fn field_name(self) -> &'static str {
        match self {
            Vocabulary::EngagementFormat => "engagement_format",
            Vocabulary::EmotionalTrigger => "emotional_trigger",
            Vocabulary::Tone => "tone",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Vocabulary::EngagementFormat => "Engagement Format",
            Vocabulary::EmotionalTrigger => "Emotional Trigger",
            Vocabulary::Tone => "Tone",
        }
    }

    /// Uniform draw from the vocabulary
    pub fn pick<R: Rng + ?Sized>(self, rng: &mut R) -> &'static str {
        // Every list is a non-empty constant
        self.entries().choose(rng).copied().unwrap_or_default()
    }
}
