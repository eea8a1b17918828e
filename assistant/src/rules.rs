//! Keyword rules that choose the assistant's canned reply and follow-up chips.
//!
//! DESIGN
//! ======
//! Two independent, ordered rule tables. The reply table is checked first to
//! last and the first rule with any keyword contained in the lowercased prompt
//! wins. The suggestion table is narrower (one keyword per topic), so a prompt
//! like "adventure trip ideas" gets the mountain reply with the general chips.
//! Matching is plain substring search: "season" contains "sea".

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

/// Error returned by [`normalize_prompt`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    #[error("prompt is empty")]
    Empty,
}

/// Subject a prompt was classified under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Beach,
    Mountain,
    City,
    Budget,
    Timing,
    General,
}

impl Topic {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beach => "beach",
            Self::Mountain => "mountain",
            Self::City => "city",
            Self::Budget => "budget",
            Self::Timing => "timing",
            Self::General => "general",
        }
    }

    /// Canned reply text for this topic.
    #[must_use]
    pub fn reply(self) -> &'static str {
        match self {
            Self::Beach => {
                "Great choice! Beach destinations are perfect for relaxation. I'd recommend the Maldives, Bali, or the Greek Islands. When are you planning to travel, and how many days do you have?"
            }
            Self::Mountain => {
                "Adventure awaits! The Swiss Alps, Patagonia, and the Himalayas offer breathtaking mountain experiences. What's your experience level with hiking, and what time of year works best for you?"
            }
            Self::City => {
                "City exploration is exciting! Paris, Tokyo, New York, and Barcelona are amazing urban destinations. Are you interested in history, food, nightlife, or all of the above?"
            }
            Self::Budget => {
                "I can help you find budget-friendly options! Southeast Asia, Eastern Europe, and Central America offer great value. What's your approximate budget per day?"
            }
            Self::Timing => {
                "Timing is important! Let me know your preferred travel dates or the season you're thinking about. I can check weather patterns, peak seasons, and the best deals for that time."
            }
            Self::General => {
                "That sounds interesting! To help you better, could you tell me more about your travel preferences? Are you looking for relaxation, adventure, culture, or a mix of everything?"
            }
        }
    }

    /// Follow-up chips for this topic. Topics without their own set share the general chips.
    #[must_use]
    pub fn suggestions(self) -> &'static [&'static str] {
        match self {
            Self::Beach => &["Show me hotels", "What activities are available?", "Best time to visit", "Flight options"],
            Self::Mountain => &["Hiking trails", "Equipment needed", "Weather conditions", "Guided tours"],
            Self::City => &["Top attractions", "Local cuisine", "Public transport", "Nightlife spots"],
            Self::Budget | Self::Timing | Self::General => {
                &["Tell me more", "Show destinations", "Check availability", "Get price estimate"]
            }
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

struct Rule {
    topic: Topic,
    keywords: &'static [&'static str],
}

const REPLY_RULES: &[Rule] = &[
    Rule { topic: Topic::Beach, keywords: &["beach", "ocean", "sea"] },
    Rule { topic: Topic::Mountain, keywords: &["mountain", "hiking", "adventure"] },
    Rule { topic: Topic::City, keywords: &["city", "urban"] },
    Rule { topic: Topic::Budget, keywords: &["budget", "cheap", "affordable"] },
    Rule { topic: Topic::Timing, keywords: &["when", "date", "time"] },
];

const SUGGESTION_RULES: &[Rule] = &[
    Rule { topic: Topic::Beach, keywords: &["beach"] },
    Rule { topic: Topic::Mountain, keywords: &["mountain"] },
    Rule { topic: Topic::City, keywords: &["city"] },
];

fn classify(rules: &[Rule], text: &str) -> Topic {
    let lower = text.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lower.contains(kw)))
        .map_or(Topic::General, |rule| rule.topic)
}

/// Trim a prompt, rejecting input that is empty after trimming.
///
/// # Errors
///
/// Returns [`PromptError::Empty`] for empty or whitespace-only input.
pub fn normalize_prompt(text: &str) -> Result<&str, PromptError> {
    let trimmed = text.trim();
    if trimmed.is_empty() { Err(PromptError::Empty) } else { Ok(trimmed) }
}

/// Topic that selects the reply text.
#[must_use]
pub fn reply_topic(text: &str) -> Topic {
    classify(REPLY_RULES, text)
}

/// Topic that selects the follow-up chips.
#[must_use]
pub fn suggestion_topic(text: &str) -> Topic {
    classify(SUGGESTION_RULES, text)
}

#[must_use]
pub fn reply_for(text: &str) -> &'static str {
    reply_topic(text).reply()
}

#[must_use]
pub fn suggestions_for(text: &str) -> &'static [&'static str] {
    suggestion_topic(text).suggestions()
}

/// Canned assistant answer to one prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub topic: Topic,
    pub text: &'static str,
    pub suggestions: &'static [&'static str],
}

#[must_use]
pub fn respond(text: &str) -> Reply {
    let topic = reply_topic(text);
    Reply { topic, text: topic.reply(), suggestions: suggestions_for(text) }
}
