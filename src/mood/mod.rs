//! Mood vocabulary and canonicalization.
//!
//! Mood strings arrive from several places (the image classifier, the text
//! classifier, a user typing on the command line) and use different words
//! for the same feeling. Everything is folded into one small vocabulary:
//!
//! ```text
//! joy | sadness | anger | fear | surprise | neutral | disgust
//! ```
//!
//! Unknown words are kept (lower-cased, trimmed) so callers can still pass
//! them on; they simply match no mood-specific heuristic downstream.

pub mod classifier;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A canonical mood token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Mood {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    #[default]
    Neutral,
    Disgust,
    /// Pass-through token with no entry in the synonym table.
    Other(String),
}

impl Mood {
    /// Canonicalize a free-form mood string.
    ///
    /// Empty or whitespace-only input yields [`Mood::Neutral`].
    pub fn canonicalize(raw: &str) -> Self {
        let token = raw.trim().to_lowercase();

        match token.as_str() {
            "" => Mood::Neutral,
            "happy" | "joy" | "joyful" | "happiness" | "excited" | "energetic" => Mood::Joy,
            "sad" | "sadness" | "depressed" => Mood::Sadness,
            "angry" | "anger" | "mad" => Mood::Anger,
            "fear" | "scared" | "afraid" => Mood::Fear,
            "surprise" | "surprised" | "shocked" => Mood::Surprise,
            "neutral" | "calm" => Mood::Neutral,
            "disgust" | "disgusted" => Mood::Disgust,
            _ => Mood::Other(token),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Mood::Joy => "joy",
            Mood::Sadness => "sadness",
            Mood::Anger => "anger",
            Mood::Fear => "fear",
            Mood::Surprise => "surprise",
            Mood::Neutral => "neutral",
            Mood::Disgust => "disgust",
            Mood::Other(token) => token,
        }
    }

    /// Whether the token came from the synonym table.
    pub fn is_known(&self) -> bool {
        !matches!(self, Mood::Other(_))
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Mood {
    fn from(raw: &str) -> Self {
        Mood::canonicalize(raw)
    }
}

impl From<String> for Mood {
    fn from(raw: String) -> Self {
        Mood::canonicalize(&raw)
    }
}

impl From<Mood> for String {
    fn from(mood: Mood) -> Self {
        mood.as_str().to_string()
    }
}

/// String-in, string-out form of [`Mood::canonicalize`].
pub fn canonicalize_mood(raw: &str) -> String {
    Mood::canonicalize(raw).as_str().to_string()
}
