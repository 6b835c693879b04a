//! Adapters from classifier outputs to a [`Mood`].
//!
//! The classifiers themselves (a CNN over 48x48 grayscale faces and a
//! transformer text pipeline) run elsewhere; these helpers only interpret
//! what they return.

use super::Mood;
use serde::{Deserialize, Serialize};

/// Output order of the facial emotion network.
pub const IMAGE_CLASS_LABELS: [&str; 7] = [
    "angry", "disgust", "fear", "happy", "sad", "surprise", "neutral",
];

/// One label/score pair from a text classification pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

impl LabelScore {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Canonical mood of the highest-scoring label.
///
/// Ties keep the earliest label. NaN scores are ignored.
pub fn mood_from_scores(scores: &[LabelScore]) -> Mood {
    let mut best: Option<&LabelScore> = None;

    for candidate in scores.iter().filter(|s| !s.score.is_nan()) {
        match best {
            Some(current) if candidate.score <= current.score => {}
            _ => best = Some(candidate),
        }
    }

    best.map(|s| Mood::canonicalize(&s.label))
        .unwrap_or(Mood::Neutral)
}

/// Mood for a piece of free text, given the classifier's scores for it.
pub fn mood_from_text_scores(text: &str, scores: &[LabelScore]) -> Mood {
    if text.trim().is_empty() {
        return Mood::Neutral;
    }
    mood_from_scores(scores)
}

/// Mood for the facial classifier's argmax index.
pub fn mood_from_image_class(index: usize) -> Option<Mood> {
    IMAGE_CLASS_LABELS
        .get(index)
        .map(|label| Mood::canonicalize(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highest_score_wins() {
        let scores = vec![
            LabelScore::new("sadness", 0.1),
            LabelScore::new("joy", 0.7),
            LabelScore::new("anger", 0.2),
        ];
        assert_eq!(mood_from_scores(&scores), Mood::Joy);
    }

    #[test]
    fn test_tie_keeps_first() {
        let scores = vec![LabelScore::new("fear", 0.5), LabelScore::new("anger", 0.5)];
        assert_eq!(mood_from_scores(&scores), Mood::Fear);
    }

    #[test]
    fn test_nan_is_ignored() {
        let scores = vec![LabelScore::new("anger", f64::NAN), LabelScore::new("sad", 0.01)];
        assert_eq!(mood_from_scores(&scores), Mood::Sadness);
    }

    #[test]
    fn test_empty_scores_are_neutral() {
        assert_eq!(mood_from_scores(&[]), Mood::Neutral);
    }

    #[test]
    fn test_blank_text_skips_scores() {
        let scores = vec![LabelScore::new("anger", 0.99)];
        assert_eq!(mood_from_text_scores("   ", &scores), Mood::Neutral);
        assert_eq!(mood_from_text_scores("so annoyed", &scores), Mood::Anger);
    }

    #[test]
    fn test_image_classes() {
        assert_eq!(mood_from_image_class(0), Some(Mood::Anger));
        assert_eq!(mood_from_image_class(3), Some(Mood::Joy));
        assert_eq!(mood_from_image_class(6), Some(Mood::Neutral));
        assert_eq!(mood_from_image_class(7), None);
    }
}
