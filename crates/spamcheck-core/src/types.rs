//! Core types for spamcheck

use serde::{Deserialize, Serialize};

/// Hard classification label for a scored message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpamLabel {
    #[serde(rename = "SPAM")]
    Spam,

    #[serde(rename = "HAM")]
    Ham,
}

impl SpamLabel {
    /// Build a label from the classifier's hard prediction
    pub fn from_is_spam(is_spam: bool) -> Self {
        if is_spam {
            Self::Spam
        } else {
            Self::Ham
        }
    }

    /// Whether this label marks the message as spam
    pub fn is_spam(&self) -> bool {
        matches!(self, Self::Spam)
    }
}

impl std::fmt::Display for SpamLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spam => write!(f, "SPAM"),
            Self::Ham => write!(f, "HAM"),
        }
    }
}

/// Result of classifying a single message.
///
/// Serialized field names match the wire contract of the upstream API
/// layer (`prediction`, `model_used`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Classification label
    #[serde(rename = "prediction")]
    pub label: SpamLabel,

    /// Convenience flag, redundant with `label`
    pub is_spam: bool,

    /// Probability of the spam class
    pub spam_probability: f64,

    /// Probability of the ham class
    pub ham_probability: f64,

    /// Confidence of the prediction, the larger of the two probabilities
    pub confidence: f64,

    /// Tag identifying the classifier that produced this result
    #[serde(rename = "model_used")]
    pub model: String,
}

impl Prediction {
    /// Assemble a prediction from the classifier's hard label and
    /// probability pair.
    pub fn from_scores(
        is_spam: bool,
        ham_probability: f64,
        spam_probability: f64,
        model: impl Into<String>,
    ) -> Self {
        Self {
            label: SpamLabel::from_is_spam(is_spam),
            is_spam,
            spam_probability,
            ham_probability,
            confidence: spam_probability.max(ham_probability),
            model: model.into(),
        }
    }
}
