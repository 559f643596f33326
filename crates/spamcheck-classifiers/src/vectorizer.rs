//! TF-IDF vectorization over normalized text

use serde::{Deserialize, Serialize};
use spamcheck_core::{Error, Result};
use std::collections::HashMap;

/// Fitted transformer mapping normalized text into a fixed-dimension
/// feature vector.
pub trait Vectorizer: Send + Sync {
    /// Transform normalized text into the classifier's feature space.
    fn transform(&self, text: &str) -> Result<Vec<f64>>;

    /// Dimension of the produced feature vectors.
    fn dimension(&self) -> usize;
}

/// TF-IDF vectorizer restored from a fitted artifact.
///
/// The artifact carries the fitted vocabulary and per-term inverse document
/// frequencies. Transform counts term occurrences, multiplies by idf, and
/// L2-normalizes the result; a zero vector stays zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Build a vectorizer from a fitted vocabulary and idf weights.
    pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f64>) -> Result<Self> {
        let vectorizer = Self { vocabulary, idf };
        vectorizer.validate()?;
        Ok(vectorizer)
    }

    /// Deserialize a fitted vectorizer from its JSON artifact.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let vectorizer: Self = serde_json::from_slice(bytes)
            .map_err(|e| Error::load(format!("invalid vectorizer artifact: {}", e)))?;
        vectorizer.validate()?;
        Ok(vectorizer)
    }

    /// Number of terms in the fitted vocabulary.
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    fn validate(&self) -> Result<()> {
        if self.idf.len() != self.vocabulary.len() {
            return Err(Error::load(format!(
                "vectorizer artifact inconsistent: {} vocabulary terms but {} idf weights",
                self.vocabulary.len(),
                self.idf.len()
            )));
        }
        for (term, &index) in &self.vocabulary {
            if index >= self.idf.len() {
                return Err(Error::load(format!(
                    "vectorizer artifact inconsistent: term '{}' maps to out-of-range index {}",
                    term, index
                )));
            }
        }
        Ok(())
    }
}

impl Vectorizer for TfidfVectorizer {
    fn transform(&self, text: &str) -> Result<Vec<f64>> {
        let mut features = vec![0.0; self.idf.len()];

        // Tokens outside the fitted vocabulary carry no signal and are
        // ignored, as in the training pipeline.
        for token in text.split_whitespace() {
            if let Some(&index) = self.vocabulary.get(token) {
                features[index] += 1.0;
            }
        }

        for (index, value) in features.iter_mut().enumerate() {
            *value *= self.idf[index];
        }

        let norm = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut features {
                *value /= norm;
            }
        }

        Ok(features)
    }

    fn dimension(&self) -> usize {
        self.idf.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> TfidfVectorizer {
        let vocabulary = HashMap::from([("free".to_string(), 0), ("cash".to_string(), 1)]);
        TfidfVectorizer::new(vocabulary, vec![1.0, 2.0]).unwrap()
    }

    #[test]
    fn test_transform_counts_idf_and_l2() {
        let features = fixture().transform("free free cash").unwrap();

        // counts [2, 1] * idf [1, 2] = [2, 2], L2 norm = sqrt(8)
        let expected = 2.0 / 8.0f64.sqrt();
        assert!((features[0] - expected).abs() < 1e-12);
        assert!((features[1] - expected).abs() < 1e-12);

        let norm: f64 = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_tokens_ignored() {
        let features = fixture().transform("free lobster").unwrap();
        assert!(features[0] > 0.0);
        assert_eq!(features[1], 0.0);
    }

    #[test]
    fn test_empty_text_is_zero_vector() {
        let features = fixture().transform("").unwrap();
        assert_eq!(features, vec![0.0, 0.0]);
    }

    #[test]
    fn test_artifact_round_trip() {
        let bytes = serde_json::to_vec(&fixture()).unwrap();
        let restored = TfidfVectorizer::from_bytes(&bytes).unwrap();
        assert_eq!(restored.dimension(), 2);
    }

    #[test]
    fn test_idf_length_mismatch_rejected() {
        let vocabulary = HashMap::from([("free".to_string(), 0)]);
        let err = TfidfVectorizer::new(vocabulary, vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::Load(_)));
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let vocabulary = HashMap::from([("free".to_string(), 5)]);
        let err = TfidfVectorizer::new(vocabulary, vec![1.0]).unwrap_err();
        assert!(matches!(err, Error::Load(_)));
    }

    #[test]
    fn test_garbage_bytes_are_load_error() {
        let err = TfidfVectorizer::from_bytes(b"not json").unwrap_err();
        assert!(matches!(err, Error::Load(_)));
    }
}
