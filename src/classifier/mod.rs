mod classifier_error;
pub mod gemini;
pub mod image;

use crate::domain::{AiAnalysis, Priority};

pub use classifier_error::ClassifierError;
pub use gemini::{GeminiClassifier, GeminiConfig};

/// Outcome of a classification attempt.
///
/// Both arms carry a usable analysis; the gateway never hands back an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// Parsed from the model's structured output.
    Model(AiAnalysis),
    /// Fixed default used when the model could not be asked or understood.
    Fallback(AiAnalysis),
}

impl Classification {
    pub fn fallback() -> Self {
        Classification::Fallback(fallback_analysis())
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Classification::Fallback(_))
    }

    pub fn into_analysis(self) -> AiAnalysis {
        match self {
            Classification::Model(a) | Classification::Fallback(a) => a,
        }
    }
}

pub fn fallback_analysis() -> AiAnalysis {
    AiAnalysis {
        category: "General".to_string(),
        priority: Priority::Medium,
        summary: "Processing pending...".to_string(),
        suggested_action: "Manual review required".to_string(),
    }
}

/// Opaque remote classifier seam. Implementations must absorb their own failures.
pub trait Classifier: Send + Sync {
    fn classify(&self, description: &str, image_base64: Option<&str>) -> Classification;
}
