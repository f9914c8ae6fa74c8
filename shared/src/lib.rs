use serde::{Deserialize, Serialize};

/// Scores strictly above this value are classified as healthy.
pub const DEFAULT_THRESHOLD: f32 = 0.5;

#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
)]
pub enum ClassificationLabel {
    Tumor,
    Healthy,
}

impl ClassificationLabel {
    /// Color used to render the verdict.
    pub fn color(&self) -> &'static str {
        match self {
            ClassificationLabel::Tumor => "red",
            ClassificationLabel::Healthy => "green",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ClassificationLabel::Tumor => "The model predicts that the MRI image contains a tumor.",
            ClassificationLabel::Healthy => {
                "The model predicts that the MRI image does not contain a tumor."
            }
        }
    }
}

/// Raw scalar output of the classifier, nominally in [0, 1].
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, PartialOrd, derive_more::Display,
)]
#[serde(transparent)]
pub struct PredictionScore(pub f32);

impl PredictionScore {
    pub fn value(self) -> f32 {
        self.0
    }
}

/// Maps a score onto a label with a fixed threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecisionPolicy {
    threshold: f32,
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl DecisionPolicy {
    pub fn with_threshold(threshold: f32) -> Self {
        Self { threshold }
    }

    /// Healthy only when the score is strictly greater than the threshold.
    /// NaN falls through to Tumor.
    pub fn decide(&self, score: PredictionScore) -> ClassificationLabel {
        if score.0 > self.threshold {
            ClassificationLabel::Healthy
        } else {
            ClassificationLabel::Tumor
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PredictionResponse {
    pub request_id: String,
    pub score: PredictionScore,
    pub label: ClassificationLabel,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
