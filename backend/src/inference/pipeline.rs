use std::sync::Arc;

use shared::{ClassificationLabel, DecisionPolicy, PredictionScore};

use super::model::{InferenceError, Scorer};
use super::preprocess::{ImagePreprocessor, PreprocessError};
use crate::upload::UploadedImage;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Preprocess(#[from] PreprocessError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub score: PredictionScore,
    pub label: ClassificationLabel,
}

/// Preprocess, score, decide. Holds no per-request state.
#[derive(Clone)]
pub struct InferencePipeline {
    preprocessor: ImagePreprocessor,
    scorer: Arc<dyn Scorer>,
    policy: DecisionPolicy,
}

impl InferencePipeline {
    pub fn new(scorer: Arc<dyn Scorer>) -> Self {
        Self::with_parts(ImagePreprocessor::default(), scorer, DecisionPolicy::default())
    }

    pub fn with_parts(
        preprocessor: ImagePreprocessor,
        scorer: Arc<dyn Scorer>,
        policy: DecisionPolicy,
    ) -> Self {
        Self {
            preprocessor,
            scorer,
            policy,
        }
    }

    pub fn predict(&self, image: &UploadedImage) -> Result<Prediction, PipelineError> {
        let tensor = self.preprocessor.preprocess(&image.bytes)?;
        log::debug!("Preprocessed upload into tensor {:?}", tensor.shape());

        let score = self.scorer.score(&tensor)?;
        let label = self.policy.decide(score);
        Ok(Prediction { score, label })
    }
}
