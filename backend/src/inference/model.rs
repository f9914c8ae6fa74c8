use std::path::Path;
use std::sync::Mutex;

use shared::PredictionScore;
use tch::{CModule, Device, Kind, Tensor};

use super::preprocess::PreprocessedTensor;

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("Failed to load model from {path}: {source}")]
    ModelLoad {
        path: String,
        #[source]
        source: tch::TchError,
    },
    #[error("Model execution failed: {0}")]
    Model(#[from] tch::TchError),
    #[error("Model returned an empty output")]
    EmptyOutput,
    #[error("Model lock poisoned")]
    Poisoned,
}

/// Turns a preprocessed tensor into a single scalar score.
///
/// Implementations do not check the tensor shape; a mismatch surfaces as an
/// error from the execution layer.
pub trait Scorer: Send + Sync {
    fn score(&self, tensor: &PreprocessedTensor) -> Result<PredictionScore, InferenceError>;
}

/// TorchScript classifier loaded once at startup.
pub struct TorchScorer {
    model: Mutex<CModule>,
    device: Device,
}

impl TorchScorer {
    pub fn load(model_path: &Path) -> Result<Self, InferenceError> {
        let device = Device::cuda_if_available();
        log::info!(
            "Loading model from {} on {:?}",
            model_path.display(),
            device
        );

        let mut model =
            CModule::load_on_device(model_path, device).map_err(|source| {
                InferenceError::ModelLoad {
                    path: model_path.display().to_string(),
                    source,
                }
            })?;
        model.set_eval();

        Ok(Self {
            model: Mutex::new(model),
            device,
        })
    }

    fn to_input(&self, tensor: &PreprocessedTensor) -> Result<Tensor, InferenceError> {
        let dims: Vec<i64> = tensor.shape().iter().map(|&d| d as i64).collect();
        let values: Vec<f32> = tensor.view().iter().copied().collect();
        let input = Tensor::f_from_slice(&values)?
            .f_reshape(dims.as_slice())?
            .f_to_device(self.device)?;
        Ok(input)
    }
}

impl Scorer for TorchScorer {
    fn score(&self, tensor: &PreprocessedTensor) -> Result<PredictionScore, InferenceError> {
        let input = self.to_input(tensor)?;

        let output = tch::no_grad(|| {
            let model = self.model.lock().map_err(|_| InferenceError::Poisoned)?;
            model.forward_ts(&[input]).map_err(InferenceError::from)
        })?;

        let output = output
            .f_to_kind(Kind::Float)?
            .f_to_device(Device::Cpu)?
            .f_reshape([-1])?;
        let values = Vec::<f32>::try_from(&output)?;

        values
            .first()
            .copied()
            .map(PredictionScore)
            .ok_or(InferenceError::EmptyOutput)
    }
}
