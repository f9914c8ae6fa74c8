pub mod model;
pub mod pipeline;
pub mod preprocess;

#[cfg(test)]
pub(crate) mod testing;

pub use model::{InferenceError, Scorer, TorchScorer};
pub use pipeline::{InferencePipeline, PipelineError};
