use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use shared::PredictionScore;

use super::model::{InferenceError, Scorer};
use super::preprocess::PreprocessedTensor;

pub fn solid_rgb(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

pub fn gradient_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) % 256) as u8,
        ])
    })
}

pub fn encode(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, format).unwrap();
    bytes.into_inner()
}

pub fn encode_png(image: &DynamicImage) -> Vec<u8> {
    encode(image, ImageFormat::Png)
}

/// Returns a fixed score and counts how often it was asked.
pub struct FixedScorer {
    score: f32,
    calls: AtomicUsize,
    expected_shape: Option<Vec<usize>>,
}

impl FixedScorer {
    pub fn new(score: f32) -> Self {
        Self {
            score,
            calls: AtomicUsize::new(0),
            expected_shape: None,
        }
    }

    /// Fails like a real model would when fed a tensor of another shape.
    pub fn expecting_shape(mut self, shape: &[usize]) -> Self {
        self.expected_shape = Some(shape.to_vec());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Scorer for FixedScorer {
    fn score(&self, tensor: &PreprocessedTensor) -> Result<PredictionScore, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(expected) = &self.expected_shape {
            if tensor.shape() != expected.as_slice() {
                return Err(InferenceError::Model(tch::TchError::Shape(format!(
                    "expected {:?}, got {:?}",
                    expected,
                    tensor.shape()
                ))));
            }
        }
        Ok(PredictionScore(self.score))
    }
}

/// Echoes the mean pixel intensity, so the score depends on the input.
pub struct MeanScorer;

impl Scorer for MeanScorer {
    fn score(&self, tensor: &PreprocessedTensor) -> Result<PredictionScore, InferenceError> {
        tensor
            .view()
            .mean()
            .map(PredictionScore)
            .ok_or(InferenceError::EmptyOutput)
    }
}
