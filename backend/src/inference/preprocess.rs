use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Luma};
use ndarray::{Array4, ArrayView4};

/// Square edge length the classifier was trained on.
pub const TARGET_SIZE: u32 = 150;
pub const CHANNELS: usize = 1;
pub const RESAMPLE_FILTER: FilterType = FilterType::CatmullRom;

// ITU-R 601-2 luma weights in 16.16 fixed point: 0.299, 0.587, 0.114.
const LUMA_R: u32 = 19595;
const LUMA_G: u32 = 38470;
const LUMA_B: u32 = 7471;

#[derive(Debug, thiserror::Error)]
pub enum PreprocessError {
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Tensor shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreprocessConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            width: TARGET_SIZE,
            height: TARGET_SIZE,
        }
    }
}

/// NHWC tensor with a batch of one, values in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessedTensor(Array4<f32>);

impl PreprocessedTensor {
    pub fn shape(&self) -> &[usize] {
        self.0.shape()
    }

    pub fn view(&self) -> ArrayView4<'_, f32> {
        self.0.view()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ImagePreprocessor {
    config: PreprocessConfig,
}

impl ImagePreprocessor {
    pub fn new(config: PreprocessConfig) -> Self {
        Self { config }
    }

    /// Decodes the upload and runs it through [`Self::preprocess_image`].
    pub fn preprocess(&self, bytes: &[u8]) -> Result<PreprocessedTensor, PreprocessError> {
        let image = image::load_from_memory(bytes)?;
        self.preprocess_image(&image)
    }

    /// Collapse to luminance, resize, add the batch axis, scale by 1/255.
    pub fn preprocess_image(
        &self,
        image: &DynamicImage,
    ) -> Result<PreprocessedTensor, PreprocessError> {
        let PreprocessConfig { width, height } = self.config;

        let gray = to_luma_601(image);
        let raw = imageops::resize(&gray, width, height, RESAMPLE_FILTER).into_raw();

        let pixels = Array4::from_shape_vec((1, height as usize, width as usize, CHANNELS), raw)?;
        Ok(PreprocessedTensor(pixels.mapv(|v| f32::from(v) / 255.0)))
    }
}

/// 8-bit luma plane with the ITU-R 601-2 transform, alpha discarded.
fn to_luma_601(image: &DynamicImage) -> GrayImage {
    let rgb = image.to_rgb8();
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        let luma = (u32::from(r) * LUMA_R + u32::from(g) * LUMA_G + u32::from(b) * LUMA_B
            + 0x8000)
            >> 16;
        Luma([luma as u8])
    })
}
