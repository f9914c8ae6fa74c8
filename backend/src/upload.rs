use actix_multipart::{Multipart, MultipartError};
use futures_util::{StreamExt, TryStreamExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Png,
    Jpeg,
}

impl ImageType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/png" => Some(ImageType::Png),
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Some(ImageType::Jpeg),
            _ => None,
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, extension) = name.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "png" => Some(ImageType::Png),
            "jpg" | "jpeg" => Some(ImageType::Jpeg),
            _ => None,
        }
    }

    /// The part's content type wins unless it is missing or generic, in
    /// which case the file extension decides.
    pub fn resolve(content_type: Option<&str>, file_name: Option<&str>) -> Result<Self, UploadError> {
        match content_type {
            Some(mime) if !is_generic(mime) => {
                Self::from_mime(mime).ok_or_else(|| UploadError::UnsupportedType(mime.to_string()))
            }
            _ => file_name.and_then(Self::from_file_name).ok_or_else(|| {
                UploadError::UnsupportedType(
                    file_name
                        .or(content_type)
                        .unwrap_or("unknown")
                        .to_string(),
                )
            }),
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ImageType::Png => "image/png",
            ImageType::Jpeg => "image/jpeg",
        }
    }
}

fn is_generic(mime: &str) -> bool {
    mime.eq_ignore_ascii_case("application/octet-stream")
}

/// Upload as received, alive only for the request that carried it.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub bytes: Vec<u8>,
    pub image_type: ImageType,
    pub file_name: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("No image was uploaded")]
    Missing,
    #[error("Unsupported file type: {0} (expected png, jpg or jpeg)")]
    UnsupportedType(String),
    #[error("Upload exceeds the limit of {limit} bytes")]
    TooLarge { limit: usize },
    #[error("Malformed multipart payload: {0}")]
    Multipart(String),
}

impl From<MultipartError> for UploadError {
    fn from(err: MultipartError) -> Self {
        UploadError::Multipart(err.to_string())
    }
}

/// Takes the first non-empty part of the form as the image.
pub async fn read_image(
    payload: &mut Multipart,
    max_bytes: usize,
) -> Result<UploadedImage, UploadError> {
    while let Some(mut field) = payload.try_next().await? {
        let content_type = field.content_type().map(|mime| mime.essence_str().to_string());
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let data = chunk?;
            if bytes.len() + data.len() > max_bytes {
                return Err(UploadError::TooLarge { limit: max_bytes });
            }
            bytes.extend_from_slice(&data);
        }

        if bytes.is_empty() {
            continue;
        }

        let image_type = ImageType::resolve(content_type.as_deref(), file_name.as_deref())?;
        return Ok(UploadedImage {
            bytes,
            image_type,
            file_name,
        });
    }

    Err(UploadError::Missing)
}
