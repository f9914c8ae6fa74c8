use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use shared::ErrorResponse;

use crate::inference::PipelineError;
use crate::inference::preprocess::PreprocessError;
use crate::upload::UploadError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Upload(UploadError::Missing) => "MISSING_UPLOAD",
            AppError::Upload(UploadError::UnsupportedType(_)) => "UNSUPPORTED_TYPE",
            AppError::Upload(UploadError::TooLarge { .. }) => "FILE_TOO_LARGE",
            AppError::Upload(UploadError::Multipart(_)) => "INVALID_MULTIPART",
            AppError::Pipeline(PipelineError::Preprocess(PreprocessError::Decode(_))) => {
                "DECODE_ERROR"
            }
            AppError::Pipeline(PipelineError::Preprocess(_)) => "PREPROCESS_ERROR",
            AppError::Pipeline(PipelineError::Inference(_)) => "INFERENCE_ERROR",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Upload(UploadError::Missing) | AppError::Upload(UploadError::Multipart(_)) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Upload(UploadError::UnsupportedType(_)) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Upload(UploadError::TooLarge { .. }) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Pipeline(PipelineError::Preprocess(PreprocessError::Decode(_))) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Pipeline(PipelineError::Preprocess(_))
            | AppError::Pipeline(PipelineError::Inference(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.error_code().to_string(),
        })
    }
}
