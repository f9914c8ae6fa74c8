use actix_files::Files;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use log::{error, info, warn};
use serde_json::json;
use shared::PredictionResponse;
use uuid::Uuid;

use crate::config::UploadConfig;
use crate::error::AppError;
use crate::inference::InferencePipeline;
use crate::upload::read_image;

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: String) {
    configure_api(cfg);
    cfg.service(Files::new("/", frontend_dir).index_file("index.html"));
}

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/predict").route(web::post().to(handle_predict)))
        .service(web::resource("/api/health").route(web::get().to(health)));
}

async fn handle_predict(
    pipeline: web::Data<InferencePipeline>,
    upload: web::Data<UploadConfig>,
    mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let request_id = Uuid::new_v4();

    let image = read_image(&mut payload, upload.max_bytes)
        .await
        .inspect_err(|e| warn!("Rejected upload for request {}: {}", request_id, e))?;
    info!(
        "Prediction request {}: {} ({}), {} bytes",
        request_id,
        image.file_name.as_deref().unwrap_or("unnamed"),
        image.image_type.mime(),
        image.bytes.len()
    );

    let prediction = pipeline
        .predict(&image)
        .inspect_err(|e| error!("Prediction request {} failed: {}", request_id, e))?;
    info!(
        "Prediction request {}: score={:.4} label={}",
        request_id,
        prediction.score.value(),
        prediction.label
    );

    Ok(HttpResponse::Ok().json(PredictionResponse {
        request_id: request_id.to_string(),
        score: prediction.score,
        label: prediction.label,
    }))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::testing::{encode, encode_png, gradient_rgb, solid_rgb, FixedScorer, MeanScorer};
    use crate::inference::Scorer;
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use image::{DynamicImage, ImageFormat};
    use shared::{ClassificationLabel, ErrorResponse};
    use std::sync::Arc;

    const BOUNDARY: &str = "----brain-mri-boundary";

    fn multipart_body(file_name: &str, content_type: &str, bytes: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"image\"; filename=\"{}\"\r\n",
                file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    fn predict_request(body: Vec<u8>) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/predict")
            .insert_header((
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            ))
            .set_payload(body)
    }

    macro_rules! app {
        ($scorer:expr, $max_bytes:expr) => {{
            let scorer: Arc<dyn Scorer> = $scorer;
            test::init_service(
                App::new()
                    .app_data(web::Data::new(InferencePipeline::new(scorer)))
                    .app_data(web::Data::new(UploadConfig {
                        max_bytes: $max_bytes,
                    }))
                    .configure(configure_api),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn health_check() {
        let app = app!(Arc::new(FixedScorer::new(0.5)), 1024);
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[actix_web::test]
    async fn black_png_is_scored_and_labelled() {
        let app = app!(Arc::new(MeanScorer), 1 << 20);
        let bytes = encode_png(&DynamicImage::ImageRgb8(solid_rgb(300, 300, [0, 0, 0])));

        let req = predict_request(multipart_body("black.png", "image/png", &bytes)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: PredictionResponse = test::read_body_json(resp).await;
        assert_eq!(body.score.value(), 0.0);
        assert_eq!(body.label, ClassificationLabel::Tumor);
        assert!(Uuid::parse_str(&body.request_id).is_ok());
    }

    #[actix_web::test]
    async fn jpeg_upload_above_threshold_is_healthy() {
        let app = app!(Arc::new(FixedScorer::new(0.93)), 1 << 20);
        let bytes = encode(
            &DynamicImage::ImageRgb8(gradient_rgb(120, 90)),
            ImageFormat::Jpeg,
        );

        let req = predict_request(multipart_body("scan.jpg", "image/jpeg", &bytes)).to_request();
        let body: PredictionResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.label, ClassificationLabel::Healthy);
    }

    #[actix_web::test]
    async fn corrupted_upload_reports_decode_error_without_scoring() {
        let scorer = Arc::new(FixedScorer::new(0.9));
        let app = app!(scorer.clone(), 1 << 20);

        let req = predict_request(multipart_body("broken.png", "image/png", b"not really a png"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.code, "DECODE_ERROR");
        assert_eq!(scorer.calls(), 0);
    }

    #[actix_web::test]
    async fn same_image_twice_gives_same_label() {
        let app = app!(Arc::new(MeanScorer), 1 << 20);
        let bytes = encode_png(&DynamicImage::ImageRgb8(gradient_rgb(256, 256)));

        let mut labels = Vec::new();
        for _ in 0..2 {
            let req = predict_request(multipart_body("scan.png", "image/png", &bytes)).to_request();
            let body: PredictionResponse = test::call_and_read_body_json(&app, req).await;
            labels.push((body.score, body.label));
        }
        assert_eq!(labels[0], labels[1]);
    }

    #[actix_web::test]
    async fn unsupported_type_is_rejected() {
        let scorer = Arc::new(FixedScorer::new(0.9));
        let app = app!(scorer.clone(), 1 << 20);
        let req = predict_request(multipart_body("scan.gif", "image/gif", b"GIF89a\x01\x00\x01\x00"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(scorer.calls(), 0);
    }

    #[actix_web::test]
    async fn oversized_upload_is_rejected() {
        let app = app!(Arc::new(FixedScorer::new(0.9)), 64);
        let bytes = encode_png(&DynamicImage::ImageRgb8(gradient_rgb(64, 64)));

        let req = predict_request(multipart_body("big.png", "image/png", &bytes)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[actix_web::test]
    async fn empty_form_is_a_bad_request() {
        let app = app!(Arc::new(FixedScorer::new(0.9)), 1024);
        let body = format!("--{}--\r\n", BOUNDARY).into_bytes();

        let resp = test::call_service(&app, predict_request(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
