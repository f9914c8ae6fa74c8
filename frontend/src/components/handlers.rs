use super::super::Msg;
use super::super::{FileData, Model};
use super::utils::first_accepted_image;
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_net::http::Request;
use shared::{ErrorResponse, PredictionResponse};
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

pub fn handle_file_selected(model: &mut Model, file: GlooFile) -> bool {
    log::info!("Selected {} ({} bytes)", file.name(), file.size());
    let preview_url = ObjectUrl::from(file.clone());

    // A new upload invalidates the previous verdict and any request in flight.
    model.file = Some(FileData { file, preview_url });
    model.result = None;
    model.error = None;
    model.loading = false;
    model.generation.advance();
    true
}

pub fn handle_clear_file(model: &mut Model) -> bool {
    model.file = None;
    model.result = None;
    model.error = None;
    model.loading = false;
    model.generation.advance();
    true
}

pub fn handle_predict(model: &mut Model, ctx: &Context<Model>) -> bool {
    if let Some(file_data) = &model.file {
        model.loading = true;
        model.error = None;
        send_prediction_request(ctx, file_data.file.clone(), model.generation.current());
        return true;
    }

    ctx.link()
        .send_message(Msg::SetError(Some("Choose an MRI image first.".into())));
    false
}

pub fn handle_prediction_result(
    model: &mut Model,
    generation: u64,
    response: PredictionResponse,
) -> bool {
    if !model.generation.is_current(generation) {
        log::debug!("Dropping stale prediction {}", response.request_id);
        return false;
    }
    log::info!(
        "Prediction {}: {} (score {})",
        response.request_id,
        response.label,
        response.score
    );
    model.result = Some(response);
    model.loading = false;
    true
}

pub fn handle_prediction_failed(model: &mut Model, generation: u64, error: String) -> bool {
    if !model.generation.is_current(generation) {
        log::debug!("Dropping stale prediction error: {}", error);
        return false;
    }
    model.error = Some(error);
    model.loading = false;
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file_list) = event.data_transfer().and_then(|dt| dt.files()) {
        match first_accepted_image(&file_list) {
            Ok(file) => ctx.link().send_message(Msg::FileSelected(file)),
            Err(e) => ctx.link().send_message(Msg::SetError(Some(e))),
        }
    }

    true
}

pub fn send_prediction_request(ctx: &Context<Model>, file: GlooFile, generation: u64) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let form_data = match web_sys::FormData::new() {
                Ok(form_data) => form_data,
                Err(e) => {
                    log::error!("Failed to create form data: {:?}", e);
                    link.send_message(Msg::PredictionFailed(generation, "Could not prepare the upload.".into()));
                    return;
                }
            };
            if let Err(e) = form_data.append_with_blob_and_filename("image", file.as_ref(), &file.name()) {
                log::error!("Failed to attach image: {:?}", e);
                link.send_message(Msg::PredictionFailed(generation, "Could not prepare the upload.".into()));
                return;
            }

            let request = match Request::post("/api/predict").body(form_data) {
                Ok(request) => request,
                Err(e) => {
                    link.send_message(Msg::PredictionFailed(generation, format!("Failed to build request: {}", e)));
                    return;
                }
            };

            match request.send().await {
                Ok(response) => {
                    if response.ok() {
                        match response.json::<PredictionResponse>().await {
                            Ok(result) => link.send_message(Msg::PredictionResult(generation, result)),
                            Err(e) => link.send_message(Msg::PredictionFailed(
                                generation,
                                format!("Failed to parse response: {}", e),
                            )),
                        }
                    } else {
                        let status = response.status();
                        let message = match response.json::<ErrorResponse>().await {
                            Ok(body) => body.error,
                            Err(_) => response.status_text(),
                        };
                        link.send_message(Msg::PredictionFailed(
                            generation,
                            format!("Prediction failed ({}): {}", status, message),
                        ))
                    }
                }
                Err(e) => link.send_message(Msg::PredictionFailed(generation, format!("Network error: {}", e))),
            }
        }
    });
}
