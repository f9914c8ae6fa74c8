use super::super::Model;
use super::super::Msg;
use super::utils::{debounce, first_accepted_image, ACCEPTED_TYPES};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let selected = match input.files() {
            Some(files) => first_accepted_image(&files),
            None => Err("No image selected.".to_string()),
        };

        input.set_value("");

        match selected {
            Ok(file) => Msg::FileSelected(file),
            Err(e) => Msg::SetError(Some(e)),
        }
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = Callback::from(|_| {
        let input = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("file-input"));
        if let Some(input) = input {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <div class="upload-section">
            <input
                type="file"
                id="file-input"
                accept={ACCEPTED_TYPES}
                style="display: none;"
                onchange={handle_change}
            />

            <button
                id="upload-button"
                class="file-upload-btn"
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <i class="fa-solid fa-upload"></i> {" Choose an MRI Image"}
            </button>

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p>{"Drag & drop an MRI image here, or click"}</p>
                    <p class="file-types">{"Supported formats: PNG, JPG, JPEG"}</p>
                </div>
            </div>
        </div>
    }
}
