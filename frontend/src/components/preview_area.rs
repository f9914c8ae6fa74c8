use super::super::{Model, Msg};
use super::utils::debounce;
use yew::prelude::*;

pub fn render_preview_area(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(file_data) = &model.file else {
        return html! {};
    };

    let link = ctx.link().clone();

    html! {
        <div id="preview-container">
            <figure class="preview-figure">
                <img id="actual-image-preview"
                    src={file_data.preview_url.to_string()}
                    alt={file_data.file.name()}
                    width="300" />
                <figcaption>{"Uploaded MRI Image"}</figcaption>
            </figure>
            <div class="button-container">
                <button
                    id="clear-btn"
                    class="analyze-btn"
                    style="background-color: var(--clear-color);"
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::ClearFile)
                    })}
                >
                    <i class="fa-solid fa-trash"></i>{" Clear"}
                </button>
                <button
                    id="predict-button"
                    class="predict-btn"
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::Predict)
                    })}
                    disabled={model.loading}
                >
                    { render_predict_button_content(model) }
                </button>
            </div>
        </div>
    }
}

fn render_predict_button_content(model: &Model) -> Html {
    if model.loading {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Predicting..."}</> }
    } else {
        html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Predict"}</> }
    }
}
