use yew::prelude::*;

/// Renders the page title and usage hint
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1 class="title"><i class="fa-solid fa-brain"></i> {" Brain Tumor Detection"}</h1>
            <p class="subtitle">
                {"Upload an MRI image and click on the "}
                <strong>{"Predict"}</strong>
                {" button to determine if it contains a tumor or not."}
            </p>
        </header>
    }
}
