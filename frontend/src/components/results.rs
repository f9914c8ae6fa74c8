use super::super::Model;
use super::content::{
    Entry, BRAIN_FOODS, HEALTHY_HEADING, HEALTHY_INTRO, TREATMENT_HEADING, TREATMENT_RESOURCES,
    TUMOR_TYPES, TUMOR_TYPES_HEADING, TUMOR_TYPES_INTRO,
};
use shared::ClassificationLabel;
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    let Some(result) = &model.result else {
        return html! {};
    };
    let label = result.label;

    html! {
        <div class={classes!("results-container", match label {
            ClassificationLabel::Tumor => "tumor-detected",
            ClassificationLabel::Healthy => "healthy",
        })}>
            <p class="prediction-text">
                {"Prediction: "}
                <span style={format!("color:{};", label.color())}>{ label.to_string() }</span>
            </p>
            <p class="description">{ format!("Description: {}", label.description()) }</p>
            {
                match label {
                    ClassificationLabel::Tumor => render_tumor_info(),
                    ClassificationLabel::Healthy => render_healthy_tips(),
                }
            }
        </div>
    }
}

fn render_entries(entries: &[Entry]) -> Html {
    html! {
        <ul class="info-list">
            { for entries.iter().map(|entry| html! {
                <li><strong>{ format!("{}:", entry.name) }</strong>{ format!(" {}", entry.detail) }</li>
            })}
        </ul>
    }
}

fn render_tumor_info() -> Html {
    html! {
        <>
            <section class="info-section">
                <h2>{ TUMOR_TYPES_HEADING }</h2>
                <p>{ TUMOR_TYPES_INTRO }</p>
                { render_entries(TUMOR_TYPES) }
            </section>
            <section class="info-section">
                <h2>{ TREATMENT_HEADING }</h2>
                <ul class="resource-list">
                    { for TREATMENT_RESOURCES.iter().map(|link| html! {
                        <li class="resource-link">
                            <a href={link.url} target="_blank" rel="noopener noreferrer">{ link.title }</a>
                        </li>
                    })}
                </ul>
            </section>
        </>
    }
}

fn render_healthy_tips() -> Html {
    html! {
        <section class="info-section">
            <h2>{ HEALTHY_HEADING }</h2>
            <p>{ HEALTHY_INTRO }</p>
            { render_entries(BRAIN_FOODS) }
        </section>
    }
}
