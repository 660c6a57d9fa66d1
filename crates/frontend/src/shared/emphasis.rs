use contracts::shared::markup::{parse_emphasis, Segment};
use leptos::prelude::*;

/// Render a description string, turning `**bold**` runs into strong spans.
pub fn render_emphasis(text: &str) -> Vec<AnyView> {
    parse_emphasis(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(text) => view! { <span>{text}</span> }.into_any(),
            Segment::Strong(text) => {
                view! { <strong class="emphasis">{text}</strong> }.into_any()
            }
        })
        .collect()
}
