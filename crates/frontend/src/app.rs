use crate::domain::projects::ui::ProjectDetail;
use crate::domain::resume::ui::ResumePage;
use crate::domain::resume::view_model::ResumeViewModel;
use crate::layout::global_context::{AppGlobalContext, ViewMode};
use crate::pages::home::HomePage;
use crate::shared::scroll;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the view state store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    // The résumé view model is app-lived so an abandoned probe can never
    // write into a later activation.
    provide_context(ResumeViewModel::new());

    // Background scrolling is suppressed while an overlay covers the home
    // surface, and restored on return.
    Effect::new(move |_| {
        let overlay_open = ctx.view.with(|view| !matches!(view, ViewMode::Home));
        scroll::set_body_scroll_locked(overlay_open);
    });

    view! {
        <HomePage />
        {move || match ctx.view.get() {
            ViewMode::Home => view! { <></> }.into_any(),
            ViewMode::Resume => view! { <ResumePage /> }.into_any(),
            ViewMode::Project(project) => {
                view! { <ProjectDetail project=project /> }.into_any()
            }
        }}
    }
}
