use crate::layout::global_context::AppGlobalContext;
use crate::layout::navbar::NavBar;
use crate::shared::scroll;
use contracts::domain::ProjectRecord;
use leptos::prelude::*;

fn bullet_list(items: &[String]) -> impl IntoView {
    view! {
        <ul class="bullet-list">
            {items
                .iter()
                .map(|item| view! { <li>{item.clone()}</li> })
                .collect::<Vec<_>>()}
        </ul>
    }
}

/// Full-screen scrollable overlay with the structured write-up of one case
/// study. Owns its scroll position: fresh opens start at the top, and the
/// navigation chrome tracks this surface rather than the window.
#[component]
pub fn ProjectDetail(project: &'static ProjectRecord) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let scrolled = RwSignal::new(false);
    let surface_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |_| {
        if let Some(surface) = surface_ref.get() {
            surface.set_scroll_top(0);
        }
    });

    view! {
        <div
            class="project-detail"
            node_ref=surface_ref
            on:scroll=move |_| {
                if let Some(surface) = surface_ref.get_untracked() {
                    scrolled.set(f64::from(surface.scroll_top()) > scroll::CHROME_THRESHOLD);
                }
            }
        >
            <NavBar scrolled=scrolled show_back=true />

            <div class="project-detail__container">
                <header class="project-detail__header">
                    <div class="project-detail__kicker">{project.subtitle.clone()}</div>
                    <h1 class="project-detail__title">{project.title.clone()}</h1>
                    <div class="rule rule--wide"></div>
                </header>

                <figure class="project-detail__media">
                    <img
                        src=project.image_or_placeholder(1200, 800)
                        alt=project.title.clone()
                    />
                    <figcaption>{project.caption_or_default().to_string()}</figcaption>
                </figure>

                <div class="project-detail__sections">
                    <section>
                        <h3 class="project-detail__section-title project-detail__section-title--tldr">
                            <span class="project-detail__dot"></span>
                            "TL;DR"
                        </h3>
                        <p class="project-detail__tldr">{project.details.tldr.clone()}</p>
                    </section>

                    <div class="project-detail__columns">
                        <section>
                            <h3 class="project-detail__section-title">"Context"</h3>
                            {bullet_list(&project.details.context)}
                        </section>
                        <section>
                            <h3 class="project-detail__section-title">"Inputs / Tools"</h3>
                            {bullet_list(&project.details.inputs_tools)}
                        </section>
                    </div>

                    <section class="project-detail__outcome">
                        <h3 class="project-detail__section-title">"Outputs / Outcome"</h3>
                        {bullet_list(&project.details.outputs_outcome)}
                    </section>

                    <section>
                        <h3 class="project-detail__section-title">"Next Iteration"</h3>
                        {bullet_list(&project.details.next_iteration)}
                    </section>
                </div>

                <div class="project-detail__footer">
                    <button
                        class="project-detail__back"
                        on:click=move |_| ctx.show_home()
                    >
                        "BACK TO PORTFOLIO"
                    </button>
                </div>
            </div>
        </div>
    }
}
