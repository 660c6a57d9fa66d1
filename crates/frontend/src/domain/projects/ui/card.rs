use crate::layout::global_context::AppGlobalContext;
use crate::shared::emphasis::render_emphasis;
use crate::shared::icons::icon;
use contracts::domain::ProjectRecord;
use leptos::prelude::*;

/// Summary card for one case study, with the "Deep Dive" action opening
/// the detail overlay.
#[component]
pub fn ExperienceCard(
    project: &'static ProjectRecord,
    /// Entrance animation delay, staggered per card within a section
    delay: &'static str,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="experience-card" style:animation-delay=delay>
            <div class="experience-card__body">
                <div>
                    <h3 class="experience-card__title">{project.title.clone()}</h3>
                    <div class="experience-card__subtitle">{project.subtitle.clone()}</div>
                    <div class="rule rule--short"></div>
                    <p class="experience-card__description">
                        {render_emphasis(&project.description)}
                    </p>
                </div>
                <button
                    class="experience-card__cta"
                    on:click=move |_| ctx.show_project(project)
                >
                    "Deep Dive " {icon("arrow-right", 14)}
                </button>
            </div>
            <div class="experience-card__media">
                <img
                    src=project.image_or_placeholder(800, 800)
                    alt=project.title.clone()
                />
                <div class="experience-card__caption">
                    {project.caption_or_default().to_string()}
                </div>
            </div>
        </div>
    }
}
