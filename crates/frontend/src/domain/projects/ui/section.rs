use super::card::ExperienceCard;
use crate::domain::projects::catalog;
use contracts::domain::SectionDef;
use leptos::prelude::*;

const CARD_DELAYS: [&str; 2] = ["0.1s", "0.2s"];

/// One themed home-page block: anchored heading plus its two case study
/// cards. Backgrounds alternate between cream and white down the page.
#[component]
pub fn ProjectSection(section: SectionDef, alt: bool) -> impl IntoView {
    view! {
        <section
            id=section.anchor.as_str()
            class="section"
            class:section--alt=alt
        >
            <div class="container">
                <div class="section__header">
                    <h2 class="section__heading">{section.heading}</h2>
                </div>
                <div class="section__grid">
                    {section
                        .project_ids
                        .iter()
                        .enumerate()
                        .filter_map(|(index, id)| {
                            let project = catalog::project_by_id(id)?;
                            Some(view! {
                                <ExperienceCard
                                    project=project
                                    delay=CARD_DELAYS[index % CARD_DELAYS.len()]
                                />
                            })
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
