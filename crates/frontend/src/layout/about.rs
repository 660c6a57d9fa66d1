use contracts::domain::{profile, Anchor};
use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Anchor::About.as_str() class="about">
            <div class="container">
                <div class="about__header">
                    <div class="about__kicker">{profile::ABOUT_KICKER}</div>
                    <h2 class="about__heading">{profile::ABOUT_HEADING}</h2>
                    <div class="rule rule--wide"></div>
                </div>

                <div class="about__grid">
                    <figure class="about__portrait">
                        <img src=profile::PROFILE_IMAGE_URL alt=profile::DISPLAY_NAME />
                        <figcaption>{profile::PROFILE_IMAGE_CAPTION}</figcaption>
                    </figure>
                    <div class="about__copy">
                        {profile::ABOUT_PARAGRAPHS
                            .iter()
                            .map(|paragraph| view! { <p>{*paragraph}</p> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}
