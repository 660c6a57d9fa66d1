use crate::domain::projects::catalog;
use crate::domain::projects::ui::ProjectSection;
use crate::layout::about::About;
use crate::layout::footer::Footer;
use crate::layout::hero::Hero;
use crate::layout::navbar::NavBar;
use crate::shared::scroll;
use contracts::domain::{profile, Anchor};
use leptos::prelude::window_event_listener;
use leptos::prelude::*;

/// The home surface: hero, about, the five case-study sections, the
/// catch-all list, and the footer. Stays mounted underneath any overlay.
#[component]
pub fn HomePage() -> impl IntoView {
    let scrolled = RwSignal::new(false);

    // Window scroll drives the navigation chrome styling.
    let _ = window_event_listener(leptos::ev::scroll, move |_| {
        let offset = web_sys::window()
            .and_then(|w| w.page_y_offset().ok())
            .unwrap_or(0.0);
        scrolled.set(offset > scroll::CHROME_THRESHOLD);
    });

    view! {
        <div class="page">
            <NavBar scrolled=scrolled />
            <Hero />
            <main>
                <About />
                {catalog::SECTIONS
                    .iter()
                    .enumerate()
                    .map(|(index, section)| {
                        view! { <ProjectSection section=*section alt=index % 2 == 0 /> }
                    })
                    .collect::<Vec<_>>()}
                <EverythingElse />
            </main>
            <Footer />
        </div>
    }
}

/// The odds-and-ends section: fixed label/body bullets, no catalog entry.
#[component]
fn EverythingElse() -> impl IntoView {
    view! {
        <section id=Anchor::EverythingElse.as_str() class="section">
            <div class="container">
                <div class="section__header">
                    <h2 class="section__heading">{Anchor::EverythingElse.label()}</h2>
                    <div class="section__tagline">{profile::EVERYTHING_ELSE_TAGLINE}</div>
                </div>
                <div class="catchall-card">
                    <ul class="bullet-list bullet-list--spaced">
                        {profile::EVERYTHING_ELSE_ITEMS
                            .iter()
                            .map(|(label, body)| {
                                view! {
                                    <li>
                                        <strong class="emphasis">{*label}</strong>
                                        " "
                                        {*body}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>
        </section>
    }
}
