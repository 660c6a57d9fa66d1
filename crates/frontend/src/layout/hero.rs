use crate::shared::components::ContactPills;
use contracts::domain::profile;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <div class="hero__glow"></div>
            <div class="container hero__content">
                <h1 class="hero__name">{profile::DISPLAY_NAME}</h1>
                <p class="hero__tagline">{profile::TAGLINE}</p>
                <ContactPills />
            </div>
        </header>
    }
}
