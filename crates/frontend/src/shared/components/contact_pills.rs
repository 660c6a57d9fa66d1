use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::domain::profile;
use leptos::prelude::*;

/// The contact row shared by the hero and the footer: fixed outbound
/// links plus the résumé trigger.
#[component]
pub fn ContactPills(
    /// Dark styling for the footer variant
    #[prop(optional)]
    dark: bool,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="contact-pills" class:contact-pills--dark=dark>
            <a class="contact-pill" href=format!("tel:{}", profile::PHONE)>
                <span class="contact-pill__icon">{icon("phone", 14)}</span>
                <span class="contact-pill__label">{profile::PHONE}</span>
            </a>
            <a class="contact-pill" href=format!("mailto:{}", profile::EMAIL)>
                <span class="contact-pill__icon">{icon("mail", 14)}</span>
                <span class="contact-pill__label contact-pill__label--lower">
                    {profile::EMAIL}
                </span>
            </a>
            <a class="contact-pill" href=profile::LINKEDIN_URL target="_blank" rel="noopener">
                <span class="contact-pill__icon">{icon("linkedin", 14)}</span>
                <span class="contact-pill__label">"LinkedIn"</span>
            </a>
            <button class="contact-pill" on:click=move |_| ctx.show_resume()>
                <span class="contact-pill__icon">{icon("file-text", 14)}</span>
                <span class="contact-pill__label">"Resume"</span>
            </button>
        </div>
    }
}
