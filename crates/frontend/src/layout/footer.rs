use crate::shared::components::ContactPills;
use contracts::domain::profile;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer__inner">
                <div class="footer__wordmark">{profile::DISPLAY_NAME}</div>
                <ContactPills dark=true />
            </div>
        </footer>
    }
}
