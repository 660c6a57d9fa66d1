use super::view_model::ResumeViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::domain::profile;
use leptos::prelude::*;

/// Full-screen résumé overlay: toolbar with Back and Download, embedded
/// PDF viewer once the asset URL resolves.
#[component]
pub fn ResumePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let vm = use_context::<ResumeViewModel>().expect("ResumeViewModel not provided in context");

    vm.load();
    on_cleanup(move || vm.cancel());

    let download_href = move || vm.pdf_url.get().unwrap_or_else(|| "#".to_string());

    view! {
        <div class="resume-overlay">
            <div class="resume-overlay__toolbar">
                <button
                    class="resume-overlay__back"
                    on:click=move |_| ctx.show_home()
                >
                    <span class="resume-overlay__back-icon">{icon("arrow-left", 16)}</span>
                    "Back to Portfolio"
                </button>
                <a
                    class="resume-overlay__download"
                    href=download_href
                    download=profile::RESUME_FILE_NAME
                    on:click=move |ev| {
                        // Inert until a target exists.
                        if vm.pdf_url.get_untracked().is_none() {
                            ev.prevent_default();
                        }
                    }
                >
                    {icon("download", 14)}
                    " Download PDF"
                </a>
            </div>

            <div class="resume-overlay__viewer">
                {move || match vm.pdf_url.get() {
                    Some(url) => view! {
                        <iframe
                            class="resume-overlay__frame"
                            src=url
                            title="Resume PDF"
                        ></iframe>
                    }
                        .into_any(),
                    None => view! {
                        <div class="resume-overlay__loading">"Loading resume\u{2026}"</div>
                    }
                        .into_any(),
                }}
            </div>
        </div>
    }
}
