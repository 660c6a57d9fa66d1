use super::assets;
use leptos::prelude::*;

/// State behind the résumé overlay.
///
/// The probe chain is re-run on every activation. `generation` is the
/// staleness token: activation and dismissal both advance it, and a
/// finished probe only publishes while its captured token is still
/// current, so an abandoned resolution can never write into a later view.
#[derive(Clone, Copy)]
pub struct ResumeViewModel {
    pub pdf_url: RwSignal<Option<String>>,
    generation: RwSignal<u32>,
}

impl ResumeViewModel {
    pub fn new() -> Self {
        Self {
            pdf_url: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    /// Kick off the existence-probe chain for this activation.
    pub fn load(&self) {
        let token = self.generation.with_untracked(|g| g + 1);
        self.generation.set(token);
        self.pdf_url.set(None);

        let pdf_url = self.pdf_url;
        let generation = self.generation;
        wasm_bindgen_futures::spawn_local(async move {
            let resolved = assets::resolve_resume_url().await;
            if generation.get_untracked() != token {
                // The overlay went away while we were probing.
                return;
            }
            pdf_url.set(Some(resolved));
        });
    }

    /// Abandon any in-flight probe; its result will be discarded.
    pub fn cancel(&self) {
        self.generation.update(|g| *g += 1);
        self.pdf_url.set(None);
    }
}
