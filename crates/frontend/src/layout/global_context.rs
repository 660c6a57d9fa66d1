use crate::shared::scroll;
use contracts::domain::ProjectRecord;
use leptos::prelude::*;

/// Delay before resolving an anchor after an overlay is dismissed, giving
/// the home surface one render cycle to be back in the document.
const OVERLAY_CLOSE_MS: u32 = 100;

/// Which of the three mutually exclusive surfaces is visible.
///
/// The active case study travels inside the `Project` variant, so a stale
/// selection cannot outlive the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Home,
    Resume,
    Project(&'static ProjectRecord),
}

/// App-wide view state, provided via context from `App`.
///
/// Single writer: every transition goes through the operations below.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub view: RwSignal<ViewMode>,
    pub menu_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(ViewMode::Home),
            menu_open: RwSignal::new(false),
        }
    }

    /// Open the detail overlay for a catalogued case study.
    pub fn show_project(&self, project: &'static ProjectRecord) {
        leptos::logging::log!("view: project '{}'", project.id);
        self.view.set(ViewMode::Project(project));
    }

    /// Open the résumé overlay.
    pub fn show_resume(&self) {
        leptos::logging::log!("view: resume");
        self.view.set(ViewMode::Resume);
    }

    /// Return to the home surface, dropping any active case study.
    pub fn show_home(&self) {
        self.view.set(ViewMode::Home);
    }

    /// The case study behind the detail overlay, when it is open.
    pub fn active_project(&self) -> Option<&'static ProjectRecord> {
        match self.view.get() {
            ViewMode::Project(project) => Some(project),
            _ => None,
        }
    }

    /// Bring the named anchor into view, leaving any overlay first.
    ///
    /// `"top"` always scrolls the outermost document to its origin. An id
    /// that resolves to no element is a logged no-op.
    pub fn navigate_to_section(&self, anchor_id: &str) {
        self.menu_open.set(false);

        let on_home = self
            .view
            .with_untracked(|view| matches!(view, ViewMode::Home));
        if on_home {
            scroll::scroll_to_anchor(anchor_id);
        } else {
            self.show_home();
            let anchor_id = anchor_id.to_string();
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(OVERLAY_CLOSE_MS).await;
                scroll::scroll_to_anchor(&anchor_id);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::projects::catalog;

    #[test]
    fn test_initial_state_is_home_with_no_project() {
        let ctx = AppGlobalContext::new();
        assert_eq!(ctx.view.get(), ViewMode::Home);
        assert!(ctx.active_project().is_none());
    }

    #[test]
    fn test_show_project_exposes_the_record() {
        let ctx = AppGlobalContext::new();
        let project = catalog::project_by_id("okrs").expect("known id");
        ctx.show_project(project);
        let active = ctx.active_project().expect("project view");
        assert_eq!(active.id, "okrs");
        assert!(catalog::project_by_id(&active.id).is_some());
    }

    #[test]
    fn test_show_home_clears_active_project() {
        let ctx = AppGlobalContext::new();
        let project = catalog::project_by_id("fundraising").expect("known id");
        ctx.show_project(project);
        ctx.show_home();
        assert_eq!(ctx.view.get(), ViewMode::Home);
        assert!(ctx.active_project().is_none());
        // The same project can be re-opened afterwards.
        ctx.show_project(project);
        assert_eq!(
            ctx.active_project().map(|p| p.id.as_str()),
            Some("fundraising")
        );
    }

    #[test]
    fn test_show_home_is_idempotent() {
        let ctx = AppGlobalContext::new();
        ctx.show_resume();
        ctx.show_home();
        let once = ctx.view.get();
        ctx.show_home();
        assert_eq!(ctx.view.get(), once);
    }

    #[test]
    fn test_all_modes_reach_each_other() {
        let ctx = AppGlobalContext::new();
        let project = catalog::project_by_id("adoption").expect("known id");
        ctx.show_resume();
        ctx.show_project(project);
        assert_eq!(ctx.view.get(), ViewMode::Project(project));
        ctx.show_resume();
        assert_eq!(ctx.view.get(), ViewMode::Resume);
        ctx.show_home();
        assert_eq!(ctx.view.get(), ViewMode::Home);
    }

    #[test]
    fn test_unknown_anchor_is_a_no_op_on_home() {
        let ctx = AppGlobalContext::new();
        // Outside a browser the lookup resolves nothing; the call must
        // neither panic nor disturb the view state.
        ctx.navigate_to_section("not-a-real-anchor");
        assert_eq!(ctx.view.get(), ViewMode::Home);
    }

    #[test]
    fn test_navigation_closes_the_mobile_menu() {
        let ctx = AppGlobalContext::new();
        ctx.menu_open.set(true);
        ctx.navigate_to_section("top");
        assert!(!ctx.menu_open.get());
    }
}
