use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::domain::{profile, Anchor};
use leptos::prelude::*;

/// Fixed top navigation bar plus the full-screen mobile menu.
///
/// `scrolled` comes from the owning surface: the home page tracks the
/// window, the project overlay tracks its own scroll container.
#[component]
pub fn NavBar(
    /// Past the chrome threshold, the bar switches to solid styling
    #[prop(into)]
    scrolled: Signal<bool>,
    /// Show the back affordance instead of the wordmark (overlay surfaces)
    #[prop(optional)]
    show_back: bool,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let nav_links = move || {
        Anchor::NAV
            .iter()
            .map(|anchor| {
                let anchor = *anchor;
                view! {
                    <button
                        class="navbar__link"
                        on:click=move |_| ctx.navigate_to_section(anchor.as_str())
                    >
                        {anchor.label()}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    let menu_links = move || {
        Anchor::NAV
            .iter()
            .map(|anchor| {
                let anchor = *anchor;
                view! {
                    <button
                        class="mobile-menu__link"
                        on:click=move |_| ctx.navigate_to_section(anchor.as_str())
                    >
                        {anchor.label()}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="navbar" class:navbar--scrolled=move || scrolled.get()>
            <div class="container navbar__inner">
                <div
                    class="navbar__brand"
                    on:click=move |_| {
                        if show_back {
                            ctx.show_home();
                        } else {
                            ctx.navigate_to_section("top");
                        }
                    }
                >
                    {if show_back {
                        view! {
                            <span class="navbar__back">{icon("arrow-left", 14)}</span>
                            <span class="navbar__back-label">"Back"</span>
                        }
                            .into_any()
                    } else {
                        view! { <span class="navbar__wordmark">{profile::DISPLAY_NAME}</span> }
                            .into_any()
                    }}
                </div>

                <div class="navbar__links">
                    {nav_links()}
                    <button class="navbar__link" on:click=move |_| ctx.show_resume()>
                        "Resume"
                    </button>
                </div>

                <button
                    class="navbar__burger"
                    on:click=move |_| ctx.menu_open.update(|open| *open = !*open)
                >
                    {move || icon(if ctx.menu_open.get() { "x" } else { "menu" }, 20)}
                </button>
            </div>
        </nav>

        <Show when=move || ctx.menu_open.get()>
            <div class="mobile-menu">
                <button
                    class="mobile-menu__close"
                    on:click=move |_| ctx.menu_open.set(false)
                >
                    {icon("x", 20)}
                </button>
                {show_back
                    .then(|| {
                        view! {
                            <button
                                class="mobile-menu__link mobile-menu__link--back"
                                on:click=move |_| {
                                    ctx.menu_open.set(false);
                                    ctx.show_home();
                                }
                            >
                                {icon("arrow-left", 16)}
                                " Back to Portfolio"
                            </button>
                        }
                    })}
                {menu_links()}
                <button
                    class="mobile-menu__link"
                    on:click=move |_| {
                        ctx.menu_open.set(false);
                        ctx.show_resume();
                    }
                >
                    "Resume"
                </button>
            </div>
        </Show>
    }
}
