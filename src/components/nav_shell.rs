use dioxus::prelude::*;

use crate::app::{use_theme, Route};
use crate::components::Breadcrumbs;
use crate::state::ThemeMode;

/// App-wide chrome around every routed page.
#[allow(non_snake_case)]
#[component]
pub fn NavShell() -> Element {
    let mut theme = use_theme();
    let mut account_open = use_signal(|| false);
    let mode = theme.read().mode();
    let dark = theme.read().is_dark();
    let toggle_label = match mode {
        ThemeMode::Dark => "Switch to light mode",
        ThemeMode::Light => "Switch to dark mode",
    };
    let toggle_icon = match mode {
        ThemeMode::Dark => "☀",
        ThemeMode::Light => "☾",
    };

    rsx! {
        header { class: "nav-bar",
            Link { class: "nav-brand", to: Route::Home {},
                span { class: "logo-badge", "RC" }
                span { "Random Corp" }
            }
            nav { class: "nav-links",
                Link { to: Route::Home {}, active_class: "active", "Home" }
                Link { to: Route::Reporting {}, active_class: "active", "Reporting" }
                Link { to: Route::Videos {}, active_class: "active", "Videos" }
            }
            // Search is a placeholder; nothing is wired to it
            input { class: "nav-search", r#type: "search", placeholder: "Search", aria_label: "Search" }
            button {
                class: "icon-button",
                title: "{toggle_label}",
                aria_label: "{toggle_label}",
                aria_pressed: "{dark}",
                onclick: move |_| theme.write().toggle(),
                "{toggle_icon}"
            }
            div { class: "account-menu",
                button {
                    class: "icon-button",
                    aria_label: "Account",
                    onclick: move |_| account_open.toggle(),
                    "👤"
                }
                if account_open() {
                    div { class: "account-dropdown", role: "menu",
                        // Authentication is not implemented
                        button { class: "menu-item", disabled: true, "Sign in" }
                    }
                }
            }
        }
        Breadcrumbs {}
        main { class: "page",
            Outlet::<Route> {}
        }
        footer { class: "footer", "© 2025 Random Corp. All rights reserved." }
    }
}
