use dioxus::prelude::*;

use crate::api::HttpApi;
use crate::components::{Home, NavShell, PageNotFound, Reporting, Videos};
use crate::platform::{platform_storage, system_prefers_dark, watch_system_theme, PlatformStorage};
use crate::state::ThemeStore;
use crate::{FAVICON, MAIN_CSS};

/// Theme store shared with every component through context.
pub type Theme = Signal<ThemeStore<PlatformStorage>>;

pub fn use_theme() -> Theme {
    use_context::<Theme>()
}

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavShell)]
        #[route("/")]
        Home {},
        #[route("/reporting")]
        Reporting {},
        #[route("/videos")]
        Videos {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    use_context_provider(HttpApi::from_env);

    let mut theme: Theme = use_context_provider(|| {
        Signal::new(ThemeStore::new(platform_storage(), system_prefers_dark()))
    });

    // OS preference watcher, registered once for the lifetime of the page
    use_hook(move || {
        watch_system_theme(move |dark| {
            theme.write().on_system_change(dark);
        })
    });

    let mode = theme.read().mode();

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: MAIN_CSS }
        document::Meta { name: "color-scheme", content: mode.color_scheme() }
        div { class: "app {mode.class()}",
            Router::<Route> {}
        }
    }
}
