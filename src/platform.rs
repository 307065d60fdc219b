//! Browser APIs the portal consumes: local storage, the color-scheme media
//! query and the page origin. Other platforms get in-memory stand-ins.

#[cfg(not(feature = "web"))]
use crate::state::theme::MemoryStorage;

#[cfg(feature = "web")]
pub use web::{page_origin, system_prefers_dark, watch_system_theme, LocalStorage};

#[cfg(feature = "web")]
pub type PlatformStorage = LocalStorage;
#[cfg(not(feature = "web"))]
pub type PlatformStorage = MemoryStorage;

#[cfg(feature = "web")]
pub fn platform_storage() -> PlatformStorage {
    LocalStorage
}

#[cfg(not(feature = "web"))]
pub fn platform_storage() -> PlatformStorage {
    MemoryStorage::new()
}

#[cfg(not(feature = "web"))]
pub fn system_prefers_dark() -> bool {
    false
}

#[cfg(not(feature = "web"))]
pub fn watch_system_theme(_on_change: impl FnMut(bool) + 'static) {}

#[cfg(feature = "web")]
mod web {
    use anyhow::{anyhow, Result};
    use dioxus::logger::tracing::warn;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::MediaQueryListEvent;

    use crate::state::theme::PreferenceStorage;

    const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

    /// `window.localStorage`. Disabled storage reads as empty.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct LocalStorage;

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    impl PreferenceStorage for LocalStorage {
        fn load(&self, key: &str) -> Option<String> {
            storage()?.get_item(key).ok().flatten()
        }

        fn save(&self, key: &str, value: &str) -> Result<()> {
            let storage = storage().ok_or_else(|| anyhow!("localStorage unavailable"))?;
            storage
                .set_item(key, value)
                .map_err(|e| anyhow!("localStorage write failed: {e:?}"))
        }
    }

    pub fn system_prefers_dark() -> bool {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }

    /// Calls `on_change` whenever the OS color scheme flips. The listener
    /// lives for the rest of the page.
    pub fn watch_system_theme(mut on_change: impl FnMut(bool) + 'static) {
        let Some(mq) = web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
        else {
            warn!("[theme] matchMedia unavailable; not watching OS theme");
            return;
        };
        let listener = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
            move |ev: MediaQueryListEvent| on_change(ev.matches()),
        );
        let func: &js_sys::Function = listener.as_ref().unchecked_ref();
        if let Err(e) = mq.add_event_listener_with_callback("change", func) {
            warn!("[theme] could not watch OS theme: {e:?}");
            return;
        }
        listener.forget();
    }

    pub fn page_origin() -> Option<String> {
        web_sys::window()?.location().origin().ok()
    }
}
