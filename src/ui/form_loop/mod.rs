//! Interactive form loop.
//!
//! Terminal events are mapped to [`AppAction`](crate::core::app::AppAction)s,
//! applied to the shared [`App`], and any resulting background work is handed
//! to the [`TranslationService`](crate::core::translate_service::TranslationService).

mod event_loop;
mod keybindings;
mod lifecycle;
mod setup;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::core::app::App;

pub use event_loop::run_form;
pub use setup::FormLaunch;

/// Cloneable handle to the single `App` owned by the loop.
#[derive(Clone)]
pub struct AppHandle {
    inner: Arc<Mutex<App>>,
}

impl AppHandle {
    pub fn new(inner: Arc<Mutex<App>>) -> Self {
        Self { inner }
    }

    pub async fn read<R>(&self, f: impl FnOnce(&App) -> R) -> R {
        let guard = self.inner.lock().await;
        f(&guard)
    }

    pub async fn update<R>(&self, f: impl FnOnce(&mut App) -> R) -> R {
        let mut guard = self.inner.lock().await;
        f(&mut guard)
    }
}
