//! Toast notifications pinned to the bottom center of the window

use std::time::{Duration, Instant};

use dioxus::prelude::*;

use crate::state::AppState;

/// How often expired toasts are swept
const SWEEP_INTERVAL: Duration = Duration::from_millis(250);

/// Renders the toast queue and expires it.
///
/// Mounted beside the router in `App`, so the sweep lives as long as the
/// window and is unaffected by route changes.
#[component]
pub fn ToastContainer() -> Element {
    let mut state = use_context::<AppState>();

    use_future(move || async move {
        let mut toasts = state.toasts;
        loop {
            tokio::time::sleep(SWEEP_INTERVAL).await;
            let now = Instant::now();
            if toasts.peek().has_expired(now) {
                toasts.write().expire(now);
            }
        }
    });

    let active = state.toasts.read().active().to_vec();

    rsx! {
        div {
            class: "toast-container bottom-center",
            for entry in active {
                {
                    let id = entry.id;
                    let class = format!("toast {}", entry.toast.kind.class());
                    let message = entry.toast.message;
                    rsx! {
                        div {
                            key: "{id}",
                            class: "{class}",
                            role: "alert",
                            onclick: move |_| state.dismiss_toast(id),
                            "{message}"
                        }
                    }
                }
            }
        }
    }
}
