use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use hanami_shared::{LeaderEntry, display_error, stale_response};

use crate::api;
use crate::app::BoardView;

/// Fixed page size requested from the ranking service.
pub const PAGE_SIZE: u32 = 10;

#[derive(Clone, Copy)]
pub struct FetchContext {
    pub view: RwSignal<BoardView>,
    pub leaders: RwSignal<Vec<LeaderEntry>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub fetch_nonce: RwSignal<u64>,
}

/// Fetch-and-replace driver. Call from an effect so the view signal is
/// tracked; runs on mount and on every view change, and only issues a
/// request while the contributors view is active.
///
/// Each dispatch bumps the nonce; a response whose captured nonce is no
/// longer current is dropped instead of overwriting newer state.
pub fn fetch_on_view_change(ctx: FetchContext) {
    let FetchContext {
        view,
        leaders,
        loading,
        error,
        fetch_nonce,
    } = ctx;

    if view.get() != BoardView::Contributors {
        return;
    }

    let request_nonce = fetch_nonce.get_untracked().wrapping_add(1);
    fetch_nonce.set(request_nonce);
    loading.set(true);
    error.set(None);

    spawn_local(async move {
        let result = api::fetch_leaderboard(PAGE_SIZE).await;

        if stale_response(request_nonce, fetch_nonce.get_untracked()) {
            return;
        }

        match result {
            Ok(raw) => {
                let entries: Vec<LeaderEntry> =
                    raw.into_iter().map(LeaderEntry::from_raw).collect();
                leaders.set(entries);
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("Leaderboard fetch failed: {e}").into());
                error.set(Some(display_error(&e)));
                leaders.set(Vec::new());
            }
        }
        loading.set(false);
    });
}
