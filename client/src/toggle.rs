use leptos::prelude::*;

use crate::app::{BoardView, PageLoaded};

/// Floating switch between the contributors and projects boards.
#[component]
pub fn BoardToggle() -> impl IntoView {
    let view: RwSignal<BoardView> = expect_context();
    let PageLoaded(loaded) = expect_context();

    view! {
        <div
            class="board-enter"
            class:board-enter-done=move || loaded.get()
            style="display: flex; justify-content: center;"
        >
            <div style="display: flex; gap: 4px; background: #13161f; border: 1px solid #282c3e; border-radius: 8px; padding: 4px;">
                {[
                    (BoardView::Contributors, "Contributors"),
                    (BoardView::Projects, "Projects"),
                ]
                    .into_iter()
                    .map(|(target, label)| {
                        view! {
                            <span
                                style=move || {
                                    let active = view.get() == target;
                                    format!(
                                        "font-family: 'JetBrains Mono', monospace; font-size: 0.72rem; padding: 6px 14px; border-radius: 6px; cursor: pointer; transition: color 0.15s, background 0.15s; {}",
                                        if active {
                                            "color: #f5c542; background: rgba(245,197,66,0.1);"
                                        } else {
                                            "color: #5a5860; background: transparent;"
                                        },
                                    )
                                }
                                on:click=move |_| view.set(target)
                            >
                                {label}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
