use leptos::prelude::*;

use hanami_shared::{LeaderEntry, ecosystem_options};

use crate::app::{BoardView, EcosystemDropdownOpen, PageLoaded, RankingFilter};

/// Ranking-period pills plus the ecosystem dropdown (contributors only).
#[component]
pub fn FiltersBar() -> impl IntoView {
    let view: RwSignal<BoardView> = expect_context();
    let active_filter: RwSignal<RankingFilter> = expect_context();
    let selected_ecosystem: RwSignal<String> = expect_context();
    let leaders: RwSignal<Vec<LeaderEntry>> = expect_context();
    let EcosystemDropdownOpen(dropdown_open) = expect_context();
    let PageLoaded(loaded) = expect_context();

    let options = Memo::new(move |_| ecosystem_options(&leaders.get()));

    view! {
        <div
            class="board-enter"
            class:board-enter-done=move || loaded.get()
            style="display: flex; align-items: center; justify-content: space-between; gap: 12px; flex-wrap: wrap;"
        >
            <div style="display: flex; gap: 4px; background: #13161f; border: 1px solid #282c3e; border-radius: 8px; padding: 4px;">
                {RankingFilter::ALL
                    .into_iter()
                    .map(|filter| {
                        view! {
                            <span
                                style=move || {
                                    let active = active_filter.get() == filter;
                                    format!(
                                        "font-family: 'JetBrains Mono', monospace; font-size: 0.68rem; padding: 4px 12px; border-radius: 5px; cursor: pointer; transition: color 0.15s, background 0.15s; {}",
                                        if active {
                                            "color: #f5c542; background: rgba(245,197,66,0.1);"
                                        } else {
                                            "color: #5a5860; background: transparent;"
                                        },
                                    )
                                }
                                on:click=move |_| active_filter.set(filter)
                            >
                                {filter.label()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <Show when=move || view.get() == BoardView::Contributors fallback=|| ()>
                <div style="position: relative;">
                    <button
                        style="display: flex; align-items: center; gap: 8px; background: #13161f; border: 1px solid #282c3e; border-radius: 8px; padding: 7px 12px; cursor: pointer; font-family: 'JetBrains Mono', monospace; font-size: 0.68rem; color: #9a9590; transition: border-color 0.15s;"
                        on:click=move |_| dropdown_open.update(|v| *v = !*v)
                    >
                        {move || selected_ecosystem.get()}
                        <span style="font-size: 0.55rem; color: #5a5860;">
                            {move || if dropdown_open.get() { "\u{25B2}" } else { "\u{25BC}" }}
                        </span>
                    </button>
                    <Show when=move || dropdown_open.get() fallback=|| ()>
                        <div style="position: absolute; right: 0; top: calc(100% + 4px); min-width: 180px; background: #161921; border: 1px solid #282c3e; border-radius: 6px; box-shadow: 0 4px 16px rgba(0,0,0,0.5); z-index: 30; overflow: hidden;">
                            <For
                                each=move || options.get()
                                key=|option| option.clone()
                                children=move |option: String| {
                                    let display = option.clone();
                                    let select_value = option.clone();
                                    view! {
                                        <div
                                            style=move || {
                                                let active = selected_ecosystem.get() == option;
                                                format!(
                                                    "padding: 7px 12px; font-family: 'JetBrains Mono', monospace; font-size: 0.68rem; cursor: pointer; transition: background 0.15s, color 0.15s; {}",
                                                    if active {
                                                        "color: #f5c542; background: rgba(245,197,66,0.08);"
                                                    } else {
                                                        "color: #9a9590; background: transparent;"
                                                    },
                                                )
                                            }
                                            on:click=move |_| {
                                                selected_ecosystem.set(select_value.clone());
                                                dropdown_open.set(false);
                                            }
                                        >
                                            {display}
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
