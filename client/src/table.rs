use leptos::prelude::*;
use wasm_bindgen::JsCast;

use hanami_shared::{LeaderEntry, matches_ecosystem};

use crate::app::{PageLoaded, RankingFilter};
use crate::data;
use crate::format::{format_score_compact, format_trend, trend_color};
use crate::podium::avatar_badge;

fn rank_color(rank: u32) -> &'static str {
    match rank {
        1 => "#f5c542",
        2 => "#9aa3b5",
        3 => "#b56727",
        _ => "#5a5860",
    }
}

fn ecosystem_chips(ecosystems: Vec<String>) -> impl IntoView {
    view! {
        <div style="display: flex; gap: 4px; flex-wrap: wrap;">
            {ecosystems
                .into_iter()
                .map(|eco| {
                    view! {
                        <span style="font-family: 'JetBrains Mono', monospace; font-size: 0.58rem; color: #9a9590; background: #1a1d2a; border: 1px solid #282c3e; border-radius: 3px; padding: 1px 6px;">
                            {eco}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn hover_background(e: web_sys::MouseEvent, color: &str) {
    if let Some(el) = e
        .current_target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
    {
        el.style().set_property("background", color).ok();
    }
}

fn table_header(
    title: &'static str,
    count: Memo<usize>,
    active_filter: RwSignal<RankingFilter>,
) -> impl IntoView {
    view! {
        <div style="display: flex; align-items: baseline; justify-content: space-between; padding: 14px 20px 10px; border-bottom: 1px solid #282c3e;">
            <span style="font-family: 'Silkscreen', monospace; font-size: 0.85rem; text-transform: uppercase; letter-spacing: 0.14em; color: #5a5860;">
                <span style="color: #f5c542; margin-right: 6px; font-size: 0.7rem;">{"\u{25C6}"}</span>
                {title}
            </span>
            <span style="font-family: 'JetBrains Mono', monospace; font-size: 0.65rem; color: #3a3f5c;">
                {move || format!("{} \u{00B7} {} shown", active_filter.get().label(), count.get())}
            </span>
        </div>
    }
}

/// Ranked contributor rows below the podium. Shows the full fetched list,
/// narrowed by the ecosystem dropdown; the ranking-period pill is a display
/// label over the single overall dataset the endpoint serves.
#[component]
pub fn ContributorsTable() -> impl IntoView {
    let leaders: RwSignal<Vec<LeaderEntry>> = expect_context();
    let selected_ecosystem: RwSignal<String> = expect_context();
    let active_filter: RwSignal<RankingFilter> = expect_context();
    let PageLoaded(loaded) = expect_context();

    let rows = Memo::new(move |_| {
        let selected = selected_ecosystem.get();
        leaders
            .get()
            .into_iter()
            .filter(|entry| matches_ecosystem(&entry.ecosystems, &selected))
            .collect::<Vec<_>>()
    });
    let row_count = Memo::new(move |_| rows.get().len());

    view! {
        <div
            class="board-enter"
            class:board-enter-done=move || loaded.get()
            style="background: #13161f; border: 1px solid #282c3e; border-radius: 12px; overflow: hidden;"
        >
            {table_header("Contributors", row_count, active_filter)}
            <Show
                when=move || !rows.get().is_empty()
                fallback=|| {
                    view! {
                        <div style="text-align: center; padding: 32px 0; font-family: 'JetBrains Mono', monospace; font-size: 0.72rem; color: #3a3f5c;">
                            "No contributors match this ecosystem."
                        </div>
                    }
                }
            >
                <div style="padding: 8px 10px 12px;">
                    <For
                        each=move || rows.get()
                        key=|entry| entry.username.clone()
                        children=move |entry| {
                            let chips = ecosystem_chips(entry.ecosystems.clone());
                            view! {
                                <div
                                    style="display: flex; align-items: center; gap: 12px; padding: 8px 10px; border-radius: 6px; transition: background 0.15s;"
                                    on:mouseenter=|e| hover_background(e, "#1a1d2a")
                                    on:mouseleave=|e| hover_background(e, "transparent")
                                >
                                    <span style=format!(
                                        "width: 28px; text-align: center; font-family: 'Silkscreen', monospace; font-size: 0.8rem; color: {}; flex-shrink: 0;",
                                        rank_color(entry.rank),
                                    )>{entry.rank}</span>
                                    {avatar_badge(entry.avatar.clone(), 32)}
                                    <div style="flex: 1; min-width: 0;">
                                        <div style="font-size: 0.85rem; color: #e2e0d8; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                                            {entry.username.clone()}
                                        </div>
                                        {chips}
                                    </div>
                                    <span style="width: 64px; text-align: right; font-family: 'JetBrains Mono', monospace; font-size: 0.72rem; color: #9a9590; font-variant-numeric: tabular-nums;">
                                        {entry.contributions}
                                    </span>
                                    <span style="width: 64px; text-align: right; font-family: 'JetBrains Mono', monospace; font-size: 0.78rem; color: #e2e0d8; font-variant-numeric: tabular-nums;">
                                        {format_score_compact(entry.score)}
                                    </span>
                                    <span style=format!(
                                        "width: 48px; text-align: right; font-family: 'JetBrains Mono', monospace; font-size: 0.68rem; color: {};",
                                        trend_color(entry.trend),
                                    )>{format_trend(entry.trend, entry.trend_value)}</span>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

/// Ranked project rows from the bundled dataset.
#[component]
pub fn ProjectsTable() -> impl IntoView {
    let active_filter: RwSignal<RankingFilter> = expect_context();
    let PageLoaded(loaded) = expect_context();

    let rows = data::projects();
    let row_count = Memo::new({
        let len = rows.len();
        move |_| len
    });

    view! {
        <div
            class="board-enter"
            class:board-enter-done=move || loaded.get()
            style="background: #13161f; border: 1px solid #282c3e; border-radius: 12px; overflow: hidden;"
        >
            {table_header("Projects", row_count, active_filter)}
            <div style="padding: 8px 10px 12px;">
                {rows
                    .into_iter()
                    .map(|project| {
                        let chips = ecosystem_chips(project.ecosystems.clone());
                        view! {
                            <div
                                style="display: flex; align-items: center; gap: 12px; padding: 8px 10px; border-radius: 6px; transition: background 0.15s;"
                                on:mouseenter=|e| hover_background(e, "#1a1d2a")
                                on:mouseleave=|e| hover_background(e, "transparent")
                            >
                                <span style=format!(
                                    "width: 28px; text-align: center; font-family: 'Silkscreen', monospace; font-size: 0.8rem; color: {}; flex-shrink: 0;",
                                    rank_color(project.rank),
                                )>{project.rank}</span>
                                {avatar_badge(project.avatar.clone(), 32)}
                                <div style="flex: 1; min-width: 0;">
                                    <div style="font-size: 0.85rem; color: #e2e0d8; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                                        {project.name.clone()}
                                    </div>
                                    <div style="font-size: 0.68rem; color: #9a9590; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; margin-bottom: 2px;">
                                        {project.tagline.clone()}
                                    </div>
                                    {chips}
                                </div>
                                <span style="width: 64px; text-align: right; font-family: 'JetBrains Mono', monospace; font-size: 0.72rem; color: #9a9590; font-variant-numeric: tabular-nums;">
                                    {project.contributors}
                                </span>
                                <span style="width: 64px; text-align: right; font-family: 'JetBrains Mono', monospace; font-size: 0.78rem; color: #e2e0d8; font-variant-numeric: tabular-nums;">
                                    {format_score_compact(project.score)}
                                </span>
                                <span style=format!(
                                    "width: 48px; text-align: right; font-family: 'JetBrains Mono', monospace; font-size: 0.68rem; color: {};",
                                    trend_color(project.trend),
                                )>{format_trend(project.trend, project.trend_value)}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
