use leptos::prelude::*;

use hanami_shared::{LeaderEntry, ProjectEntry, podium};

use crate::data;
use crate::format::{format_score_compact, trend_color, trend_glyph};

// Podium slots in rank order: accent color and pedestal height. First place
// is tallest and rendered in the middle (visual order 2-1-3).
const SLOT_STYLE: [(&str, &str); 3] = [
    ("#f5c542", "96px"),
    ("#9aa3b5", "72px"),
    ("#b56727", "56px"),
];
const VISUAL_ORDER: [usize; 3] = [1, 0, 2];

/// Avatar cell: URL avatars render as an image, anything else (placeholder
/// emoji, bundled project glyphs) as text.
pub fn avatar_badge(avatar: String, size_px: u32) -> impl IntoView {
    if avatar.starts_with("http") {
        view! {
            <img
                src=avatar
                alt=""
                style=format!(
                    "width: {size_px}px; height: {size_px}px; border-radius: 50%; object-fit: cover; display: block;",
                )
            />
        }
            .into_any()
    } else {
        view! {
            <span style=format!(
                "width: {size_px}px; height: {size_px}px; border-radius: 50%; background: #1a1d2a; display: flex; align-items: center; justify-content: center; font-size: {}px;",
                size_px / 2,
            )>{avatar}</span>
        }
            .into_any()
    }
}

fn podium_card(
    slot: usize,
    avatar: String,
    name: String,
    score: f64,
    trend_line: Option<(String, &'static str)>,
) -> impl IntoView {
    let (accent, height) = SLOT_STYLE[slot];

    view! {
        <div style="display: flex; flex-direction: column; align-items: center; gap: 8px; width: 132px;">
            <div style=format!(
                "width: 56px; height: 56px; border-radius: 50%; border: 2px solid {accent}; padding: 2px; background: #0c0e17;",
            )>{avatar_badge(avatar, 48)}</div>
            <div style="font-family: 'Inter', system-ui, sans-serif; font-size: 0.85rem; color: #e2e0d8; max-width: 100%; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                {name}
            </div>
            <div style=format!(
                "font-family: 'JetBrains Mono', monospace; font-size: 0.8rem; color: {accent}; font-variant-numeric: tabular-nums;",
            )>{format_score_compact(score)}</div>
            {trend_line
                .map(|(text, color)| {
                    view! {
                        <div style=format!(
                            "font-family: 'JetBrains Mono', monospace; font-size: 0.62rem; color: {color};",
                        )>{text}</div>
                    }
                })}
            <div style=format!(
                "width: 100%; height: {height}; background: linear-gradient(180deg, rgba(245,197,66,0.12), rgba(245,197,66,0.02)); border: 1px solid #282c3e; border-bottom: none; border-radius: 6px 6px 0 0; display: flex; align-items: flex-start; justify-content: center; padding-top: 6px; font-family: 'Silkscreen', monospace; font-size: 1.05rem; color: {accent};",
            )>{format!("{}", slot + 1)}</div>
        </div>
    }
}

/// Top-three contributors, padded to exactly three slots.
#[component]
pub fn ContributorsPodium() -> impl IntoView {
    let leaders: RwSignal<Vec<LeaderEntry>> = expect_context();

    let top_three = Memo::new(move |_| podium(&leaders.get(), LeaderEntry::placeholder));

    view! {
        <div style="display: flex; justify-content: center; align-items: flex-end; gap: 16px; margin-top: 24px;">
            {move || {
                let top = top_three.get();
                VISUAL_ORDER
                    .into_iter()
                    .map(|slot| {
                        let entry = top[slot].clone();
                        let trend_line = (!entry.is_placeholder())
                            .then(|| {
                                (
                                    format!(
                                        "{} {} contributions",
                                        trend_glyph(entry.trend),
                                        entry.contributions,
                                    ),
                                    trend_color(entry.trend),
                                )
                            });
                        podium_card(slot, entry.avatar, entry.username, entry.score, trend_line)
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Top-three projects from the bundled dataset, padded like contributors.
#[component]
pub fn ProjectsPodium() -> impl IntoView {
    let top_three = podium(&data::projects(), ProjectEntry::placeholder);

    view! {
        <div style="display: flex; justify-content: center; align-items: flex-end; gap: 16px; margin-top: 24px;">
            {VISUAL_ORDER
                .into_iter()
                .map(|slot| {
                    let entry = top_three[slot].clone();
                    let trend_line = (!entry.is_placeholder())
                        .then(|| {
                            (
                                format!(
                                    "{} {} contributors",
                                    trend_glyph(entry.trend),
                                    entry.contributors,
                                ),
                                trend_color(entry.trend),
                            )
                        });
                    podium_card(slot, entry.avatar, entry.name, entry.score, trend_line)
                })
                .collect_view()}
        </div>
    }
}
