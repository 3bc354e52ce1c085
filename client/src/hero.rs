use leptos::prelude::*;

use crate::app::{BoardView, PageLoaded};

/// Hero header: board title, subtitle, and the podium slot passed as
/// children by the page.
#[component]
pub fn BoardHero(children: Children) -> impl IntoView {
    let view: RwSignal<BoardView> = expect_context();
    let PageLoaded(loaded) = expect_context();

    let title = move || match view.get() {
        BoardView::Contributors => "Top Contributors",
        BoardView::Projects => "Top Projects",
    };
    let subtitle = move || match view.get() {
        BoardView::Contributors => "Ranked by contributions across verified projects",
        BoardView::Projects => "The community's most active open projects",
    };

    view! {
        <section
            class="board-enter"
            class:board-enter-done=move || loaded.get()
            style="background: #13161f; border: 1px solid #282c3e; border-radius: 12px; padding: 28px 24px 24px; text-align: center; position: relative; overflow: hidden;"
        >
            <div class="text-gold-gradient" style="font-family: 'Silkscreen', monospace; font-size: 1.35rem; font-weight: 700; letter-spacing: 0.16em; text-transform: uppercase;">
                {title}
            </div>
            <div style="margin-top: 6px; font-family: 'JetBrains Mono', monospace; font-size: 0.72rem; color: #9a9590;">
                {subtitle}
            </div>
            {children()}
        </section>
    }
}
