use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use hanami_shared::{ALL_ECOSYSTEMS, LeaderEntry};

use crate::filters::FiltersBar;
use crate::hero::BoardHero;
use crate::petals::{self, FallingPetals, Petal};
use crate::podium::{ContributorsPodium, ProjectsPodium};
use crate::ranking;
use crate::styles::BoardStyles;
use crate::table::{ContributorsTable, ProjectsTable};
use crate::toggle::BoardToggle;

/// Which leaderboard the page is showing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum BoardView {
    Contributors,
    Projects,
}

/// Ranking-period filter pills above the table.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum RankingFilter {
    Overall,
    Monthly,
    Weekly,
}

impl RankingFilter {
    pub const ALL: [RankingFilter; 3] = [Self::Overall, Self::Monthly, Self::Weekly];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overall => "Overall",
            Self::Monthly => "This Month",
            Self::Weekly => "This Week",
        }
    }
}

/// Newtype wrappers so same-typed signals stay distinct in Leptos context.
#[derive(Clone, Copy)]
pub struct PageLoaded(pub RwSignal<bool>);
#[derive(Clone, Copy)]
pub struct EcosystemDropdownOpen(pub RwSignal<bool>);
#[derive(Clone, Copy)]
pub struct PetalField(pub RwSignal<Vec<Petal>>);

/// Leaderboard page root. Owns all page state and provides it via context;
/// the display components below it are stateless consumers.
#[component]
pub fn App() -> impl IntoView {
    let view: RwSignal<BoardView> = RwSignal::new(BoardView::Contributors);
    let active_filter: RwSignal<RankingFilter> = RwSignal::new(RankingFilter::Overall);
    let selected_ecosystem: RwSignal<String> = RwSignal::new(ALL_ECOSYSTEMS.to_string());
    let dropdown_open: RwSignal<bool> = RwSignal::new(false);
    let leaders: RwSignal<Vec<LeaderEntry>> = RwSignal::new(Vec::new());
    let loading: RwSignal<bool> = RwSignal::new(true);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loaded: RwSignal<bool> = RwSignal::new(false);
    let petal_field: RwSignal<Vec<Petal>> = RwSignal::new(Vec::new());
    let fetch_nonce: RwSignal<u64> = RwSignal::new(0);

    provide_context(view);
    provide_context(active_filter);
    provide_context(selected_ecosystem);
    provide_context(leaders);
    provide_context(PageLoaded(loaded));
    provide_context(EcosystemDropdownOpen(dropdown_open));
    provide_context(PetalField(petal_field));

    // Refetch whenever the view selector changes (including initial mount);
    // only the contributors view issues a request.
    Effect::new(move || {
        ranking::fetch_on_view_change(ranking::FetchContext {
            view,
            leaders,
            loading,
            error,
            fetch_nonce,
        });
    });

    // Petal cycle runs for the page's whole lifetime; the interval must not
    // outlive the page.
    Effect::new(move || {
        petals::start_cycle(petal_field);
        on_cleanup(petals::stop_cycle);
    });

    // One-shot flag flip enabling entrance animations; never reset.
    Effect::new(move || {
        if loaded.get_untracked() {
            return;
        }
        Timeout::new(100, move || loaded.set(true)).forget();
    });

    view! {
        <div style="position: relative; min-height: 100vh; background: #0c0e17; color: #e2e0d8; font-family: 'Inter', system-ui, sans-serif; padding: 24px 16px 48px;">
            <FallingPetals />
            <div style="position: relative; z-index: 1; max-width: 960px; margin: 0 auto; display: flex; flex-direction: column; gap: 24px;">
                <BoardToggle />
                <BoardHero>
                    {move || match view.get() {
                        BoardView::Contributors => {
                            if !leaders.get().is_empty() {
                                view! { <ContributorsPodium /> }.into_any()
                            } else if !loading.get() {
                                view! {
                                    <div style="text-align: center; padding: 32px 0; font-family: 'JetBrains Mono', monospace; font-size: 0.82rem; color: #5a5860;">
                                        "No contributors yet. Be the first to contribute!"
                                    </div>
                                }
                                    .into_any()
                            } else {
                                ().into_any()
                            }
                        }
                        BoardView::Projects => view! { <ProjectsPodium /> }.into_any(),
                    }}
                </BoardHero>
                <FiltersBar />
                {move || match view.get() {
                    BoardView::Contributors => {
                        if loading.get() {
                            view! {
                                <div class="status-pulse" style="text-align: center; padding: 48px 0; font-family: 'JetBrains Mono', monospace; font-size: 0.78rem; color: #3a3f5c; letter-spacing: 0.05em;">
                                    "Loading leaderboard..."
                                </div>
                            }
                                .into_any()
                        } else if let Some(message) = error.get() {
                            view! {
                                <div style="text-align: center; padding: 48px 0; font-family: 'JetBrains Mono', monospace; font-size: 0.78rem; color: #d96a5f;">
                                    {message}
                                </div>
                            }
                                .into_any()
                        } else {
                            view! { <ContributorsTable /> }.into_any()
                        }
                    }
                    BoardView::Projects => view! { <ProjectsTable /> }.into_any(),
                }}
            </div>
            <BoardStyles />
        </div>
    }
}
