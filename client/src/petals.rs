use std::cell::RefCell;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::app::PetalField;

pub const PETAL_COUNT: usize = 30;
const REGEN_INTERVAL_MS: i32 = 15_000;

/// One decorative falling petal. No identity persists across regenerations;
/// the whole set is replaced every cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Petal {
    pub id: u32,
    /// Horizontal start position, percent of viewport width in [0, 100).
    pub left: f64,
    /// Animation start delay, seconds in [0, 5).
    pub delay: f64,
    /// Fall duration, seconds in [8, 14).
    pub duration: f64,
    /// Initial rotation, degrees in [0, 360).
    pub rotation: f64,
    /// Scale factor in [0.6, 1.4).
    pub size: f64,
}

/// Generate `count` petals from a uniform-[0,1) source. Pure in the source:
/// the same sample sequence yields the same petals.
pub fn generate_petals(count: usize, mut rng: impl FnMut() -> f64) -> Vec<Petal> {
    (0..count)
        .map(|i| Petal {
            id: i as u32,
            left: rng() * 100.0,
            delay: rng() * 5.0,
            duration: 8.0 + rng() * 6.0,
            rotation: rng() * 360.0,
            size: 0.6 + rng() * 0.8,
        })
        .collect()
}

struct PetalIntervalBinding {
    window: web_sys::Window,
    interval_id: i32,
    _callback: Closure<dyn Fn()>,
}

thread_local! {
    static PETAL_INTERVAL_BINDING: RefCell<Option<PetalIntervalBinding>> = const { RefCell::new(None) };
}

/// Seed the petal set and start the 15-second regeneration cycle.
/// Re-entry replaces the previous interval binding.
pub fn start_cycle(petals: RwSignal<Vec<Petal>>) {
    stop_cycle();

    petals.set(generate_petals(PETAL_COUNT, js_sys::Math::random));

    let Some(window) = web_sys::window() else {
        return;
    };
    let cb = Closure::<dyn Fn()>::new(move || {
        petals.set(generate_petals(PETAL_COUNT, js_sys::Math::random));
    });
    let Ok(interval_id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        REGEN_INTERVAL_MS,
    ) else {
        return;
    };
    PETAL_INTERVAL_BINDING.with(|slot| {
        *slot.borrow_mut() = Some(PetalIntervalBinding {
            window: window.clone(),
            interval_id,
            _callback: cb,
        });
    });
}

/// Cancel the regeneration cycle. Safe to call when no cycle is running.
pub fn stop_cycle() {
    PETAL_INTERVAL_BINDING.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            old.window.clear_interval_with_handle(old.interval_id);
        }
    });
}

/// Full-page decorative layer rendering the current petal set. Petals are
/// keyless on purpose: each regeneration rebuilds the layer wholesale.
#[component]
pub fn FallingPetals() -> impl IntoView {
    let PetalField(petals) = expect_context();

    view! {
        <div style="position: fixed; inset: 0; overflow: hidden; pointer-events: none; z-index: 0;" aria-hidden="true">
            {move || {
                petals
                    .get()
                    .into_iter()
                    .map(|petal| {
                        let style = format!(
                            "position: absolute; top: -24px; left: {:.4}%; font-size: 1rem; color: rgba(201,152,58,0.55); animation: petal-fall {:.3}s linear {:.3}s infinite; transform: rotate({:.2}deg) scale({:.3}); will-change: transform, top;",
                            petal.left, petal.duration, petal.delay, petal.rotation, petal.size,
                        );
                        view! { <span class="petal" style=style>{"\u{1F342}"}</span> }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{PETAL_COUNT, generate_petals};

    /// Deterministic uniform source cycling through fixed samples.
    fn cycling(samples: &[f64]) -> impl FnMut() -> f64 + '_ {
        let mut i = 0;
        move || {
            let v = samples[i % samples.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn generates_exactly_thirty_petals() {
        let petals = generate_petals(PETAL_COUNT, cycling(&[0.5]));
        assert_eq!(petals.len(), 30);
    }

    #[test]
    fn lower_bound_samples_map_to_range_floors() {
        let petals = generate_petals(1, cycling(&[0.0]));
        let p = &petals[0];
        assert_eq!(p.left, 0.0);
        assert_eq!(p.delay, 0.0);
        assert_eq!(p.duration, 8.0);
        assert_eq!(p.rotation, 0.0);
        assert_eq!(p.size, 0.6);
    }

    #[test]
    fn all_fields_stay_inside_documented_ranges() {
        let samples = [0.0, 0.12, 0.37, 0.5, 0.73, 0.92, 0.999_999];
        let petals = generate_petals(PETAL_COUNT, cycling(&samples));
        for p in &petals {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..5.0).contains(&p.delay));
            assert!((8.0..14.0).contains(&p.duration));
            assert!((0.0..360.0).contains(&p.rotation));
            assert!((0.6..1.4).contains(&p.size));
        }
    }

    #[test]
    fn ids_are_sequential_from_zero() {
        let petals = generate_petals(5, cycling(&[0.3]));
        assert_eq!(petals.iter().map(|p| p.id).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn same_sample_sequence_yields_same_petals() {
        let samples = [0.11, 0.42, 0.87, 0.05, 0.66];
        let a = generate_petals(PETAL_COUNT, cycling(&samples));
        let b = generate_petals(PETAL_COUNT, cycling(&samples));
        assert_eq!(a, b);
    }

    #[test]
    fn different_samples_yield_different_parameters() {
        let a = generate_petals(PETAL_COUNT, cycling(&[0.2, 0.4, 0.6]));
        let b = generate_petals(PETAL_COUNT, cycling(&[0.9, 0.1, 0.5]));
        assert_ne!(a, b);
    }
}
