//! Index arithmetic of the hero slider, independent of any timer.

mod common;

use car_gallery::ui::gallery::{GalleryIntent, GalleryReducer, GalleryState};
use car_gallery::ui::mvi::Reducer;
use common::fleet;

fn active(n: usize, current: usize) -> GalleryState {
    GalleryState::Active {
        items: fleet(n),
        current,
    }
}

fn apply(state: GalleryState, intents: impl IntoIterator<Item = GalleryIntent>) -> GalleryState {
    intents.into_iter().fold(state, GalleryReducer::reduce)
}

#[test]
fn replace_on_empty_starts_at_zero() {
    let state = GalleryReducer::reduce(
        GalleryState::Empty,
        GalleryIntent::Replace { items: fleet(4) },
    );
    assert_eq!(state.current_index(), Some(0));
    assert_eq!(state.len(), 4);
}

#[test]
fn next_n_times_returns_to_start() {
    for n in 1..=6 {
        for start in 0..n {
            let intents = std::iter::repeat_with(|| GalleryIntent::Next).take(n);
            let state = apply(active(n, start), intents);
            assert_eq!(state.current_index(), Some(start), "n={} start={}", n, start);
        }
    }
}

#[test]
fn previous_undoes_next_from_every_index() {
    for n in 1..=6 {
        for start in 0..n {
            let state = apply(active(n, start), [GalleryIntent::Next, GalleryIntent::Previous]);
            assert_eq!(state.current_index(), Some(start));

            let state = apply(active(n, start), [GalleryIntent::Previous, GalleryIntent::Next]);
            assert_eq!(state.current_index(), Some(start));
        }
    }
}

#[test]
fn previous_from_zero_wraps_to_last() {
    let state = GalleryReducer::reduce(active(5, 0), GalleryIntent::Previous);
    assert_eq!(state.current_index(), Some(4));
}

#[test]
fn tick_and_next_share_the_same_step() {
    let ticked = GalleryReducer::reduce(active(3, 2), GalleryIntent::Tick);
    let nexted = GalleryReducer::reduce(active(3, 2), GalleryIntent::Next);
    assert_eq!(ticked, nexted);
    assert_eq!(ticked.current_index(), Some(0));
}

#[test]
fn single_item_steps_are_noops() {
    let state = apply(
        active(1, 0),
        [GalleryIntent::Next, GalleryIntent::Tick, GalleryIntent::Previous],
    );
    assert_eq!(state.current_index(), Some(0));
    assert_eq!(state.current().map(|v| v.id.as_str()), Some("car-0"));
}

#[test]
fn empty_state_ignores_navigation() {
    let state = apply(
        GalleryState::Empty,
        [GalleryIntent::Next, GalleryIntent::Previous, GalleryIntent::Tick],
    );
    assert_eq!(state, GalleryState::Empty);
    assert_eq!(state.current_index(), None);
}

#[test]
fn replace_with_shorter_list_clamps_index() {
    let state = GalleryReducer::reduce(active(5, 4), GalleryIntent::Replace { items: fleet(2) });
    assert_eq!(state.current_index(), Some(1));
    assert!(state.current().is_some());
}

#[test]
fn replace_with_longer_list_keeps_index() {
    let state = GalleryReducer::reduce(active(3, 2), GalleryIntent::Replace { items: fleet(7) });
    assert_eq!(state.current_index(), Some(2));
}

#[test]
fn replace_with_empty_list_invalidates_index() {
    let state = GalleryReducer::reduce(active(3, 1), GalleryIntent::Replace { items: Vec::new() });
    assert_eq!(state, GalleryState::Empty);
    assert!(state.current().is_none());
}

#[test]
fn index_stays_valid_through_mixed_sequence() {
    let mut state = GalleryState::Empty;
    let script = [
        GalleryIntent::Replace { items: fleet(4) },
        GalleryIntent::Previous,
        GalleryIntent::Tick,
        GalleryIntent::Previous,
        GalleryIntent::Replace { items: fleet(2) },
        GalleryIntent::Next,
        GalleryIntent::Replace { items: fleet(1) },
        GalleryIntent::Previous,
    ];
    for intent in script {
        state = GalleryReducer::reduce(state, intent);
        if let Some(i) = state.current_index() {
            assert!(i < state.len());
        }
    }
    assert_eq!(state.current_index(), Some(0));
}
