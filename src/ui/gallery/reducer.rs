use crate::ui::gallery::intent::GalleryIntent;
use crate::ui::gallery::state::GalleryState;
use crate::ui::mvi::Reducer;

pub struct GalleryReducer;

/// Forward step shared by ticks and manual "next".
pub fn next_index(current: usize, len: usize) -> usize {
    (current + 1) % len
}

/// Backward step. Adds `len` first so index 0 wraps to the last item.
pub fn previous_index(current: usize, len: usize) -> usize {
    (current + len - 1) % len
}

impl Reducer for GalleryReducer {
    type State = GalleryState;
    type Intent = GalleryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GalleryIntent::Replace { items } => {
                if items.is_empty() {
                    return GalleryState::Empty;
                }
                // Keep the position when it is still valid, otherwise clamp to the last item.
                let current = match state {
                    GalleryState::Active { current, .. } => current.min(items.len() - 1),
                    GalleryState::Empty => 0,
                };
                GalleryState::Active { items, current }
            }
            GalleryIntent::Tick | GalleryIntent::Next => match state {
                GalleryState::Active { items, current } => {
                    let current = next_index(current, items.len());
                    GalleryState::Active { items, current }
                }
                GalleryState::Empty => GalleryState::Empty,
            },
            GalleryIntent::Previous => match state {
                GalleryState::Active { items, current } => {
                    let current = previous_index(current, items.len());
                    GalleryState::Active { items, current }
                }
                GalleryState::Empty => GalleryState::Empty,
            },
        }
    }
}
