//! State for the hero slider.

use crate::model::Vehicle;
use crate::ui::mvi::UiState;

/// Slider state machine.
///
/// `current` is always a valid index into `items`; an empty list is
/// represented only by `Empty`, which has no displayable index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GalleryState {
    #[default]
    Empty,
    Active {
        items: Vec<Vehicle>,
        current: usize,
    },
}

impl UiState for GalleryState {}

impl GalleryState {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    pub fn items(&self) -> &[Vehicle] {
        match self {
            Self::Empty => &[],
            Self::Active { items, .. } => items,
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn current_index(&self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::Active { current, .. } => Some(*current),
        }
    }

    /// The vehicle the slider shows right now.
    pub fn current(&self) -> Option<&Vehicle> {
        match self {
            Self::Empty => None,
            Self::Active { items, current } => items.get(*current),
        }
    }
}
