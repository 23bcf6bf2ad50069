//! Model-View-Intent (MVI) architecture primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

/// Run `$reducer` on the state stored in `$slot` and write the result back.
#[macro_export]
macro_rules! dispatch_mvi {
    ($slot:expr, $reducer:ty, $intent:expr) => {
        $slot = <$reducer as $crate::ui::mvi::Reducer>::reduce(std::mem::take(&mut $slot), $intent);
    };
}
