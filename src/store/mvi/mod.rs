//! Unidirectional data-flow primitives shared by every store slice.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑          │                   │
//!    │          └──→ Effects ───────┤
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: plain data describing one slice of the application
//! - **Intent**: user actions or completed I/O
//! - **Reducer**: pure function from (State, Intent) to the next State
//!
//! Side effects never run inside a reducer; see [`crate::effects`].

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::StoreState;
