// Game module - owns the gameplay state and the per-frame update
//
// This module contains:
// - state.rs: GameState aggregate, construction and reset
// - update.rs: input actions and the fixed-order frame step
// - types.rs: Shared enums and helper structs
//
// Nothing in here touches SDL, so every rule can be exercised in tests
// without a window.

pub mod state;
pub mod types;
pub mod update;

pub use state::GameState;
pub use types::*;
