//! Scene traversal for Pfadfinder.
//!
//! The engine renders the scene a [`GameState`](pf_core::GameState) sits at
//! and applies one line of player input at a time. It never holds on to the
//! state between calls; the driving loop owns it.

/// Parsing of raw player input.
pub mod command;
/// Error types for traversal.
pub mod error;
/// Rendering and choice application.
pub mod traversal;
/// Read-only scene views.
pub mod view;

/// Re-export input types.
pub use command::{PlayerInput, parse_input};
/// Re-export error types.
pub use error::{EngineError, EngineResult};
/// Re-export traversal operations.
pub use traversal::{
    Transition, TurnResult, apply_choice, apply_choice_at, conclude, render_current,
};
/// Re-export view types.
pub use view::{ChoiceView, RenderView};
