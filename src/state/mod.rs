//! Client-side state.
//!
//! DESIGN
//! ======
//! The page renders a single `BoardState` held in an `RwSignal`. Handlers
//! never patch the roster incrementally: every write is followed by a full
//! reload that replaces it.

pub mod board;
