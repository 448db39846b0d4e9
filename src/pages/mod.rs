//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! A page owns orchestration (building the controller and spawning its
//! handlers) and delegates rendering details to `components`.

pub mod activities;
