//! Small pure helpers shared by components.

pub mod escape;
