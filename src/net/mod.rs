//! Network layer: wire DTOs and the REST client for the activities API.

pub mod api;
pub mod types;
