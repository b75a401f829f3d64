//! Core logic layer
//!
//! Holds host screen state, layout and input routing.
//! NO imports from frontend/ or rendering code.
//! Core updates state, frontends read and render.

pub mod app_core;
pub mod input_router;
pub mod layout;

pub use app_core::AppCore;
