//! Unified UI contracts.
//!
//! Groups the output-surface contracts and the theme model under one
//! namespace so the session depends on `ui` instead of concrete terminals.

pub mod render;
pub mod theme;
