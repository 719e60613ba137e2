//! Browser networking.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two fire-and-forget GETs, both with a safe fallback. Nothing here retries
//! and nothing here is fatal.

pub mod api;
