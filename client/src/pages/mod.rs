//! Route-level page components.

pub mod index;
