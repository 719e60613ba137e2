//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are grouped by the card they draw. Stateful cards own their
//! signals and timer loops locally; presentational pieces take props only.

pub mod decentralization_card;
pub mod globe_panel;
pub mod header;
pub mod location_details;
pub mod metrics_grid;
pub mod stat_card;
pub mod transaction_cards;
