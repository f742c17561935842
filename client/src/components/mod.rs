//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render catalog chrome and entry details; pages own routing
//! and data loading.

pub mod layout;
pub mod navbar;
pub mod pokemon_card;
pub mod pokemon_detail;
