//! Filter, search, group and export article/author tables.
//!
//! The [`data`] layer is UI-independent; [`state::AppState`] holds one
//! session's selections and results on top of a shared, read-only table.

pub mod config;
pub mod data;
pub mod state;
