//! Linoleic acid food search: load a nutrition table, filter it by category,
//! numeric ranges and keyword, and export the matching rows.

pub mod config;
pub mod data;
pub mod state;
