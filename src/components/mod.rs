//! Presentational components.

pub mod hud;
pub mod skill_tree;
