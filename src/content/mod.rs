//! Static seed data: the configuration/content module the stores are
//! initialized from. Nothing here mutates; the stores own session state.

mod inventory;
mod profile;
mod projects;
mod skills;

pub use inventory::{equipment_slots, interest_items, skill_items};
pub use profile::{experience_entries, profile};
pub use projects::projects;
pub use skills::{MAX_POINTS, STARTING_POINTS, skill_seeds};
