mod component;
mod render;
mod state;
mod types;

pub use component::SkillTreeCanvas;
pub use types::{NodeStatus, TreeEdge, TreeNode};
