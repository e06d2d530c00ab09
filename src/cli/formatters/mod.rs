//! Formatters for portfolio views

pub mod project_card;
pub mod skill_meter;

pub use project_card::ProjectCard;
pub use skill_meter::{GroupedSkillsView, SkillMeterList};
