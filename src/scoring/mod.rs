pub mod engine;
pub mod messages;

pub use engine::{assess, classify, score, Assessment, Position, Quadrant};
