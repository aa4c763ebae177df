mod render;
mod summary;
pub mod views;

pub use render::{render_artifact, render_console};
pub use summary::CensusReport;
