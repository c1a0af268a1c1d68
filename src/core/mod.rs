pub mod allocator;
pub mod eligibility;
pub mod normalizer;
pub mod pipeline;
pub mod report;
pub mod streak;

pub use pipeline::{Pipeline, PipelineRun, RunStatus, Settings};
