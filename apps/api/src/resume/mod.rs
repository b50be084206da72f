// Resume-vs-job-description fit scoring and keyword gap analysis.

pub mod handlers;
pub mod matcher;
