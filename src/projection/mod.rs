//! Projection engine for monthly SIP contributions

mod engine;
mod result;

pub use engine::{
    project, ContributionTiming, ProjectionConfig, ProjectionEngine, ZeroRateHandling,
    MONTHS_PER_YEAR,
};
pub use result::ProjectionResult;
