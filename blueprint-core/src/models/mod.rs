//! Data models for blueprint analysis results
//!
//! Everything here is plain data: serializable, comparable and free of
//! references into parse trees, so reports outlive the snippet they describe.

pub mod metrics;
pub mod report;
pub mod security;

pub use metrics::{HalsteadMetrics, MetricsReport, UnitComplexity, UnitKind};
pub use report::{BlueprintReport, SummaryStatus};
pub use security::{Location, SecurityFinding, Severity};
