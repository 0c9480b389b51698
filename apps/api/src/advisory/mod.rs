// Advisory output for the editor: per-panel guidance and a completeness report.
// Never blocks or rewrites an edit.

pub mod completeness;
pub mod tips;

pub use completeness::{compute_completeness_report, CompletenessReport};
pub use tips::{all_guides, SectionGuide};
