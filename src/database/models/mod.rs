pub mod task;
pub mod submission;
pub mod enriched_submission;
pub mod quality_review;

pub use task::Task;
pub use submission::Submission;
pub use enriched_submission::EnrichedSubmission;
pub use quality_review::QualityReview;
