//! Business logic: mutations, validation, statistics and backups.

pub mod backup;
pub mod merge;
pub mod session;
pub mod stats;
pub mod window;

pub use merge::{Mutation, Submission, Warning};
pub use session::{Applied, Session};
pub use stats::Statistics;
pub use window::SubmitWindow;
