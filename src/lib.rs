pub mod diff;
pub mod differ;
pub mod errors;
pub mod fuzz;
pub mod traits;
pub mod update;

pub use diff::ElementDiff;
pub use differ::{diff, diff_by};
pub use errors::Error;
pub use traits::{ItemUpdates, SequenceDiff};
pub use update::{update_section, Animation, UpdateConfig};
