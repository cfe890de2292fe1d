//! Stock implementations of [`catwatch_common::ports::repository::SecurityRepository`].
//!
//! * [`InMemoryRepository`]: nothing survives the process.
//! * [`JsonFileRepository`]: keeps a JSON snapshot on disk, rewritten after
//!   every write. Last write wins; there is no locking between processes.

mod file;
mod memory;

pub use file::JsonFileRepository;
pub use memory::InMemoryRepository;
