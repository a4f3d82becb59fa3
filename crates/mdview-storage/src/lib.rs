//! Storage abstraction for the mdview documentation viewer.
//!
//! The viewer core never touches the filesystem directly. It consumes
//! the [`Storage`] trait, which answers two questions: which Markdown
//! files exist in the source location, and what is the raw text of one
//! of them. [`FsStorage`] is the filesystem backend; [`MockStorage`]
//! (behind the `mock` feature) backs unit tests.

mod fs;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod storage;

pub use fs::FsStorage;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockStorage;
pub use storage::{ScannedFile, Storage, StorageError};
