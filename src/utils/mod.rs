//! Filesystem and collection helpers
//!
//! # Modules
//!
//! - [`fs`] - Path existence and directory emptiness predicates
//! - [`slice`] - Linear search and copy-on-remove helpers

pub mod fs;
pub mod slice;

pub use fs::{is_empty_directory, path_exists, read_file};
pub use slice::{remove_at, string_found_in_array};
