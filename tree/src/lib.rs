//! isisnb Configuration Tree
//!
//! This crate provides the configuration data store the transaction
//! engine reads from:
//! - Data paths in xpath syntax with keyed list entries
//! - Config trees with ancestor auto-creation and subtree deletion
//! - Typed node accessors with relative path resolution
//! - The bound-entity side table linking tree nodes to runtime objects

mod entry;
mod error;
mod path;
mod tree;

pub use entry::*;
pub use error::*;
pub use path::*;
pub use tree::*;
