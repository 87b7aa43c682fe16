//! isisnb Transaction
//!
//! The four-phase configuration commit.
//!
//! Responsibilities:
//! - Diff the running and candidate trees into ordered per-node changes
//! - Drive each change through validate, prepare and apply
//! - Abort prepared nodes when a later prepare fails
//! - Settle multi-leaf fields once after their subtree was applied

mod buffer;
mod callbacks;
mod change;
mod error;
mod manager;
mod settle;

pub use buffer::ResourceBuffer;
pub use callbacks::{CallbackArgs, NodeCallbacks};
pub use change::{diff, Change};
pub use error::{ApplyFailure, NbError, NbResult, TransactionError, TransactionResult};
pub use manager::{CommitReport, Phase, TransactionManager};
pub use settle::finish_set;
