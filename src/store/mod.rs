// SPDX-License-Identifier: GPL-3.0-only
pub mod error;
pub mod models;
pub mod sync_store;

pub use error::{SyncError, WriteOp};
pub use models::{NewPost, Post};
pub use sync_store::SyncStore;
