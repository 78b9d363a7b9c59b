// SPDX-License-Identifier: GPL-3.0-only
//! Keeps a local list of posts in sync with a Firebase-style REST collection.
pub mod config;
pub mod logging;
pub mod store;
pub mod sync;
pub mod ui;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_helpers;
