//! Command modules for the swiftctl CLI.
//!
//! Each submodule handles one command category:
//!
//! - `account_cmd`: account inspection (stat)
//! - `container_cmd`: container listing, creation and deletion
//! - `object_cmd`: object upload, download, metadata and deletion

pub mod account_cmd;
pub mod container_cmd;
pub mod object_cmd;

#[cfg(test)]
pub mod test_support;
