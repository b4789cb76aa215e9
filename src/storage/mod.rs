//! Storage layer
//!
//! Configuration files (TOML) and session persistence. The session
//! record lives in the OS keyring as a single serialized document.

use crate::error::StorageError;

pub mod config;
pub mod session;

type Result<T> = std::result::Result<T, StorageError>;
