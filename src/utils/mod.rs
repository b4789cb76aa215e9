//! Shared utilities used across the CLI and core layers.

/// Retry policy for API operations
pub mod retry;

/// Input validation for auth and booking forms
pub mod validation;

/// Text helpers for table rendering
pub mod text;
