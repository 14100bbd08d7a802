//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level list operations.
//! - Keep UI/FFI layers decoupled from persistence details.

pub mod list_service;
