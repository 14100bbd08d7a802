//! Flutter-facing FFI crate for the to-do list core.

pub mod api;
