//! Request middleware.
//!
//! Purpose: cross-cutting request lifecycle concerns. Currently request
//! correlation and the request-scoped tracing span.

pub mod trace;

pub use trace::Trace;
