//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **supabase**: the hosted platform behind the listing. Its auth service
//!   verifies bearer tokens, its PostgREST API serves experience rows and its
//!   storage API signs image URLs.
//!
//! Adapters are thin translators between domain types and wire payloads.
//! They contain no business logic.

pub mod supabase;
