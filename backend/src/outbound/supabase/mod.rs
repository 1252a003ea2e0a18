//! Supabase outbound adapters.
//!
//! All three adapters share one [`SupabaseClient`], so they reuse a single
//! connection pool and the same per-request timeout.

mod client;
mod dto;
mod identity;
mod repository;
mod storage;

pub use client::{SupabaseClient, SupabaseClientError};
pub use identity::SupabaseIdentityProvider;
pub use repository::SupabaseExperienceRepository;
pub use storage::SupabaseImageSigner;
