//! Typed client for the experiences listing endpoint.
//!
//! The crate mirrors what a signed-in app screen needs: fetch the listing
//! with the session's access token, turn failures into short messages that
//! can be shown to a person, and keep the last good list on screen until a
//! refresh replaces it.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use experiences_client::{ExperienceFeed, ExperiencesClient};
//! use url::Url;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let url = Url::parse("https://abc.supabase.co/functions/v1/get-experiences")?;
//! let client = ExperiencesClient::new(url, Duration::from_secs(10))?;
//! let mut feed = ExperienceFeed::new(client);
//!
//! feed.refresh(Some("access-token")).await;
//! match feed.empty_state_message() {
//!     Some(message) => println!("{message}"),
//!     None => println!("{} experiences", feed.experiences().len()),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod experience;
mod feed;

pub use client::{ExperienceSource, ExperiencesClient};
pub use error::FetchError;
pub use experience::Experience;
pub use feed::{EMPTY_STATE_MESSAGE, ExperienceFeed};
