//! Screen-level state for the experience list.

use tracing::error;

use crate::client::ExperienceSource;
use crate::error::FetchError;
use crate::experience::Experience;

/// Placeholder text for a finished load that produced no experiences.
pub const EMPTY_STATE_MESSAGE: &str = "No experiences loaded";

/// Refreshable list of experiences backed by an [`ExperienceSource`].
///
/// A successful refresh replaces the list wholesale. A failed refresh keeps
/// the previous list and records a message for the person using the app.
#[derive(Debug)]
pub struct ExperienceFeed<S> {
    source: S,
    experiences: Vec<Experience>,
    loading: bool,
    last_error: Option<String>,
}

impl<S> ExperienceFeed<S> {
    /// Start with an empty list.
    pub const fn new(source: S) -> Self {
        Self {
            source,
            experiences: Vec::new(),
            loading: false,
            last_error: None,
        }
    }

    /// Experiences from the last successful refresh.
    #[must_use]
    pub fn experiences(&self) -> &[Experience] {
        &self.experiences
    }

    /// Whether a refresh is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message from the last failed refresh, cleared by the next success.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Placeholder to show instead of the list, if any.
    #[must_use]
    pub fn empty_state_message(&self) -> Option<&'static str> {
        (!self.loading && self.experiences.is_empty()).then_some(EMPTY_STATE_MESSAGE)
    }

    /// Mark a refresh as started and return the token to fetch with.
    ///
    /// Returns `None` and leaves the feed untouched when there is no usable
    /// token. Callers that drive the fetch themselves pair this with
    /// [`ExperienceFeed::finish_refresh`]; the loading flag stays set in
    /// between.
    pub fn begin_refresh<'t>(&mut self, access_token: Option<&'t str>) -> Option<&'t str> {
        let token = access_token.filter(|token| !token.trim().is_empty())?;
        self.loading = true;
        Some(token)
    }

    /// Apply the outcome of a fetch started with
    /// [`ExperienceFeed::begin_refresh`] and clear the loading flag.
    pub fn finish_refresh(&mut self, result: Result<Vec<Experience>, FetchError>) {
        self.loading = false;
        match result {
            Ok(experiences) => {
                self.experiences = experiences;
                self.last_error = None;
            }
            Err(err) => {
                error!(error = %err, "failed to refresh experiences");
                self.last_error = Some(err.user_message());
            }
        }
    }
}

impl<S: ExperienceSource> ExperienceFeed<S> {
    /// Reload the list using `access_token`.
    ///
    /// Does nothing without a token, so a signed-out screen never calls the
    /// endpoint.
    pub async fn refresh(&mut self, access_token: Option<&str>) {
        let Some(token) = self.begin_refresh(access_token) else {
            return;
        };
        let result = self.source.fetch_experiences(token).await;
        self.finish_refresh(result);
    }
}
