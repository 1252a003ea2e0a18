//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::ports::ExperiencesQuery;
use crate::inbound::http::cors::cors_headers;
use crate::inbound::http::experiences::configure;
use crate::inbound::http::state::HttpState;

/// Build the listing app around `query`, wrapped the way the server wraps it.
pub fn listing_app(
    query: impl ExperiencesQuery + 'static,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(Arc::new(query))))
        .wrap(cors_headers())
        .wrap(Trace)
        .configure(configure)
}
