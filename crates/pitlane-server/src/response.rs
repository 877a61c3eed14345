//! HTTP response mapping
//!
//! Error bodies are plain human-readable strings, not structured objects.
//! Absent entities and malformed identifiers share one not-found message.

use std::io::Cursor;

use pitlane_domain::error::Error;
use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::{self, Responder, Response};

/// Message used for every not-found outcome, malformed ids included
pub const NOT_FOUND_MESSAGE: &str = "Entry not found";

/// Message returned when a write arrives without a usable body
pub const EMPTY_BODY_MESSAGE: &str = "Empty request body";

/// Error response carrying a status and a plain-text message
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status to respond with
    pub status: Status,
    /// Plain-text body
    pub message: String,
}

impl ApiError {
    /// 400 with the given message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: Status::BadRequest,
            message: message.into(),
        }
    }

    /// 404 with the uniform not-found message
    pub fn not_found() -> Self {
        Self {
            status: Status::NotFound,
            message: NOT_FOUND_MESSAGE.to_string(),
        }
    }

    /// 400 for a missing or unreadable request body
    pub fn empty_body() -> Self {
        Self::bad_request(EMPTY_BODY_MESSAGE)
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound { .. } => Self::not_found(),
            Error::InvalidArgument { message } => Self::bad_request(message),
            _ => Self {
                status: Status::InternalServerError,
                message: "Internal server error".to_string(),
            },
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        Response::build()
            .status(self.status)
            .header(ContentType::Text)
            .sized_body(self.message.len(), Cursor::new(self.message))
            .ok()
    }
}
