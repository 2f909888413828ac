//! BodyLover HTTP module
//!
//! Provides the preconfigured API client used by the web shell together with
//! the wire types exchanged with the backend under `/api`.

pub mod client;
pub mod types;

pub use client::{ApiClient, ApiClientBuilder, ClientConfig, ClientError, HttpResponse};
pub use types::{ApiResponse, LoginRequest, RegisterRequest, User, UserMode};
