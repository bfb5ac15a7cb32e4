//! `sl-client` — typed HTTP boundary for the support service.
//!
//! Provides the [`ChatService`] trait that abstracts over the backend API,
//! the production REST implementation ([`RestChatClient`]), and wire DTOs
//! with validated/defaulted optional fields so downstream logic never
//! branches on missing JSON keys.
//!
//! Two endpoints are consumed:
//!
//! | Endpoint                        | Purpose                          |
//! |---------------------------------|----------------------------------|
//! | `POST /api/chat`                | One request/response exchange    |
//! | `GET /api/analytics/{user_id}`  | Aggregated interaction metrics   |

pub mod rest;
pub mod service;
pub mod types;

pub use rest::RestChatClient;
pub use service::ChatService;
pub use types::{AnalyticsReport, ChatRequest, ChatReply};
