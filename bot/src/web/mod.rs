//! Web server module for handling Discord interaction webhooks.
//!
//! This module provides the request path:
//! - Verifies the Ed25519 request signature over the raw body
//! - Dispatches the interaction to the matching command handler
//! - Replies within the same request/response cycle
//!
//! There is no queueing and no background work; every request is terminal.

pub mod handlers;
pub mod signature;

pub use handlers::{interactions, test, AppState, ErrorBody, TestResponse};
pub use signature::{parse_public_key, verify_signature, SIGNATURE_HEADER, TIMESTAMP_HEADER};
