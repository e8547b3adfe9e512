//! # Approvedeny SDK
//!
//! Client SDK for the Approvedeny approval/denial decisioning API.
//!
//! This SDK provides:
//! - An authenticated HTTP client for the three remote operations:
//!   creating a check request, fetching a check request, and fetching a
//!   check request's response
//! - Local HMAC-SHA256 verification of inbound webhook signatures
//!
//! # Examples
//!
//! ## Fetching a check request
//!
//! ```rust,no_run
//! use approvedeny_sdk::{Client, CheckRequest};
//!
//! # async fn example() -> Result<(), approvedeny_sdk::Error> {
//! let client = Client::new("your_api_key")?;
//!
//! let response = client.get_check_request("check_request_id").await?;
//!
//! // `data` stays opaque until the caller narrows it.
//! let check_request: CheckRequest = response.data_as()?;
//! println!("Check request {} is {:?}", check_request.id, check_request.response);
//! # Ok(())
//! # }
//! ```
//!
//! ## Creating a check request
//!
//! ```rust,no_run
//! use approvedeny_sdk::{Client, CreateCheckRequestPayload};
//! use std::collections::HashMap;
//!
//! # async fn example() -> Result<(), approvedeny_sdk::Error> {
//! let client = Client::new("your_api_key")?;
//!
//! let payload = CreateCheckRequestPayload {
//!     description: "Delete production database".to_string(),
//!     metadata: HashMap::from([
//!         ("requestedBy".to_string(), serde_json::json!("alice")),
//!     ]),
//! };
//!
//! let response = client.create_check_request("check_id", &payload).await?;
//! println!("{}", response.message);
//! # Ok(())
//! # }
//! ```
//!
//! ## Verifying a webhook signature
//!
//! ```rust
//! use approvedeny_sdk::{is_valid_webhook_signature, WebhookPayload};
//! use std::collections::HashMap;
//!
//! // Extracted from the inbound webhook request by the caller's own server.
//! let signature = "signature_header_value";
//! let payload = WebhookPayload {
//!     event: "response.created".to_string(),
//!     data: HashMap::new(),
//! };
//!
//! if is_valid_webhook_signature("webhook_secret", signature, &payload) {
//!     // process the event
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;
pub mod webhook;

// Re-export commonly used types at crate root for convenience
pub use client::{Client, ClientConfig};
pub use error::{Error, Result};
pub use types::{
    CheckRequest, CheckRequestResponse, CreateCheckRequestPayload, ErrorResponse,
    SuccessResponse, WebhookPayload,
};
pub use webhook::is_valid_webhook_signature;
