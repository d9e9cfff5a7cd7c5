//! # Bankcode Client
//!
//! An async Rust client library for the bankcode-jp.com v3 REST API.
//!
//! ## Features
//!
//! - Typed bank records for the `/banks/{code}` endpoint
//! - API-key authentication via query parameter
//! - Built-in rate limiting (one request per 3 seconds)
//! - Server-side field selection through the `fields` parameter
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bankcode_api_client::{BankcodeClient, GetParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BankcodeClient::builder().api_key("my_api_key").build()?;
//!     let bank = client.get_bank("0001", &GetParams::default()).await?;
//!     println!("Bank: {:?}", bank);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod rate_limit;
pub mod types;

// Re-export commonly used types at crate root
pub use client::{BankcodeClient, BankcodeClientBuilder};
pub use error::BankcodeError;
pub use types::{Bank, Banks, GetParams};

/// Result type alias using BankcodeError
pub type Result<T> = std::result::Result<T, BankcodeError>;
