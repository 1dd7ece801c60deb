//! Firestore REST client.
//!
//! A thin, typed wrapper over the Firestore REST surface. Each collection
//! holds JSON-like documents; this crate translates between serde-able Rust
//! structs and Firestore's typed value encoding, and owns service-account
//! credential loading plus OAuth2 token exchange.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │ FirestoreClient  │  ← collection CRUD calls (list/get/upsert/delete)
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │  TokenProvider   │  ← JWT-bearer grant, cached access token
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │    document      │  ← struct ⇄ Firestore typed values
//! └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_config::FromEnv;
//! use firestore_client::{FirestoreClient, FirestoreConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FirestoreConfig::from_env()?;
//! let client = FirestoreClient::new(config)?;
//!
//! #[derive(serde::Serialize, serde::Deserialize)]
//! struct Doc { id: String, title: String }
//!
//! let docs: Vec<Doc> = client.list_all("tasks").await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod document;
pub mod error;

// Re-export commonly used types
pub use auth::TokenProvider;
pub use client::FirestoreClient;
pub use config::FirestoreConfig;
pub use error::{FirestoreError, FirestoreResult};
