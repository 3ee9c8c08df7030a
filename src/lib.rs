//! Library Manager client SDK
//!
//! Typed async client for the Library Manager REST backend: books, members,
//! genres, staff accounts, the borrow/return workflow and its canned
//! reports. Each REST resource is wrapped by one service; the borrow
//! lifecycle checks its preconditions client-side and treats the backend as
//! the authority for copy-count consistency.
//!
//! ```no_run
//! use std::sync::Arc;
//! use libman_client::{ApiClient, ClientConfig, MemorySessionStore, Services};
//!
//! # async fn run() -> libman_client::ClientResult<()> {
//! let config = ClientConfig::default();
//! let session = Arc::new(MemorySessionStore::new());
//! let client = ApiClient::new(&config.api, session)?;
//! let services = Services::new(client, &config);
//!
//! services.auth.login("admin@library.com", "secret").await?;
//! let books = services.books.list().await?;
//! # let _ = books;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod dates;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod session;
pub mod validation;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use services::Services;
pub use session::{MemorySessionStore, Session, SessionStore};
