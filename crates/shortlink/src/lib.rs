//! Short link handlers.
//!
//! Two request handlers sit on top of a [`KvStore`]:
//!
//! - [`fetch`] resolves a short key to its stored URL and answers with a
//!   `302 Found` redirect.
//! - [`shorten`] stores a URL under an alias or a generated short key,
//!   optionally protected by a password.
//!
//! Records are encoded with [`shortlink_record`]; query parameters are read
//! with [`shortlink_query`]. Transport is left to the caller: handlers take a
//! [`Request`] and return a [`Response`].
//!
//! # Example
//!
//! ```
//! use shortlink::{fetch, shorten, Config, MemoryStore, Request, StatusCode};
//!
//! let store = MemoryStore::new();
//! let config = Config::default();
//!
//! let created = shorten(
//!     &Request::get("https://h/shorten?url=https://example.com&alias=ex"),
//!     &store,
//!     &config,
//! );
//! assert_eq!(created.status, StatusCode::OK);
//! assert_eq!(created.body, "ex");
//!
//! let redirect = fetch(&Request::get("https://h/fetch?s=ex"), &store, &config);
//! assert_eq!(redirect.status, StatusCode::FOUND);
//! assert_eq!(redirect.header("Location"), Some("https://example.com"));
//! ```

mod config;
mod fetch;
mod http;
pub mod logging;
mod short_key;
mod shorten;
mod status;
mod store;

pub use config::{Config, ConfigError};
pub use fetch::{fetch, resolve};
pub use http::{Method, Request, Response, StatusCode};
pub use short_key::{as_characters, generate_key, ALPHABET_SIZE};
pub use shorten::{register, shorten};
pub use status::{status_for, ErrorKind};
pub use store::{KvError, KvStore, MemoryStore};
