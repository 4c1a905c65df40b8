//! Client-side cookie store for embedded page contexts.
//!
//! This crate is the `document.cookie` convenience layer of an embeddable
//! page environment: read, write and delete cookies through the host
//! document's single cookie string, with configurable defaults for
//! expiry, path, domain, value encoding and a debug-log mode.
//!
//! # Concepts
//!
//! - [`CookieStore`]: the façade. `get`, `get_all`, `set` and `unset`,
//!   plus `configure` and `reset_options` for the store-wide defaults.
//! - [`HostPage`] / [`Document`]: the host boundary. Embedders with a
//!   real page implement these two traits; nothing else in the crate
//!   touches the platform directly.
//! - [`InMemoryPage`]: the bundled reference host, emulating browser
//!   cookie-string semantics (overwrite by identity, expiry handling,
//!   sandboxed documents).
//!
//! # Example
//!
//! ```
//! use document_cookies::{CookieStore, DefaultsUpdate, InMemoryPage};
//!
//! let page = InMemoryPage::new();
//! let mut store = CookieStore::new(&page, None).expect("host supports cookies");
//!
//! store.configure(DefaultsUpdate {
//!     path: Some("/app".into()),
//!     ..Default::default()
//! });
//!
//! store.set("session", "abc123", None);
//! assert_eq!(store.get("session").as_deref(), Some("abc123"));
//!
//! assert!(store.unset("session"));
//! assert!(store.get("session").is_none());
//! ```
//!
//! # What this crate is not
//!
//! No networking, no `Set-Cookie` response handling and no persistence of
//! its own: the host document's cookie store is the single source of
//! truth, and every operation is one synchronous exchange with it.

pub mod config;
pub mod cookie;
pub mod errors;
pub mod expiry;
pub mod host;
pub mod options;
pub mod store;

pub use config::{CookieDefaults, DefaultsUpdate};
pub use cookie::Cookie;
pub use errors::CookieError;
pub use expiry::Expiry;
pub use host::{Document, DocumentHandle, HostPage, InMemoryDocument, InMemoryPage};
pub use options::CookieOptions;
pub use store::CookieStore;
