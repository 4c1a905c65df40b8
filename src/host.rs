//! Host-environment boundary.
//!
//! The store talks to "the browser" through two object-safe traits:
//! [`HostPage`], the window-equivalent context that hands out a document
//! and the cookie capability flag, and [`Document`], the document-like
//! object owning the cookie string. Embedders integrating a real page
//! implement the pair; [`InMemoryPage`] is the bundled reference host.
//!
//! # The cookie string
//!
//! Reads produce the page-visible `"name=value; other=value"` form. A
//! write is an assignment in the platform sense: assigning
//! `"a=1; path=/"` appends or overwrites the single cookie `a` and never
//! replaces the rest of the jar.
//!
//! # Concurrency
//!
//! [`DocumentHandle`] is an `Arc<dyn Document>` and every trait method
//! takes `&self`, so documents manage their own interior synchronization.

use std::sync::Arc;

use anyhow::Result;

mod in_memory;

pub use in_memory::{InMemoryDocument, InMemoryPage};

/// A shared handle to a document.
pub type DocumentHandle = Arc<dyn Document>;

/// The page-level context a store is constructed from.
pub trait HostPage: Send + Sync {
    /// Returns the page's document, if the context has one.
    fn document(&self) -> Option<DocumentHandle>;

    /// Whether the host allows cookie storage at all.
    fn cookies_enabled(&self) -> bool;
}

/// The document-like object carrying the cookie string.
pub trait Document: Send + Sync {
    /// Returns the current cookie string: `name=value` segments joined by
    /// `"; "`, empty when there are no cookies.
    fn cookie_string(&self) -> String;

    /// Assigns one serialized cookie (`name=value` plus attributes),
    /// appending or overwriting that single cookie.
    ///
    /// Hosts may reject an assignment, for example when cookie access is
    /// denied for the document; the store logs and swallows the failure.
    fn assign_cookie(&self, serialized: &str) -> Result<()>;
}
