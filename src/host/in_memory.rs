//! In-memory host: a page and document pair emulating browser cookie
//! semantics.
//!
//! [`InMemoryDocument`] reproduces what a real document does with its
//! cookie string: an assignment parses `name=value` plus attributes,
//! overwrites by `(name, domain, path)` identity, deletes when `expires`
//! lies in the past, and reads render the live cookies back as
//! `"; "`-joined pairs. That is enough to exercise a
//! [`CookieStore`](crate::CookieStore) without a browser.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};
use time::OffsetDateTime;

use crate::expiry::parse_cookie_date;
use crate::host::{Document, DocumentHandle, HostPage};

/// An in-memory page context. [`InMemoryPage::new`] has cookies enabled
/// and a fresh document; the other constructors produce the degenerate
/// hosts a store refuses to build on.
pub struct InMemoryPage {
    /// The page's document; `None` emulates a document-less context.
    pub document: Option<Arc<InMemoryDocument>>,
    cookies_enabled: bool,
}

impl InMemoryPage {
    /// A page with cookies enabled and an empty document.
    pub fn new() -> Self {
        Self {
            document: Some(Arc::new(InMemoryDocument::new())),
            cookies_enabled: true,
        }
    }

    /// A page whose user agent has cookie storage switched off.
    pub fn cookies_disabled() -> Self {
        Self {
            document: Some(Arc::new(InMemoryDocument::new())),
            cookies_enabled: false,
        }
    }

    /// A context with no document at all.
    pub fn without_document() -> Self {
        Self {
            document: None,
            cookies_enabled: true,
        }
    }
}

impl Default for InMemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl HostPage for InMemoryPage {
    fn document(&self) -> Option<DocumentHandle> {
        self.document
            .clone()
            .map(|document| document as DocumentHandle)
    }

    fn cookies_enabled(&self) -> bool {
        self.cookies_enabled
    }
}

/// One cookie as the emulated document stores it. Values are kept exactly
/// as assigned; decoding is the reader's business.
#[derive(Debug, Clone)]
struct StoredCookie {
    name: String,
    value: String,
    path: String,
    domain: String,
    expires_at: Option<OffsetDateTime>,
}

impl StoredCookie {
    fn same_identity(&self, other: &StoredCookie) -> bool {
        self.name == other.name && self.domain == other.domain && self.path == other.path
    }

    fn expired(&self, now: OffsetDateTime) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    fn render(&self, out: &mut String) {
        if self.name.is_empty() {
            out.push_str(&self.value);
        } else {
            out.push_str(&self.name);
            out.push('=');
            out.push_str(&self.value);
        }
    }
}

/// In-memory document emulating the platform cookie store.
pub struct InMemoryDocument {
    /// Cookies in insertion order; overwrites keep their position.
    jar: Mutex<Vec<StoredCookie>>,
    /// Sandboxed documents deny cookie access: reads are empty, writes
    /// fail.
    sandboxed: AtomicBool,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self {
            jar: Mutex::new(Vec::new()),
            sandboxed: AtomicBool::new(false),
        }
    }

    /// Toggles sandboxed mode, the document without cookie access.
    pub fn set_sandboxed(&self, sandboxed: bool) {
        self.sandboxed.store(sandboxed, Ordering::Relaxed);
    }

    /// Number of live cookies.
    pub fn len(&self) -> usize {
        let now = OffsetDateTime::now_utc();
        let mut jar = self.jar.lock().unwrap();
        jar.retain(|cookie| !cookie.expired(now));
        jar.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every cookie.
    pub fn clear(&self) {
        self.jar.lock().unwrap().clear();
    }
}

impl Default for InMemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for InMemoryDocument {
    fn cookie_string(&self) -> String {
        if self.sandboxed.load(Ordering::Relaxed) {
            return String::new();
        }

        let now = OffsetDateTime::now_utc();
        let mut jar = self.jar.lock().unwrap();
        jar.retain(|cookie| !cookie.expired(now));

        let mut out = String::new();
        for cookie in jar.iter() {
            if !out.is_empty() {
                out.push_str("; ");
            }
            cookie.render(&mut out);
        }
        out
    }

    fn assign_cookie(&self, serialized: &str) -> Result<()> {
        if self.sandboxed.load(Ordering::Relaxed) {
            bail!("cookie access is denied for a sandboxed document");
        }

        let incoming = parse_assignment(serialized);
        let now = OffsetDateTime::now_utc();
        let mut jar = self.jar.lock().unwrap();

        // A past expiry deletes the matching cookie instead of storing it.
        if incoming.expired(now) {
            jar.retain(|cookie| !cookie.same_identity(&incoming));
            return Ok(());
        }

        if let Some(existing) = jar
            .iter_mut()
            .find(|cookie| cookie.same_identity(&incoming))
        {
            // Same identity overwrites in place, keeping the position.
            *existing = incoming;
        } else {
            jar.push(incoming);
        }
        Ok(())
    }
}

/// Parses one assignment string. The first segment is the `name=value`
/// pair, the rest are case-insensitive attributes; unknown attributes are
/// ignored, as browsers do.
fn parse_assignment(serialized: &str) -> StoredCookie {
    let mut segments = serialized.split(';');

    let pair = segments.next().unwrap_or("").trim();
    let (name, value) = match pair.split_once('=') {
        Some((name, value)) => (name.trim(), value),
        None => ("", pair),
    };

    let mut cookie = StoredCookie {
        name: name.to_string(),
        value: value.to_string(),
        path: String::new(),
        domain: String::new(),
        expires_at: None,
    };

    // Flag attributes such as `secure` carry no `=` and need no storage:
    // the emulation has no transport to restrict.
    for segment in segments {
        if let Some((key, attr)) = segment.trim().split_once('=') {
            match key.trim().to_ascii_lowercase().as_str() {
                "path" => cookie.path = attr.trim().to_string(),
                "domain" => cookie.domain = attr.trim().to_string(),
                // An unparseable date leaves the cookie without an expiry.
                "expires" => cookie.expires_at = parse_cookie_date(attr),
                _ => {}
            }
        }
    }

    cookie
}
