//! Per-call cookie options and their resolution against store defaults.

use crate::config::CookieDefaults;
use crate::expiry::Expiry;

/// Options for a single `set` call. Any field left `None` falls back to
/// the store defaults; an explicitly set field always wins, even when it
/// equals the default.
///
/// ```
/// use document_cookies::{CookieOptions, Expiry};
///
/// let options = CookieOptions {
///     expires: Some(Expiry::Seconds(3600)),
///     path: Some("/session".into()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct CookieOptions {
    /// Lifetime override.
    pub expires: Option<Expiry>,
    /// Path override.
    pub path: Option<String>,
    /// Domain override.
    pub domain: Option<String>,
    /// Secure-transport flag override.
    pub secure: Option<bool>,
}

impl CookieOptions {
    /// Resolves these options against `defaults`. Present fields win,
    /// absent fields take the default.
    pub(crate) fn resolve(self, defaults: &CookieDefaults) -> ResolvedOptions {
        ResolvedOptions {
            expires: self.expires.unwrap_or_else(|| defaults.expires.clone()),
            path: self.path.unwrap_or_else(|| defaults.path.clone()),
            domain: self.domain.unwrap_or_else(|| defaults.domain.clone()),
            secure: self.secure.unwrap_or(defaults.secure),
        }
    }
}

/// Fully resolved attributes for one serialized cookie.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedOptions {
    pub expires: Expiry,
    pub path: String,
    pub domain: String,
    pub secure: bool,
}

impl ResolvedOptions {
    /// Appends the attribute tail, in `expires`, `path`, `domain`, `secure`
    /// order. Attributes with nothing to say are left out: a session
    /// expiry, an empty path or domain, `secure` when `false`.
    pub(crate) fn append_attributes(&self, out: &mut String) {
        if let Some(expires) = self.expires.attribute_value() {
            out.push_str("; expires=");
            out.push_str(&expires);
        }
        if !self.path.is_empty() {
            out.push_str("; path=");
            out.push_str(&self.path);
        }
        if !self.domain.is_empty() {
            out.push_str("; domain=");
            out.push_str(&self.domain);
        }
        if self.secure {
            out.push_str("; secure");
        }
    }
}
