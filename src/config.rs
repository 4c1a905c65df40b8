//! Store-wide cookie defaults.
//!
//! Every [`CookieStore`](crate::CookieStore) owns one [`CookieDefaults`]
//! value: the fallback for options a `set` call leaves unspecified, plus
//! the value-encoding and debug-logging switches. Defaults change only
//! through [`configure`](crate::CookieStore::configure) and
//! [`reset_options`](crate::CookieStore::reset_options).

use crate::expiry::Expiry;

/// Defaults applied by `set` when a call leaves an option out.
#[derive(Debug, Clone, PartialEq)]
pub struct CookieDefaults {
    /// Default lifetime; `Session` emits no `expires` attribute.
    pub expires: Expiry,
    /// Path on the domain where cookies are valid. A single slash covers
    /// the whole domain.
    pub path: String,
    /// Cookie domain, e.g. `www.example.com`; prefix with a dot to cover
    /// subdomains. Empty means the current host, with the attribute
    /// omitted.
    pub domain: String,
    /// When `true`, cookies are marked for secure transports only.
    pub secure: bool,
    /// When `true`, values are percent-encoded on write.
    pub encode: bool,
    /// When `true`, store operations are logged at debug level.
    pub debug: bool,
}

impl Default for CookieDefaults {
    fn default() -> Self {
        Self {
            expires: Expiry::Session,
            path: "/".to_string(),
            domain: String::new(),
            secure: false,
            encode: true,
            debug: false,
        }
    }
}

impl CookieDefaults {
    /// Merges every present field of `update` into these defaults.
    pub(crate) fn apply(&mut self, update: DefaultsUpdate) {
        if let Some(debug) = update.debug {
            self.debug = debug;
        }
        if let Some(expires) = update.expires {
            self.expires = expires;
        }
        if let Some(path) = update.path {
            self.path = path;
        }
        if let Some(domain) = update.domain {
            self.domain = domain;
        }
        if let Some(secure) = update.secure {
            self.secure = secure;
        }
        if let Some(encode) = update.encode {
            self.encode = encode;
        }
        if self.debug {
            log::debug!("cookie defaults updated: {self:?}");
        }
    }

    /// Restores `expires`, `path`, `domain` and `secure` to their initial
    /// values. The `encode` and `debug` switches keep their configured
    /// state.
    pub(crate) fn reset_options(&mut self) {
        let initial = CookieDefaults::default();
        self.expires = initial.expires;
        self.path = initial.path;
        self.domain = initial.domain;
        self.secure = initial.secure;
        if self.debug {
            log::debug!("cookie defaults reset: {self:?}");
        }
    }
}

/// A partial update for [`CookieDefaults`], applied by
/// [`configure`](crate::CookieStore::configure). Fields left `None` keep
/// the current value.
///
/// ```
/// use document_cookies::DefaultsUpdate;
///
/// let update = DefaultsUpdate {
///     path: Some("/app".into()),
///     secure: Some(true),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultsUpdate {
    pub expires: Option<Expiry>,
    pub path: Option<String>,
    pub domain: Option<String>,
    pub secure: Option<bool>,
    pub encode: Option<bool>,
    pub debug: Option<bool>,
}
