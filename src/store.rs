//! The cookie store façade.
//!
//! [`CookieStore`] is the user-facing entry point: it owns a document
//! handle plus the store-wide defaults, and turns `get`, `get_all`, `set`
//! and `unset` calls into exchanges with the host's cookie string.

use crate::config::{CookieDefaults, DefaultsUpdate};
use crate::cookie::{self, Cookie};
use crate::errors::CookieError;
use crate::expiry::Expiry;
use crate::host::{DocumentHandle, HostPage};
use crate::options::CookieOptions;

/// Client-side cookie store backed by a host document.
///
/// One instance holds the document handle and the configurable defaults;
/// every operation is one synchronous exchange with the host. See the
/// crate docs for a walkthrough.
pub struct CookieStore {
    document: DocumentHandle,
    defaults: CookieDefaults,
}

impl CookieStore {
    /// Builds a store on `page`. Pass `None` to start from
    /// [`CookieDefaults::default`].
    ///
    /// Fails when the page has no document or when the host has cookie
    /// storage disabled; no store is produced in either case.
    pub fn new(
        page: &dyn HostPage,
        defaults: Option<CookieDefaults>,
    ) -> Result<Self, CookieError> {
        let document = page.document().ok_or(CookieError::DocumentUnavailable)?;

        if !page.cookies_enabled() {
            return Err(CookieError::CookiesDisabled);
        }

        Ok(Self {
            document,
            defaults: defaults.unwrap_or_default(),
        })
    }

    /// Current store defaults.
    pub fn defaults(&self) -> &CookieDefaults {
        &self.defaults
    }

    /// Merges every present field of `update` into the store defaults.
    /// Later `set` calls see the new values.
    pub fn configure(&mut self, update: DefaultsUpdate) {
        self.defaults.apply(update);
    }

    /// Restores `expires`, `path`, `domain` and `secure` to their initial
    /// defaults. The `encode` and `debug` switches keep their configured
    /// state.
    pub fn reset_options(&mut self) {
        self.defaults.reset_options();
    }

    /// Returns the decoded value of the cookie `name`, or `None` when no
    /// such cookie is visible. A miss is not an error.
    pub fn get(&self, name: &str) -> Option<String> {
        cookie::find_value(&self.document.cookie_string(), name)
    }

    /// Returns every visible cookie, in the order the host reports them.
    /// That order is the platform's to choose and is not guaranteed to be
    /// stable across hosts.
    pub fn get_all(&self) -> Vec<Cookie> {
        cookie::parse_cookie_string(&self.document.cookie_string())
    }

    /// Serializes `name`, `value` and the resolved options, then commits
    /// the result to the host document. Per-call options win over the
    /// store defaults; options left out fall back to them.
    ///
    /// Returns the committed cookie string, or `None` when the host
    /// rejected the assignment. A rejection is logged and swallowed, it
    /// never propagates.
    pub fn set(&self, name: &str, value: &str, options: Option<CookieOptions>) -> Option<String> {
        let resolved = options.unwrap_or_default().resolve(&self.defaults);

        let mut serialized = String::with_capacity(name.len() + value.len() + 64);
        serialized.push_str(name);
        serialized.push('=');
        if self.defaults.encode {
            serialized.push_str(&cookie::encode_value(value));
        } else {
            serialized.push_str(value);
        }
        resolved.append_attributes(&mut serialized);

        match self.document.assign_cookie(&serialized) {
            Ok(()) => {
                if self.defaults.debug {
                    log::debug!("cookie {name:?} set: {serialized}");
                }
                Some(serialized)
            }
            Err(err) => {
                log::warn!("cookie {name:?} was not set: {err}");
                None
            }
        }
    }

    /// Deletes `name` by committing an empty value dated in the past. Path
    /// and domain resolve from the store defaults, so a cookie written
    /// under a different scope survives the call.
    ///
    /// Returns `true` when a re-read confirms the cookie is gone.
    pub fn unset(&self, name: &str) -> bool {
        self.set(
            name,
            "",
            Some(CookieOptions {
                expires: Some(Expiry::Remove),
                ..Default::default()
            }),
        );

        let gone = self.get(name).is_none();
        if gone && self.defaults.debug {
            log::debug!("cookie {name:?} deleted");
        }
        gone
    }
}
