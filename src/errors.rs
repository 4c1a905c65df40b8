#[derive(Debug, thiserror::Error)]
pub enum CookieError {
    #[error("host page does not expose a document")]
    DocumentUnavailable,

    #[error("cookie storage is disabled on the host page")]
    CookiesDisabled,
}
