//! Walks through the cookie store API against the in-memory host.
//!
//! Run with `RUST_LOG=debug cargo run --example quickstart` to see the
//! store's debug logging.

use document_cookies::{
    CookieError, CookieOptions, CookieStore, DefaultsUpdate, Expiry, InMemoryPage,
};

fn main() -> Result<(), CookieError> {
    env_logger::init();

    // The in-memory page stands in for a real browser page; embedders with
    // an actual document implement the HostPage and Document traits.
    let page = InMemoryPage::new();
    let mut store = CookieStore::new(&page, None)?;

    // Store-wide defaults: every later set inherits these unless the call
    // overrides them.
    store.configure(DefaultsUpdate {
        path: Some("/app".into()),
        debug: Some(true),
        ..Default::default()
    });

    store.set("session", "abc123", None);
    store.set(
        "theme",
        "dark mode",
        Some(CookieOptions {
            expires: Some(Expiry::Seconds(3600)),
            ..Default::default()
        }),
    );

    println!("session = {:?}", store.get("session"));
    println!("all cookies:");
    for cookie in store.get_all() {
        println!("  {} = {}", cookie.name, cookie.value);
    }

    let deleted = store.unset("session");
    println!("session deleted: {deleted}");
    println!("session now: {:?}", store.get("session"));

    Ok(())
}
