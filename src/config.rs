//! App Configuration
//!
//! Construction-time resolution of the origin host and the admin context.
//! The booking form never reads these ambiently; the shell resolves them once
//! and passes them down.

/// Compile-time host override, e.g. `HOST=book.example.com trunk build`.
const HOST_OVERRIDE: Option<&str> = option_env!("HOST");

/// Path the admin view is served under.
const ADMIN_PATH: &str = "/admin";

/// Configuration the owning shell passes down at construction time
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin identifier stamped on outbound reservation payloads
    pub host: String,
    /// Whether this instance serves the admin view
    pub is_admin: bool,
}

impl AppConfig {
    /// Resolve from the browser window.
    pub fn from_window() -> Self {
        let location = web_sys::window().map(|window| window.location());
        let host = resolve_host(
            HOST_OVERRIDE,
            location.as_ref().and_then(|loc| loc.host().ok()),
        );
        let is_admin = location
            .and_then(|loc| loc.pathname().ok())
            .is_some_and(|path| is_admin_path(&path));
        Self { host, is_admin }
    }
}

/// A non-empty build-time override wins over the page location.
fn resolve_host(override_host: Option<&str>, location_host: Option<String>) -> String {
    match override_host {
        Some(host) if !host.is_empty() => host.to_string(),
        _ => location_host.unwrap_or_default(),
    }
}

/// The admin view lives at `/admin` (and below).
fn is_admin_path(path: &str) -> bool {
    path == ADMIN_PATH
        || path
            .strip_prefix(ADMIN_PATH)
            .is_some_and(|rest| rest.starts_with('/'))
}
