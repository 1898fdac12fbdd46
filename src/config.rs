use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Wardbook";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default bind address; port 8080 is what the browser pages expect.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Get the application data directory
/// ~/Wardbook/ on all platforms (user-visible)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Wardbook")
}

/// Path to the data file. `WARDBOOK_DATA` overrides the default
/// ~/Wardbook/data.json.
pub fn data_file() -> PathBuf {
    match std::env::var_os("WARDBOOK_DATA") {
        Some(path) => PathBuf::from(path),
        None => app_data_dir().join("data.json"),
    }
}

/// Address to serve on. `WARDBOOK_ADDR` overrides the default.
pub fn bind_addr() -> SocketAddr {
    let raw = std::env::var("WARDBOOK_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!(addr = %raw, "invalid WARDBOOK_ADDR, using the default");
        DEFAULT_ADDR.parse().expect("default address parses")
    })
}

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}
