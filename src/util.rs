use chrono::{DateTime, Local, SecondsFormat};
use tracing::{debug, warn};

/// Source of "now" for manifest timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        chrono::offset::Local::now()
    }
}

/// `YYYY.MM.DD`, used for both mod and manifest versions.
pub fn date_version(time: &DateTime<Local>) -> String {
    time.format("%Y.%m.%d").to_string()
}

pub fn timestamp(time: &DateTime<Local>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Appends a single trailing slash when missing.
pub fn normalize_base_url(base_url: &str) -> String {
    if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    }
}

/// Warns about base URLs that are not absolute. Relative prefixes still work
/// for installers that resolve against their own origin, so this never fails.
pub fn check_base_url(base_url: &str) -> bool {
    match url::Url::parse(base_url) {
        Ok(parsed) => {
            debug!("Base URL scheme: {}", parsed.scheme());
            true
        }
        Err(e) => {
            warn!("Base URL {} is not an absolute URL: {}", base_url, e);
            false
        }
    }
}

pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
