//! Core type aliases, traits, and constants for helpdesk.
//!
//! This crate provides the foundational identifier types, configuration
//! defaults, and runtime utilities shared across the helpdesk workspace.

// ============================================================================
// TRAITS
// ============================================================================
/// Unique identifier trait for domain entities.
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
///
/// Backed by UUIDv7, so freshly minted IDs sort by creation order.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
}

impl<T> From<ID<T>> for uuid::Uuid {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}
impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> TryFrom<&str> for ID<T> {
    type Error = uuid::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        uuid::Uuid::parse_str(s).map(Self::from)
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self {
            inner: uuid::Uuid::now_v7(),
            marker: PhantomData,
        }
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

// ============================================================================
// AUTHENTICATION PARAMETERS
// ============================================================================
/// Default lifetime of a signed access token (7 days).
pub const TOKEN_LIFETIME: std::time::Duration = std::time::Duration::from_secs(7 * 86400);
/// Display name given to the bootstrapped reviewer when ADMIN_NAME is unset.
pub const REVIEWER_NAME: &str = "Admin";

// ============================================================================
// SERVER PARAMETERS
// ============================================================================
/// Listen address when BIND_ADDR is unset.
pub const BIND_ADDR: &str = "0.0.0.0:5000";
/// Number of actix worker threads.
pub const SERVER_WORKERS: usize = 4;
/// Seconds granted to in-flight requests after a shutdown signal.
pub const SHUTDOWN_TIMEOUT: u64 = 10;
/// Upper bound on accepted JSON bodies (1 MiB).
pub const JSON_LIMIT: usize = 1 << 20;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Seconds since the unix epoch.
pub fn unix(time: std::time::SystemTime) -> i64 {
    time.duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}

/// Milliseconds since the unix epoch, used on the wire for timestamps.
pub fn millis(time: std::time::SystemTime) -> i64 {
    time.duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

/// Parse duration string like "30s", "5m", "2h", "7d" into Duration.
/// A bare integer is read as seconds.
pub fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    if let Ok(secs) = s.parse::<u64>() {
        return Some(std::time::Duration::from_secs(secs));
    }
    let (split, _) = s.char_indices().last()?;
    let (num, unit) = s.split_at(split);
    let value: u64 = num.trim().parse().ok()?;
    let scale = match unit {
        "s" => 1,
        "m" => 60,
        "h" => 3600,
        "d" => 86400,
        _ => return None,
    };
    value.checked_mul(scale).map(std::time::Duration::from_secs)
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = unix(std::time::SystemTime::now());
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct Thing;

    #[test]
    fn durations_with_units() {
        assert_eq!(parse_duration("30s"), Some(Duration::from_secs(30)));
        assert_eq!(parse_duration("5m"), Some(Duration::from_secs(300)));
        assert_eq!(parse_duration("2h"), Some(Duration::from_secs(7200)));
        assert_eq!(parse_duration(" 7d "), Some(Duration::from_secs(604800)));
    }
    #[test]
    fn durations_bare_seconds() {
        assert_eq!(parse_duration("0"), Some(Duration::ZERO));
        assert_eq!(parse_duration("3600"), Some(Duration::from_secs(3600)));
    }
    #[test]
    fn durations_rejected() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("d"), None);
        assert_eq!(parse_duration("7w"), None);
        assert_eq!(parse_duration("7é"), None);
    }
    #[test]
    fn durations_overflowing_are_rejected() {
        assert_eq!(parse_duration("300000000000000d"), None);
        assert_eq!(parse_duration("18446744073709551615m"), None);
    }
    #[test]
    fn default_token_lifetime_is_a_week() {
        assert_eq!(parse_duration("7d"), Some(TOKEN_LIFETIME));
    }
    #[test]
    fn ids_parse_and_display() {
        let id = ID::<Thing>::default();
        let parsed = ID::<Thing>::try_from(id.to_string().as_str()).unwrap();
        assert_eq!(id, parsed);
        assert!(ID::<Thing>::try_from("not-a-uuid").is_err());
    }
    #[test]
    fn ids_sort_by_creation() {
        let a = ID::<Thing>::default();
        let b = ID::<Thing>::default();
        assert!(a < b);
    }
}
