//! Core type aliases, constants, and runtime utilities for the cart simulator.
//!
//! This crate provides the foundational types and configuration parameters
//! used throughout the cartsim workspace.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Latitude and longitude components, in decimal degrees.
pub type Degrees = f64;
/// Simulated measurement-accuracy radius.
pub type Meters = u32;

// ============================================================================
// BACKEND
// ============================================================================
/// Default base URL of the CartSync backend.
pub const API_URL: &str = "http://localhost:5001";
/// Cart authentication route, relative to the base URL.
pub const LOGIN_PATH: &str = "/api/auth/cart/login";
/// Location ingestion route, relative to the base URL.
pub const UPDATE_PATH: &str = "/api/location/update";

// ============================================================================
// MOVEMENT
// ============================================================================
/// Interval between two consecutive movement ticks.
pub const UPDATE_INTERVAL: std::time::Duration = std::time::Duration::from_secs(5);
/// Full width of the jitter window applied to each waypoint.
/// Each axis moves by at most half of this (roughly 15m at Imphal's latitude).
pub const JITTER: Degrees = 0.0003;
/// Smallest synthesized accuracy radius.
pub const ACCURACY_MIN: Meters = 5;
/// Largest synthesized accuracy radius (inclusive).
pub const ACCURACY_MAX: Meters = 25;

// ============================================================================
// INTERRUPTS
// ============================================================================
/// Receiving half of a one-shot stop signal.
/// Cloneable so that several loops can observe the same interrupt.
#[derive(Debug, Clone)]
pub struct Interrupt(tokio::sync::watch::Receiver<bool>);

/// Sending half of a one-shot stop signal.
#[derive(Debug)]
pub struct Trigger(tokio::sync::watch::Sender<bool>);

/// Create a connected trigger/interrupt pair.
pub fn channel() -> (Trigger, Interrupt) {
    let (tx, rx) = tokio::sync::watch::channel(false);
    (Trigger(tx), Interrupt(rx))
}

impl Trigger {
    pub fn fire(&self) {
        let _ = self.0.send(true);
    }
}

impl Interrupt {
    /// Check whether the stop signal has already been raised.
    pub fn raised(&self) -> bool {
        *self.0.borrow()
    }
    /// Resolve once the stop signal is raised.
    /// Never resolves if the trigger is dropped without firing.
    pub async fn wait(&mut self) {
        if self.0.wait_for(|raised| *raised).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging. Everything goes to stdout, INFO and above.
/// Lines carry a wall-clock timestamp, nothing else.
#[cfg(feature = "server")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|s| s.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info);
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stdout,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}

/// Register a Ctrl+C handler that raises the returned interrupt.
/// Observers decide when to look at it; nothing in flight is cancelled.
/// Must be called from within a tokio runtime.
#[cfg(feature = "server")]
pub fn interrupt() -> Interrupt {
    let (trigger, interrupt) = channel();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                println!();
                log::warn!("interrupt received, stopping after current tick");
                trigger.fire();
            }
            Err(e) => log::error!("unable to listen for Ctrl+C: {}", e),
        }
    });
    interrupt
}

/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
pub fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let (split, unit) = s.char_indices().last()?;
    let value: u64 = s[..split].parse().ok()?;
    let scale = match unit {
        's' => 1,
        'm' => 60,
        'h' => 3600,
        'd' => 86400,
        _ => return None,
    };
    value.checked_mul(scale).map(std::time::Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    #[test]
    fn parses_units() {
        assert_eq!(parse_duration("5s"), Some(Duration::from_secs(5)));
        assert_eq!(parse_duration(" 2m "), Some(Duration::from_secs(120)));
        assert_eq!(parse_duration("1h"), Some(Duration::from_secs(3600)));
        assert_eq!(parse_duration("1d"), Some(Duration::from_secs(86400)));
    }
    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("5"), None);
        assert_eq!(parse_duration("s"), None);
        assert_eq!(parse_duration("5w"), None);
        assert_eq!(parse_duration("-5s"), None);
        assert_eq!(parse_duration("5µ"), None);
        assert_eq!(parse_duration("µ"), None);
    }
    #[test]
    fn rejects_overflow() {
        assert_eq!(parse_duration("999999999999999999d"), None);
        assert_eq!(parse_duration("18446744073709551615s"), Some(Duration::from_secs(u64::MAX)));
    }
    #[test]
    fn accuracy_window_is_sane() {
        assert!(ACCURACY_MIN < ACCURACY_MAX);
        assert!(JITTER > 0.0);
    }
    #[test]
    fn interrupt_starts_lowered() {
        let (_trigger, interrupt) = channel();
        assert!(!interrupt.raised());
    }
    #[tokio::test]
    async fn trigger_raises_every_clone() {
        let (trigger, mut interrupt) = channel();
        let other = interrupt.clone();
        trigger.fire();
        interrupt.wait().await;
        assert!(interrupt.raised());
        assert!(other.raised());
    }
}
