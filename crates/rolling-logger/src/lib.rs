//! Rolling Logger
//!
//! `tracing-subscriber` layer that keeps the most recent events in a
//! circular buffer and forwards each one to the browser console (wasm) or
//! stderr. `log` records reach it through the subscriber's log bridge.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

pub use tracing::Level;

/// Lines kept by [`init_logger`]
pub const DEFAULT_CAPACITY: usize = 500;

static BUFFER: OnceLock<RingBuffer> = OnceLock::new();

/// Bounded history of formatted lines, shared between layer and readers
#[derive(Clone)]
pub struct RingBuffer {
    capacity: usize,
    lines: Arc<Mutex<VecDeque<String>>>,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
        }
    }

    /// Retained lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn push(&self, line: String) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

/// Layer writing every event into a [`RingBuffer`]
pub struct RollingLayer {
    app_name: String,
    buffer: RingBuffer,
}

impl RollingLayer {
    pub fn new(app_name: impl Into<String>, buffer: RingBuffer) -> Self {
        Self {
            app_name: app_name.into(),
            buffer,
        }
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = EventFields::default();
        event.record(&mut fields);

        let metadata = event.metadata();
        // Bridged log records carry their real target as a field
        let target = fields.log_target.as_deref().unwrap_or(metadata.target());
        let line = format!(
            "{} [{}] {} {}: {}{}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            self.app_name,
            metadata.level(),
            target,
            fields.message,
            fields.extra
        );
        emit(*metadata.level(), &line);
        self.buffer.push(line);
    }
}

#[derive(Default)]
struct EventFields {
    message: String,
    log_target: Option<String>,
    extra: String,
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = value.to_string(),
            "log.target" => self.log_target = Some(value.to_string()),
            name if name.starts_with("log.") => {}
            name => self.extra.push_str(&format!(" {}={}", name, value)),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{:?}", value),
            name if name.starts_with("log.") => {}
            name => self.extra.push_str(&format!(" {}={:?}", name, value)),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    if level == Level::ERROR {
        web_sys::console::error_1(&value);
    } else if level == Level::WARN {
        web_sys::console::warn_1(&value);
    } else if level == Level::INFO {
        web_sys::console::info_1(&value);
    } else {
        web_sys::console::debug_1(&value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global subscriber and the `log` bridge.
/// Fails if a subscriber is already set.
pub fn init_logger(app_name: &str, level: Level) -> Result<(), TryInitError> {
    let buffer = BUFFER.get_or_init(|| RingBuffer::new(DEFAULT_CAPACITY)).clone();
    tracing_subscriber::registry()
        .with(LevelFilter::from_level(level))
        .with(RollingLayer::new(app_name, buffer))
        .try_init()
}

/// Lines retained by the global logger, empty before [`init_logger`]
pub fn recent() -> Vec<String> {
    BUFFER.get().map(RingBuffer::recent).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(capacity: usize, level: Level, emit_events: impl FnOnce()) -> Vec<String> {
        let buffer = RingBuffer::new(capacity);
        let subscriber = tracing_subscriber::registry()
            .with(LevelFilter::from_level(level))
            .with(RollingLayer::new("Test", buffer.clone()));
        tracing::subscriber::with_default(subscriber, emit_events);
        buffer.recent()
    }

    #[test]
    fn test_ring_drops_oldest() {
        let lines = capture(2, Level::DEBUG, || {
            tracing::info!(target: "test", "one");
            tracing::info!(target: "test", "two");
            tracing::info!(target: "test", "three");
        });

        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("two"));
        assert!(lines[1].ends_with("three"));
    }

    #[test]
    fn test_level_filter() {
        let lines = capture(10, Level::INFO, || {
            tracing::debug!(target: "test", "hidden");
            tracing::warn!(target: "test", "shown");
        });

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[Test] WARN test: shown"), "{}", lines[0]);
    }

    #[test]
    fn test_fields_follow_message() {
        let lines = capture(10, Level::TRACE, || {
            tracing::error!(target: "loader", status = 503, "fetch failed");
        });

        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("ERROR loader: fetch failed status=503"), "{}", lines[0]);
    }

    #[test]
    fn test_zero_capacity_keeps_newest_line() {
        let buffer = RingBuffer::new(0);
        assert!(buffer.recent().is_empty());
        buffer.push("kept".to_string());
        buffer.push("newest".to_string());
        assert_eq!(buffer.recent(), vec!["newest".to_string()]);
    }
}
