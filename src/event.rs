//! Event and log callback system.
//!
//! The engine runs inside a host editor's keystroke path, so it never writes
//! to stdout or a logger of its own. Hosts that want diagnostics install a
//! log callback; hosts that want to observe document edits install an event
//! callback.

use std::sync::{Mutex, OnceLock};

/// Event emitted by [`EditBuffer`](crate::EditBuffer) once per applied edit.
pub const DOCUMENT_CHANGED: &str = "document_changed";

/// Event emitted when a closing tag has been inserted. Data is the tag name.
pub const TAG_CLOSED: &str = "tag_closed";

/// Log level for debug callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type EventCallback = Box<dyn Fn(&str, &str) + Send + Sync + 'static>;
type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn event_callback() -> &'static Mutex<Option<EventCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<EventCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global event callback, replacing any previous one.
pub fn set_event_callback<F>(callback: F)
where
    F: Fn(&str, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = event_callback().lock() {
        *guard = Some(Box::new(callback));
    }
}

/// Remove the global event callback.
pub fn clear_event_callback() {
    if let Ok(mut guard) = event_callback().lock() {
        *guard = None;
    }
}

/// Emit an event to the registered callback.
pub fn emit_event(name: &str, data: &str) {
    if let Ok(guard) = event_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(name, data);
        }
    }
}

/// Set the global log callback, replacing any previous one.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = log_callback().lock() {
        *guard = Some(Box::new(callback));
    }
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    if let Ok(mut guard) = log_callback().lock() {
        *guard = None;
    }
}

/// Emit a log event.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}

/// Emit a log event whose message is only built when a callback is set.
///
/// Used on the keystroke path so that formatting costs nothing for hosts
/// without diagnostics.
pub(crate) fn emit_log_with<F>(level: LogLevel, message: F)
where
    F: FnOnce() -> String,
{
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, &message());
        }
    }
}

/// Serializes unit tests that install process-wide callbacks.
#[cfg(test)]
pub(crate) fn callback_test_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    // Callbacks are process-wide and other unit tests log concurrently, so
    // these tests only look for their own records.

    #[test]
    fn test_event_callback() {
        let _guard = callback_test_lock();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        set_event_callback(move |name, data| {
            sink.lock().unwrap().push((name.to_string(), data.to_string()));
        });
        emit_event("event_test", "payload");
        clear_event_callback();
        emit_event("event_test", "after_clear");
        assert!(
            seen.lock()
                .unwrap()
                .iter()
                .any(|(name, data)| name == "event_test" && data == "payload")
        );
        assert!(!seen.lock().unwrap().iter().any(|(_, data)| data == "after_clear"));
    }

    #[test]
    fn test_log_callback_lazy_message() {
        let _guard = callback_test_lock();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        set_log_callback(move |level, msg| {
            sink.lock().unwrap().push((level, msg.to_string()));
        });
        emit_log(LogLevel::Info, "log_test hello");
        emit_log_with(LogLevel::Warn, || "log_test lazy".to_string());
        clear_log_callback();
        emit_log_with(LogLevel::Warn, || panic!("message built without a callback"));
        let seen = seen.lock().unwrap();
        assert!(seen.contains(&(LogLevel::Info, "log_test hello".to_string())));
        assert!(seen.contains(&(LogLevel::Warn, "log_test lazy".to_string())));
    }

    #[test]
    fn test_log_levels_are_ordered() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
    }
}
