//! # Auth boundary
//!
//! Authentication is owned by an external identity provider; the core only
//! consumes its state. [`AuthSignal`] is the read side (who is logged in),
//! [`InteractionSink`] is the write side (fire-and-forget usage events).
//! Neither is allowed to fail a caller: sinks swallow their own errors, and
//! gating decisions ("must be logged in to favorite") belong to the CLI
//! layer, never to the stores underneath.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// Read-only view of the current session.
pub trait AuthSignal {
    fn is_authenticated(&self) -> bool;
    fn current_user(&self) -> Option<&User>;
}

/// Fire-and-forget instrumentation sink.
///
/// Implementations must never block or propagate failure; a lost event is
/// acceptable, a broken favorite toggle is not.
pub trait InteractionSink {
    fn track(&self, action: &str, details: Value);
}

/// Session state loaded from local config.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new(user: Option<User>) -> Self {
        Self { user }
    }

    pub fn anonymous() -> Self {
        Self { user: None }
    }
}

impl AuthSignal for Session {
    fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

/// Sink that appends one JSON event per line to a local file.
///
/// Mirrors the upstream analytics call: each event carries the action, the
/// caller's details, and an ISO-8601 timestamp. Write errors are discarded.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl InteractionSink for FileSink {
    fn track(&self, action: &str, details: Value) {
        let event = json!({
            "action": action,
            "details": details,
            "timestamp": Utc::now().to_rfc3339(),
        });
        // Silently fail for analytics.
        let _ = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut f| writeln!(f, "{}", event));
    }
}

/// Sink that drops every event.
pub struct NullSink;

impl InteractionSink for NullSink {
    fn track(&self, _action: &str, _details: Value) {}
}
