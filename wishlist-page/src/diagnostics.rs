//! Diagnostic sink
//!
//! The page reports access problems, rendering anomalies and injected
//! failures through a [`DiagnosticSink`]. Hosts without an observability
//! backend pass [`NoopSink`]; [`TracingSink`] forwards everything to
//! `tracing`.

use std::fmt;

use strum::AsRefStr;

/// Target used by [`TracingSink`] events
pub const DIAGNOSTICS_TARGET: &str = "wishlist::diagnostics";

// =============================================================================
// Records
// =============================================================================

/// Severity of a logged message
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Level {
    Info,
    Warning,
    Error,
}

/// Optional context attached to a diagnostic
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticContext {
    /// Diagnostic key of the user involved
    pub user: Option<String>,

    /// Action being rendered or performed
    pub action: Option<String>,

    /// Permission that was required
    pub permission: Option<String>,

    /// Item identifier involved
    pub item_id: Option<String>,
}

impl DiagnosticContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user field
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set the action field
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Set the permission field
    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    /// Set the item id field
    pub fn with_item_id(mut self, item_id: impl Into<String>) -> Self {
        self.item_id = Some(item_id.into());
        self
    }
}

/// Structured error emitted for injected logical errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub code: String,
    pub message: String,
    /// Accessible label or trimmed text of the clicked element
    pub label: String,
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} (on \"{}\")", self.code, self.message, self.label)
    }
}

// =============================================================================
// Sinks
// =============================================================================

/// Observability backend
///
/// Every method has a no-op default, so implementors only override what they
/// forward. Implementations must not panic.
pub trait DiagnosticSink: Send + Sync {
    /// Log a free-form message
    fn log_message(&self, _message: &str, _level: Level, _context: &DiagnosticContext) {}

    /// Log a caught error
    fn log_exception(&self, _error: &dyn std::error::Error, _context: &DiagnosticContext) {}

    /// Log a structured error record
    fn log_error(&self, _record: &ErrorRecord) {}
}

/// Sink that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {}

/// Sink that forwards to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log_message(&self, message: &str, level: Level, context: &DiagnosticContext) {
        match level {
            Level::Info => tracing::info!(target: DIAGNOSTICS_TARGET, ?context, "{}", message),
            Level::Warning => tracing::warn!(target: DIAGNOSTICS_TARGET, ?context, "{}", message),
            Level::Error => tracing::error!(target: DIAGNOSTICS_TARGET, ?context, "{}", message),
        }
    }

    fn log_exception(&self, error: &dyn std::error::Error, context: &DiagnosticContext) {
        tracing::error!(target: DIAGNOSTICS_TARGET, ?context, error = %error, "exception");
    }

    fn log_error(&self, record: &ErrorRecord) {
        tracing::error!(
            target: DIAGNOSTICS_TARGET,
            code = %record.code,
            label = %record.label,
            "{}",
            record.message
        );
    }
}
