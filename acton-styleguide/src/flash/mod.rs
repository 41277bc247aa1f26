//! Flash messages
//!
//! One-time messages grouped into named queues. The module chrome renders the
//! messages of [`MODULE_QUEUE`]; pages may keep their own queue to place
//! messages inside their body instead.
//!
//! ```rust
//! use acton_styleguide::flash::{FlashMessage, FlashMessageService};
//!
//! let mut service = FlashMessageService::new();
//! service
//!     .queue_by_identifier("styleguide.demo")
//!     .enqueue(FlashMessage::ok("Saved").with_title("Ok"));
//!
//! let messages = service.queue_by_identifier("styleguide.demo").get_all_and_flush();
//! assert_eq!(messages.len(), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::demo::Severity;

/// Queue rendered by the module chrome on every page
pub const MODULE_QUEUE: &str = "styleguide.module";

/// Queue the flash message showcase renders inside the page body
pub const DEMO_QUEUE: &str = "styleguide.demo";

/// Flash message for one-time display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlashMessage {
    /// Message text
    pub message: String,
    /// Headline
    pub title: String,
    /// Severity
    pub severity: Severity,
    /// Whether the message should survive a redirect
    pub store_in_session: bool,
}

impl FlashMessage {
    /// Create a flash message
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        title: impl Into<String>,
        severity: Severity,
        store_in_session: bool,
    ) -> Self {
        Self {
            message: message.into(),
            title: title.into(),
            severity,
            store_in_session,
        }
    }

    /// Create a notice flash message
    #[must_use]
    pub fn notice(message: impl Into<String>) -> Self {
        Self::new(message, "", Severity::Notice, false)
    }

    /// Create an info flash message
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, "", Severity::Info, false)
    }

    /// Create a success flash message
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(message, "", Severity::Ok, false)
    }

    /// Create a warning flash message
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, "", Severity::Warning, false)
    }

    /// Create an error flash message
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, "", Severity::Error, false)
    }

    /// Set the title for this flash message
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Keep this message across a redirect
    #[must_use]
    pub const fn in_session(mut self) -> Self {
        self.store_in_session = true;
        self
    }

    /// Get CSS class for this message
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        self.severity.css_class()
    }
}

/// Ordered queue of flash messages
#[derive(Debug, Clone, Default)]
pub struct FlashMessageQueue {
    identifier: String,
    messages: Vec<FlashMessage>,
}

impl FlashMessageQueue {
    /// Create an empty queue
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            messages: Vec::new(),
        }
    }

    /// Append a message
    pub fn enqueue(&mut self, message: FlashMessage) -> &mut Self {
        tracing::trace!(
            queue = %self.identifier,
            severity = message.severity.name(),
            "Flash message queued"
        );
        self.messages.push(message);
        self
    }

    /// Messages in insertion order
    #[must_use]
    pub fn get_all(&self) -> &[FlashMessage] {
        &self.messages
    }

    /// Take all messages, leaving the queue empty
    pub fn get_all_and_flush(&mut self) -> Vec<FlashMessage> {
        std::mem::take(&mut self.messages)
    }

    /// Number of queued messages
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the queue is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Request-scoped registry of flash message queues
#[derive(Debug, Default)]
pub struct FlashMessageService {
    queues: HashMap<String, FlashMessageQueue>,
}

impl FlashMessageService {
    /// Create a service without queues
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue with the given identifier, created on first use
    pub fn queue_by_identifier(&mut self, identifier: &str) -> &mut FlashMessageQueue {
        self.queues
            .entry(identifier.to_string())
            .or_insert_with(|| FlashMessageQueue::new(identifier))
    }

    /// The queue rendered by the module chrome
    pub fn module_queue(&mut self) -> &mut FlashMessageQueue {
        self.queue_by_identifier(MODULE_QUEUE)
    }
}
