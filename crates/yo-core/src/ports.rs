//! Outbound ports: the surfaces results are reported to
//!
//! Implementations are fire-and-forget; the launcher never reads anything
//! back from them.

use parking_lot::Mutex;
use std::sync::Arc;

/// Shows a short message to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, message: &str);
}

/// Switches the active view to a URL.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str);
}

/// Presents the single default completion for in-progress input.
pub trait SuggestionSink: Send + Sync {
    fn set_suggestion(&self, text: &str);
}

#[derive(Clone)]
pub struct Collaborators {
    pub notifier: Arc<dyn Notifier>,
    pub navigator: Arc<dyn Navigator>,
    pub suggestions: Arc<dyn SuggestionSink>,
}

impl Collaborators {
    /// Route all three ports to one implementation.
    pub fn from_one<T>(target: Arc<T>) -> Self
    where
        T: Notifier + Navigator + SuggestionSink + 'static,
    {
        Self {
            notifier: target.clone(),
            navigator: target.clone(),
            suggestions: target,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Notified { title: String, message: String },
    Navigated(String),
    Suggested(String),
}

/// Records every port call in order. Handy for embedding and tests.
#[derive(Default)]
pub struct Recorder {
    events: Mutex<Vec<Event>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    /// Drain everything recorded so far.
    pub fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn navigations(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                Event::Navigated(url) => Some(url.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn notification_titles(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                Event::Notified { title, .. } => Some(title.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Notifier for Recorder {
    fn notify(&self, title: &str, message: &str) {
        self.events.lock().push(Event::Notified {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

impl Navigator for Recorder {
    fn navigate(&self, url: &str) {
        self.events.lock().push(Event::Navigated(url.to_string()));
    }
}

impl SuggestionSink for Recorder {
    fn set_suggestion(&self, text: &str) {
        self.events.lock().push(Event::Suggested(text.to_string()));
    }
}
