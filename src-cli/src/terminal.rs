//! Terminal implementations of the launcher ports
//!
//! Navigation targets go to stdout so `yo go` composes with an opener,
//! e.g. `xdg-open "$(yo go mail)"`. Notices go to stderr.

use yo_core::{Navigator, Notifier, SuggestionSink};

pub struct Terminal;

impl Notifier for Terminal {
    fn notify(&self, title: &str, message: &str) {
        eprintln!("{title}\n  {message}");
    }
}

impl Navigator for Terminal {
    fn navigate(&self, url: &str) {
        println!("{url}");
    }
}

impl SuggestionSink for Terminal {
    fn set_suggestion(&self, text: &str) {
        println!("{text}");
    }
}
