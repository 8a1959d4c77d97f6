//! Browser history behind the shared `Navigator` capability.

use shared::redirect::{LocationSnapshot, Navigator};
use yew_router::history::{BrowserHistory, History, Location};

pub struct BrowserNavigator {
    history: BrowserHistory,
}

impl BrowserNavigator {
    pub fn new() -> Self {
        Self {
            history: BrowserHistory::new(),
        }
    }
}

impl Navigator for BrowserNavigator {
    fn replace(&self, url: &str) {
        self.history.replace(url.to_string());
    }

    fn push(&self, url: &str) {
        self.history.push(url.to_string());
    }
}

pub fn snapshot(location: &Location) -> LocationSnapshot {
    LocationSnapshot::new(location.path(), location.query_str(), location.hash())
}
