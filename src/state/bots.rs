//! Dashboard bot-list state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The retained list is the source of truth between fetches: create appends
//! the server-confirmed summary and delete removes in place, so neither
//! mutation triggers a refetch.

#[cfg(test)]
#[path = "bots_test.rs"]
mod bots_test;

use crate::net::types::Bot;

/// Bot inventory shown on the dashboard landing route.
#[derive(Clone, Debug)]
pub struct BotsState {
    /// All bots owned by the user, in server order plus local appends.
    pub items: Vec<Bot>,
    /// True until the initial list fetch resolves.
    pub loading: bool,
    /// True while a create request is in flight (disables the dialog).
    pub creating: bool,
    /// Inline error from the most recent list fetch, if any.
    pub error: Option<String>,
}

impl Default for BotsState {
    fn default() -> Self {
        BotsState {
            items: Vec::new(),
            loading: true,
            creating: false,
            error: None,
        }
    }
}

impl BotsState {
    /// Replace the list wholesale with a fetched inventory.
    pub fn apply_list(&mut self, bots: Vec<Bot>) {
        self.items = bots;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed list fetch.
    pub fn fail_list(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Append a server-confirmed creation without refetching.
    pub fn append_created(&mut self, bot: Bot) {
        self.creating = false;
        self.items.push(bot);
    }

    /// Remove exactly the deleted bot from the retained list.
    pub fn remove_bot(&mut self, bot_id: &str) {
        self.items.retain(|bot| bot.bot_id != bot_id);
    }
}
