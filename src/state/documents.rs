//! Paginated document-list state for the active workspace.
//!
//! DESIGN
//! ======
//! The retained page is the source of truth between fetches. A successful
//! delete is reconciled locally (the entry is removed in place) instead of
//! refetching, which avoids visible flicker. `has_more` is inferred from
//! page fullness (a full page is assumed to have a successor), which is a
//! heuristic, not a server-declared signal: when the total count is an exact
//! multiple of the page size, the last "Next" lands on an empty page.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use crate::net::api::PAGE_LIMIT;
use crate::net::types::Document;

/// One page of a bot's documents plus the pagination cursor.
#[derive(Clone, Debug)]
pub struct DocumentsState {
    /// The currently displayed page, replaced wholesale by each fetch.
    pub items: Vec<Document>,
    /// 1-based page number.
    pub page: u32,
    /// Full-page heuristic: the last fetch returned exactly `PAGE_LIMIT`.
    pub has_more: bool,
    /// True while a page fetch is in flight.
    pub loading: bool,
}

impl Default for DocumentsState {
    fn default() -> Self {
        DocumentsState {
            items: Vec::new(),
            page: 1,
            has_more: false,
            loading: true,
        }
    }
}

impl DocumentsState {
    /// Replace the current page wholesale and refresh the cursor heuristic.
    pub fn apply_page(&mut self, docs: Vec<Document>) {
        self.has_more = docs.len() == PAGE_LIMIT;
        self.items = docs;
        self.loading = false;
    }

    /// Optimistically drop exactly the deleted document from the page.
    pub fn remove_document(&mut self, document_id: &str) {
        self.items.retain(|doc| doc.document_id != document_id);
    }

    /// Advance to the next page; only permitted while `has_more`.
    ///
    /// Returns whether the cursor moved (the caller refetches on `true`).
    pub fn next_page(&mut self) -> bool {
        if !self.has_more {
            return false;
        }
        self.page += 1;
        true
    }

    /// Step back one page, clamping at page 1.
    ///
    /// Returns whether the cursor moved (the caller refetches on `true`).
    pub fn prev_page(&mut self) -> bool {
        if self.page <= 1 {
            return false;
        }
        self.page -= 1;
        true
    }
}

/// A delete request with a missing id or name is a local no-op, not an error.
#[must_use]
pub fn can_delete(document_id: &str, document_name: &str) -> bool {
    !document_id.is_empty() && !document_name.is_empty()
}

/// Confirmation prompt shown before the delete call is issued.
#[must_use]
pub fn confirm_delete_message(document_name: &str) -> String {
    format!("Delete \"{document_name}\"?")
}
