use super::*;

fn doc(id: &str) -> Document {
    Document {
        document_id: id.to_owned(),
        name: format!("{id}.txt"),
        source: "uploaded".to_owned(),
    }
}

fn page_of(n: usize) -> Vec<Document> {
    (0..n).map(|i| doc(&format!("d{i}"))).collect()
}

// =============================================================
// Full-page hasMore heuristic
// =============================================================

#[test]
fn full_page_implies_has_more() {
    let mut state = DocumentsState::default();
    state.apply_page(page_of(PAGE_LIMIT));
    assert!(state.has_more);
    assert!(!state.loading);
}

#[test]
fn short_page_clears_has_more() {
    let mut state = DocumentsState::default();
    state.apply_page(page_of(3));
    assert!(!state.has_more);
}

#[test]
fn empty_page_clears_has_more() {
    let mut state = DocumentsState::default();
    state.apply_page(Vec::new());
    assert!(!state.has_more);
    assert!(state.items.is_empty());
}

#[test]
fn apply_page_replaces_wholesale() {
    let mut state = DocumentsState::default();
    state.apply_page(page_of(PAGE_LIMIT));
    state.apply_page(vec![doc("fresh")]);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].document_id, "fresh");
}

// =============================================================
// Optimistic delete reconciliation
// =============================================================

#[test]
fn remove_document_drops_exactly_one_entry() {
    let mut state = DocumentsState::default();
    state.apply_page(page_of(4));
    state.remove_document("d2");
    let ids: Vec<&str> = state.items.iter().map(|d| d.document_id.as_str()).collect();
    assert_eq!(ids, ["d0", "d1", "d3"]);
}

#[test]
fn remove_document_leaves_cursor_untouched() {
    let mut state = DocumentsState::default();
    state.apply_page(page_of(PAGE_LIMIT));
    state.remove_document("d0");
    assert!(state.has_more);
    assert_eq!(state.page, 1);
}

// =============================================================
// Page navigation
// =============================================================

#[test]
fn next_page_requires_has_more() {
    let mut state = DocumentsState::default();
    state.apply_page(page_of(2));
    assert!(!state.next_page());
    assert_eq!(state.page, 1);

    state.apply_page(page_of(PAGE_LIMIT));
    assert!(state.next_page());
    assert_eq!(state.page, 2);
}

#[test]
fn prev_page_clamps_at_one() {
    let mut state = DocumentsState::default();
    assert!(!state.prev_page());
    assert_eq!(state.page, 1);

    state.apply_page(page_of(PAGE_LIMIT));
    state.next_page();
    assert!(state.prev_page());
    assert_eq!(state.page, 1);
}

// =============================================================
// Delete preconditions
// =============================================================

#[test]
fn delete_requires_both_id_and_name() {
    assert!(can_delete("d1", "notes.txt"));
    assert!(!can_delete("", "notes.txt"));
    assert!(!can_delete("d1", ""));
}

#[test]
fn confirm_message_quotes_the_name() {
    assert_eq!(confirm_delete_message("notes.txt"), "Delete \"notes.txt\"?");
}
