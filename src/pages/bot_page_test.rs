use super::*;

#[test]
fn default_tab_is_documents() {
    assert_eq!(WorkspaceTab::default(), WorkspaceTab::Documents);
}

#[test]
fn tab_order_matches_selector() {
    assert_eq!(
        WorkspaceTab::ALL,
        [
            WorkspaceTab::Documents,
            WorkspaceTab::Configurations,
            WorkspaceTab::Search,
        ]
    );
}

#[test]
fn tab_labels_are_distinct() {
    let labels: Vec<&str> = WorkspaceTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["Documents", "Configurations", "Search"]);
}
