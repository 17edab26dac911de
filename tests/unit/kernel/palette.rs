use super::*;

#[test]
fn empty_query_lists_every_item() {
    assert_eq!(match_indices(""), vec![0, 1, 2, 3]);
    assert_eq!(match_indices("   ").len(), PALETTE_ITEMS.len());
}

#[test]
fn query_matches_labels_case_insensitively() {
    let items = match_items("FILE");
    let ids: Vec<_> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, ["new-file", "format"]);
}

#[test]
fn unmatched_query_yields_nothing() {
    assert!(match_items("deploy").is_empty());
}

#[test]
fn labels_and_lowercase_labels_agree() {
    for item in PALETTE_ITEMS {
        assert_eq!(item.label.to_lowercase(), item.label_lc);
    }
}

#[test]
fn surrounding_spaces_are_part_of_the_query() {
    assert!(match_items("file ").is_empty());
    let ids: Vec<_> = match_items(" settings").iter().map(|item| item.id).collect();
    assert_eq!(ids, ["open-settings"]);
}
