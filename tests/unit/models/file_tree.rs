use super::*;

fn sample_tree() -> WorkspaceTree {
    vec![
        Arc::new(WorkspaceNode::folder(
            "src",
            "src",
            [
                WorkspaceNode::file("src/main.rs", "main.rs")
                    .with_language("rust")
                    .with_content("fn main() {}\n"),
                WorkspaceNode::folder(
                    "src/util",
                    "util",
                    [WorkspaceNode::file("src/util/mod.rs", "mod.rs").with_content("")],
                ),
            ],
        )),
        Arc::new(WorkspaceNode::file("README.md", "README.md").with_language("markdown")),
    ]
}

#[test]
fn find_node_searches_every_depth() {
    let tree = sample_tree();

    assert_eq!(find_node(&tree, "src").map(|n| n.kind()), Some(NodeKind::Folder));
    assert_eq!(
        find_node(&tree, "src/util/mod.rs").map(|n| n.name.as_str()),
        Some("mod.rs")
    );
    assert_eq!(
        find_node(&tree, "README.md").and_then(|n| n.language()),
        Some("markdown")
    );
    assert!(find_node(&tree, "missing").is_none());
}

#[test]
fn find_node_prefers_first_match_in_preorder() {
    let tree = vec![
        Arc::new(WorkspaceNode::folder(
            "dir",
            "dir",
            [WorkspaceNode::file("dup", "nested")],
        )),
        Arc::new(WorkspaceNode::file("dup", "root")),
    ];

    assert_eq!(find_node(&tree, "dup").map(|n| n.name.as_str()), Some("nested"));
}

#[test]
fn insert_child_without_parent_appends_to_root() {
    let tree = sample_tree();
    let next = insert_child(&tree, None, WorkspaceNode::file("notes.txt", "notes.txt"));

    assert_eq!(next.len(), 3);
    assert_eq!(next[2].id, "notes.txt");
    assert!(Arc::ptr_eq(&tree[0], &next[0]));
    assert!(Arc::ptr_eq(&tree[1], &next[1]));
}

#[test]
fn insert_child_rebuilds_only_the_path_to_the_parent() {
    let tree = sample_tree();
    let next = insert_child(
        &tree,
        Some("src/util"),
        WorkspaceNode::file("src/util/io.rs", "io.rs"),
    );

    let old_util = find_node(&tree, "src/util").unwrap();
    let new_util = find_node(&next, "src/util").unwrap();
    assert_eq!(new_util.children().len(), old_util.children().len() + 1);
    assert_eq!(new_util.children().last().unwrap().id, "src/util/io.rs");

    // Ancestors are fresh allocations, siblings are shared.
    assert!(!Arc::ptr_eq(&tree[0], &next[0]));
    assert!(!Arc::ptr_eq(old_util, new_util));
    assert!(Arc::ptr_eq(&tree[1], &next[1]));
    assert!(Arc::ptr_eq(
        &tree[0].children()[0],
        &next[0].children()[0]
    ));

    // The input tree is untouched.
    assert_eq!(tree, sample_tree());
}

#[test]
fn insert_child_under_file_is_a_noop() {
    let tree = sample_tree();
    let next = insert_child(&tree, Some("README.md"), WorkspaceNode::file("x", "x"));

    assert_eq!(next, tree);
    assert!(same_tree(&tree, &next));
}

#[test]
fn insert_child_under_missing_parent_is_a_noop() {
    let tree = sample_tree();
    let next = insert_child(&tree, Some("nope"), WorkspaceNode::file("x", "x"));

    assert_eq!(next, tree);
    assert!(same_tree(&tree, &next));
}

#[test]
fn update_content_rewrites_matching_file() {
    let tree = sample_tree();
    let next = update_content(&tree, "src/main.rs", "fn main() { run(); }\n");

    let file = find_node(&next, "src/main.rs").unwrap();
    assert_eq!(file.content(), Some("fn main() { run(); }\n"));
    assert_eq!(file.language(), Some("rust"));
    assert!(!Arc::ptr_eq(&tree[0], &next[0]));
    assert!(Arc::ptr_eq(&tree[1], &next[1]));
    assert_eq!(
        find_node(&tree, "src/main.rs").unwrap().content(),
        Some("fn main() {}\n")
    );
}

#[test]
fn update_content_ignores_folders_and_unknown_ids() {
    let tree = sample_tree();

    let next = update_content(&tree, "src", "oops");
    assert!(same_tree(&tree, &next));

    let next = update_content(&tree, "missing", "oops");
    assert_eq!(next, tree);
}

#[test]
fn flatten_files_keeps_traversal_order() {
    let tree = sample_tree();
    let ids: Vec<_> = flatten_files(&tree).iter().map(|n| n.id.clone()).collect();

    assert_eq!(ids, ["src/main.rs", "src/util/mod.rs", "README.md"]);
}

#[test]
fn deep_clone_shares_no_allocations() {
    let tree = sample_tree();
    let copy = deep_clone(&tree);

    assert_eq!(copy, tree);
    assert!(!Arc::ptr_eq(&tree[0], &copy[0]));
    assert!(!Arc::ptr_eq(
        &tree[0].children()[1].children()[0],
        &copy[0].children()[1].children()[0]
    ));
}

#[test]
fn filter_tree_keeps_ancestors_of_matches() {
    let tree = sample_tree();
    let filtered = filter_tree(&tree, "MOD");

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "src");
    assert_eq!(filtered[0].children().len(), 1);
    assert_eq!(filtered[0].children()[0].children()[0].id, "src/util/mod.rs");
}

#[test]
fn filter_tree_blank_query_returns_everything() {
    let tree = sample_tree();
    assert!(same_tree(&filter_tree(&tree, "   "), &tree));
    assert!(filter_tree(&tree, "zzz").is_empty());
}

#[test]
fn filter_tree_matches_the_query_as_typed() {
    let tree = sample_tree();

    assert!(filter_tree(&tree, "mod ").is_empty());
    let ids: Vec<_> = filter_tree(&tree, "main.")
        .iter()
        .flat_map(|node| node.children().iter().map(|child| child.id.clone()))
        .collect();
    assert_eq!(ids, ["src/main.rs"]);
}

#[test]
fn duplicate_id_checks_tree_and_subtree() {
    let tree = sample_tree();

    assert_eq!(
        duplicate_id(&tree, &WorkspaceNode::file("README.md", "again")),
        Some("README.md")
    );

    let nested = WorkspaceNode::folder(
        "docs",
        "docs",
        [WorkspaceNode::file("docs/a", "a"), WorkspaceNode::file("docs/a", "b")],
    );
    assert_eq!(duplicate_id(&tree, &nested), Some("docs/a"));

    assert_eq!(duplicate_id(&tree, &WorkspaceNode::file("fresh", "fresh")), None);
}

#[test]
fn kind_tag_round_trips_through_json() {
    let node = WorkspaceNode::file("a.ts", "a.ts").with_language("typescript");
    let json = serde_json::to_value(&node).unwrap();

    assert_eq!(json["kind"], "file");
    assert_eq!(json["language"], "typescript");
    assert!(json.get("content").is_none());

    let folder: WorkspaceNode =
        serde_json::from_str(r#"{"id":"d","name":"d","kind":"folder"}"#).unwrap();
    assert!(folder.is_folder());
    assert!(folder.children().is_empty());
}
