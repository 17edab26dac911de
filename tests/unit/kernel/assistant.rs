use super::*;

#[test]
fn testing_prompts_take_priority() {
    assert_eq!(reply("Please add tests", None), TEST_REPLY);
    assert!(reply("add a unit test and refactor", None).contains("Vitest"));
}

#[test]
fn refactor_prompts_are_deterministic() {
    for _ in 0..8 {
        assert_eq!(reply("please REFACTOR this", None), REFACTOR_REPLY);
    }
}

#[test]
fn bug_fix_and_error_share_a_reply() {
    assert_eq!(reply("there's a bug", None), FIX_REPLY);
    assert_eq!(reply("can you fix it", None), FIX_REPLY);
    assert_eq!(reply("I get an Error on load", None), FIX_REPLY);
}

#[test]
fn explain_uses_context_when_present() {
    assert_eq!(
        reply("explain this", Some("fn main() {}")),
        "Here's a walkthrough based on the current file: fn main() {}"
    );
    assert_eq!(reply("explain this", None), EXPLAIN_REPLY);
    assert_eq!(reply("explain this", Some("")), EXPLAIN_REPLY);
}

#[test]
fn unmatched_prompts_draw_from_the_canned_pool() {
    for _ in 0..16 {
        let text = reply("say something creative", None);
        assert!(!text.is_empty());
        assert!(CANNED_RESPONSES.contains(&text.as_str()));
    }
}

#[test]
fn context_snippet_trims_truncates_and_collapses() {
    let file = WorkspaceNode::file("a", "a").with_content("\n\n  let   x =\n\t1;  \n");
    assert_eq!(context_snippet(&file, 240).as_deref(), Some("let x = 1;"));

    let long = WorkspaceNode::file("b", "b").with_content("abcdef ghij");
    assert_eq!(context_snippet(&long, 7).as_deref(), Some("abcdef "));
}

#[test]
fn context_snippet_is_none_for_empty_or_folder() {
    assert!(context_snippet(&WorkspaceNode::file("a", "a"), 240).is_none());
    assert!(context_snippet(&WorkspaceNode::file("a", "a").with_content(""), 240).is_none());
    assert!(context_snippet(&WorkspaceNode::file("a", "a").with_content("   \n"), 240).is_none());
    assert!(context_snippet(&WorkspaceNode::folder("d", "d", []), 240).is_none());
}
