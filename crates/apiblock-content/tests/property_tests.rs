//! Property tests for the marker scanner

use apiblock_content::{find_blocks, rewrite};
use proptest::prelude::*;

proptest! {
    #[test]
    fn marker_free_text_passes_through_unchanged(s in "[^<]*") {
        // Without a '<' there can be no marker, so the rewrite is identity.
        prop_assert_eq!(rewrite(&s), s);
    }

    #[test]
    fn response_and_end_markers_alone_pass_through(
        s in "([^<]{0,8}(<!-- api:response -->|<!-- api:end -->)?){0,6}"
    ) {
        // Response and end markers never trigger a rewrite on their own;
        // only a start marker opens a block.
        prop_assert_eq!(rewrite(&s), s);
    }

    #[test]
    fn rewrite_never_panics_and_is_deterministic(s in "\\PC*") {
        let first = rewrite(&s);
        let second = rewrite(&s);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn marker_soup_is_total(
        s in "(<!-- api:start -->|<!-- api:start |<!-- api:response -->|<!-- api:end -->|-->|text|\n){0,12}"
    ) {
        // Arbitrary combinations of whole and partial markers must always
        // produce some output and a consistent block list.
        let output = rewrite(&s);
        let blocks = find_blocks(&s);
        // every well-formed block became a widget
        prop_assert_eq!(output.matches("<details").count(), blocks.len());
    }

    #[test]
    fn block_content_survives_the_rewrite(
        before in "[a-z ]{0,12}",
        body in "[a-zA-Z0-9 ]{1,24}",
        after in "[a-z ]{0,12}"
    ) {
        let source = format!("{before}<!-- api:start -->{body}<!-- api:end -->{after}");
        let output = rewrite(&source);
        prop_assert!(output.contains(body.trim()));
        prop_assert!(output.starts_with(&before));
        prop_assert!(output.ends_with(&after));
    }
}
