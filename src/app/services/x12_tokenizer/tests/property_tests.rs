//! Property tests for the tokenizer

use proptest::prelude::*;

use super::isa_header;
use crate::app::services::x12_tokenizer::tokenize;

fn segment_strategy() -> impl Strategy<Value = (String, Vec<String>)> {
    (
        "[A-Z][A-Z0-9]{1,2}",
        prop::collection::vec("[A-Za-z0-9 .-]{0,8}", 0..6),
    )
}

proptest! {
    #[test]
    fn tokenize_never_panics(input in "\\PC{0,300}") {
        let _ = tokenize(&input);
    }

    #[test]
    fn tokenize_preserves_tag_sequence(segments in prop::collection::vec(segment_strategy(), 1..20)) {
        let mut content = isa_header('*', '>', '~');
        for (tag, elements) in &segments {
            content.push_str(tag);
            for element in elements {
                content.push('*');
                content.push_str(element);
            }
            content.push('~');
        }

        let document = tokenize(&content);
        let mut expected = vec!["ISA"];
        expected.extend(segments.iter().map(|(tag, _)| tag.as_str()));
        prop_assert_eq!(document.tags(), expected);

        for (segment, (_, elements)) in document.segments()[1..].iter().zip(&segments) {
            let trimmed: Vec<String> = elements.iter().map(|e| e.trim().to_string()).collect();
            prop_assert_eq!(segment.elements(), trimmed.as_slice());
        }
    }

    #[test]
    fn tokenize_is_deterministic(input in "[A-Z0-9*~\\n ]{0,200}") {
        prop_assert_eq!(tokenize(&input), tokenize(&input));
    }
}
