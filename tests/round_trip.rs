use paramedit::document::Document;
use proptest::prelude::*;

fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ \t]*#[ -~]{0,20}",
        "[ \t]*\\[[a-z_. ]{1,12}\\][ \t]*",
        "[ \t]{0,4}[a-z_]{1,10}[ \t]*=[ \t]*[a-z0-9._]{0,10}( # [a-z ]{0,10})?",
        "[ -~]{0,30}",
    ]
}

proptest! {
    #[test]
    fn unedited_documents_serialize_unchanged(lines in prop::collection::vec(line_strategy(), 0..20)) {
        let text = lines.join("\n");
        let document = Document::parse(&text);
        prop_assert_eq!(document.serialize(), text);
    }

    #[test]
    fn editing_one_param_leaves_other_lines_alone(
        lines in prop::collection::vec(line_strategy(), 1..20),
        pick in any::<prop::sample::Index>(),
        value in "[a-z0-9]{1,8}",
    ) {
        let text = lines.join("\n");
        let mut document = Document::parse(&text);
        let params: Vec<usize> = document
            .lines()
            .iter()
            .enumerate()
            .filter(|(_, line)| line.is_param())
            .map(|(index, _)| index)
            .collect();
        prop_assume!(!params.is_empty());
        let target = params[pick.index(params.len())];

        prop_assert!(document.set_param_value(target, value.clone()));
        let reparsed = Document::parse(&document.serialize());
        prop_assert_eq!(reparsed.line_count(), lines.len());
        for (index, original) in lines.iter().enumerate() {
            if index != target {
                prop_assert_eq!(reparsed.lines()[index].raw(), original.as_str());
            }
        }
        prop_assert_eq!(reparsed.lines()[target].value(), Some(value.as_str()));
        prop_assert!(reparsed.lines()[target].is_param());
    }
}
