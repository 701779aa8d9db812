//! Property tests for the endpoint text grammar.

use proptest::prelude::*;

use bayline::domain::value_objects::link_text::{
    self, counterpart_name, KW_FROM, KW_TO, PENDING_MARK,
};

/// Generated names never contain whitespace, so they can never embed the
/// `" hacia "` / `" desde "` anchors.
fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][A-Z0-9_]{0,11}")
        .unwrap()
        .prop_filter("not the external placeholder", |s| s != "EXTERNO")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the counterpart written by `out_text` is always recovered
    /// by splitting on the anchor and stripping the pending mark.
    #[test]
    fn property_out_text_counterpart_round_trips(
        signal in name(),
        dest in name(),
        pending in any::<bool>(),
    ) {
        let text = link_text::out_text(&signal, &dest, pending);
        let (left, right) = link_text::split_on(&text, KW_TO).unwrap();
        prop_assert_eq!(left, signal);
        prop_assert_eq!(counterpart_name(&right), dest);
        prop_assert_eq!(text.ends_with(PENDING_MARK), pending);
    }

    /// PROPERTY: rewriting the counterpart never touches the name side, and
    /// rewriting the name never touches the counterpart side.
    #[test]
    fn property_one_sided_rewrites_stay_one_sided(
        signal in name(),
        dest in name(),
        other in name(),
    ) {
        let text = link_text::in_text(&signal, &dest);

        let retargeted = link_text::rewrite_counterpart(&text, KW_FROM, &signal, &other);
        prop_assert_eq!(
            link_text::name_side(&retargeted, KW_FROM, "?"),
            signal.as_str()
        );

        let renamed = link_text::rewrite_name(&text, KW_FROM, &other);
        let (_, right) = link_text::split_on(&renamed, KW_FROM).unwrap();
        prop_assert_eq!(right, dest);
    }

    /// PROPERTY: prefix renames preserve whatever trails the old name,
    /// pending mark included, and leave non-prefix occurrences alone.
    #[test]
    fn property_prefix_rename_preserves_suffix(
        signal in name(),
        old in name(),
        new in name(),
        pending in any::<bool>(),
    ) {
        let text = link_text::out_text(&signal, &old, pending);
        let renamed = link_text::rename_counterpart_prefix(&text, KW_TO, &old, &new);
        prop_assert_eq!(renamed, link_text::out_text(&signal, &new, pending));

        // the same name embedded in the signal side must never be rewritten
        prop_assume!(!"OTRO".starts_with(old.as_str()));
        let embedded = link_text::out_text(&old, "OTRO", pending);
        let untouched = link_text::rename_counterpart_prefix(&embedded, KW_TO, &old, &new);
        prop_assert_eq!(untouched, embedded);
    }

    /// PROPERTY: the grammar helpers never panic on arbitrary input.
    #[test]
    fn property_grammar_helpers_never_panic(text in "(?s).{0,128}") {
        let _ = link_text::infer_signal_name(&text);
        let _ = link_text::pending_reset(&text, KW_TO);
        let _ = link_text::rename_counterpart_prefix(&text, KW_FROM, "A", "B");
        let _ = counterpart_name(&text);
    }
}
