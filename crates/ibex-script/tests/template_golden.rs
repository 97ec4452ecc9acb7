use ibex_core::{DiagnosticKind, IbexError};
use ibex_script::{format_record, StimulusRecord, TrialTemplate};

fn context_record(condition: &str, item: &str, context: &str, target: &str) -> StimulusRecord {
    StimulusRecord::from_pairs([
        ("condition", condition),
        ("item", item),
        ("context", context),
        ("target", target),
    ])
}

#[test]
fn filler_with_context_matches_golden() {
    let record = context_record(
        "filler_d",
        "93",
        "this is context paragraph",
        "this is test sentence",
    );
    let fragment = format_record(&record, true, 40).expect("format");
    assert_eq!(
        fragment.value,
        "[[\"filler_d\",93], q,{s: {html: \"<div style='width: 40em;'> <b>Context:</b>this is context paragraph</div><div style='width: 40em;'><p></p><b>Target:</b>this is test sentence</div>\"}}],\n"
    );
    assert!(fragment.diagnostics.is_empty());
}

#[test]
fn condition_with_context_matches_golden() {
    let record = context_record("cond_a", "12", "this is context!", "this is test sentence!");
    let fragment = format_record(&record, true, 40).expect("format");
    assert_eq!(
        fragment.value,
        "[[\"cond_a\",12], q,{s: {html: \"<div style='width: 40em;'> <b>Context:</b>this is context!</div><div style='width: 40em;'><p></p><b>Target:</b>this is test sentence!</div>\"}}],\n"
    );
}

#[test]
fn no_context_omits_second_container() {
    let record = StimulusRecord::from_pairs([
        ("condition", "cond_a"),
        ("item", "12"),
        ("target", "this is test sentence!"),
    ]);
    let fragment = format_record(&record, false, 40).expect("format");
    assert_eq!(
        fragment.value,
        "[[\"cond_a\",12], q,{s: {html: \"<div style='width: 40em;'><b>Target:</b>this is test sentence!</div>\"}}],\n"
    );
    assert!(!fragment.value.contains("Context:"));
    assert!(fragment.diagnostics.is_empty());
}

#[test]
fn second_container_width_ignores_primary_width() {
    let template = TrialTemplate {
        condition: "t_a",
        item: "1",
        context: Some("ctx"),
        target: "tgt",
        width: 55,
    };
    let rendered = template.render();
    assert!(rendered.contains("<div style='width: 55em;'> <b>Context:</b>ctx</div>"));
    assert!(rendered.contains("<div style='width: 40em;'><p></p><b>Target:</b>tgt"));
}

#[test]
fn excess_fields_without_context_warn_but_format() {
    let record = context_record("f_x", "7", "unused", "kept");
    let fragment = format_record(&record, false, 40).expect("format");
    assert_eq!(fragment.diagnostics.count(DiagnosticKind::ExcessFields), 1);
    assert!(fragment.value.contains("<b>Target:</b>kept"));
    assert!(!fragment.value.contains("unused"));
}

#[test]
fn missing_context_field_is_fatal_in_context_mode() {
    let record = StimulusRecord::from_pairs([
        ("condition", "t_a"),
        ("item", "3"),
        ("target", "only a target"),
    ]);
    let err = format_record(&record, true, 40).expect_err("must fail");
    match err {
        IbexError::Record(info) => {
            assert_eq!(info.code, "record-field");
            assert_eq!(info.context.get("field").map(String::as_str), Some("context"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn no_context_field_count_is_checked_before_formatting() {
    let record = StimulusRecord::from_pairs([("condition", "f_x"), ("target", "kept")]);
    let err = format_record(&record, false, 40).expect_err("item is required");
    assert_eq!(err.info().context.get("field").map(String::as_str), Some("item"));

    let record = StimulusRecord::from_pairs([("condition", "f_x"), ("item", "8")]);
    assert!(format_record(&record, false, 40).is_err());

    let surplus = context_record("f_x", "7", "unused", "kept");
    let fragment = format_record(&surplus, false, 40).expect("format");
    let warning = fragment.diagnostics.iter().next().expect("diagnostic");
    assert_eq!(warning.found, 4);
    assert!(warning.message.contains("4 fields"));
}
