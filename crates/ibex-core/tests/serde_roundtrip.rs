use ibex_core::{Diagnostic, DiagnosticKind, Diagnostics, ErrorInfo, IbexError};

#[test]
fn error_round_trips_through_json() {
    let err = IbexError::Parse(
        ErrorInfo::new("response-time", "invalid float literal")
            .with_context("value", "slow")
            .with_hint("response times must be numeric"),
    );
    let json = serde_json::to_string_pretty(&err).expect("serialize");
    assert!(json.contains("\"family\": \"Parse\""));
    let decoded: IbexError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}

#[test]
fn diagnostics_serialize_as_plain_list() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.push(Diagnostic::new(
        DiagnosticKind::ColumnCount,
        Some(3),
        4,
        5,
        "wrong number of columns in input csv",
    ));
    let value = serde_json::to_value(&diagnostics).expect("serialize");
    let list = value.as_array().expect("array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["kind"], "column_count");
    assert_eq!(list[0]["row"], 3);

    let decoded: Diagnostics = serde_json::from_value(value).expect("deserialize");
    assert_eq!(decoded, diagnostics);
}
