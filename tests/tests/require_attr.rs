//! End-to-end coverage of the requirement checker's contract: evaluation
//! order, every requirement form, and the exact failure messages.

use reqattr_api::{Error, Expr, Operand, Usage, Violation, INTEGER, LIST, NUMERIC, STRING};
use reqattr_tests::Record;
use reqattr_validate::{require_attr, RequireAttr};

fn message(result: Result<(), Error>) -> String {
    result.unwrap_err().to_string()
}

#[test]
fn missing_reader_propagates_unchanged() {
    let record = Record::default();
    let err = require_attr(&record, "no_such", &Expr::none()).unwrap_err();
    match &err {
        Error::MissingReader(inner) => assert_eq!(inner.attr, "no_such"),
        other => panic!("expected the host's own failure, got {other:?}"),
    }
    assert_eq!(err.to_string(), "no reader for attribute `no_such`");
}

#[test]
fn non_map_expression_is_a_usage_error() {
    let record = Record::with_x(1);
    let err = require_attr(&record, "x", &Expr::opaque("something")).unwrap_err();
    assert!(err.is_usage());
    assert_eq!(err.to_string(), "Expression must be a map: something");
}

#[test]
fn unknown_key_is_a_usage_error() {
    let record = Record::with_x(1);
    let expr = Expr::entry("kk", Operand::Raw("0".into()));
    let err = require_attr(&record, "x", &expr).unwrap_err();
    assert!(matches!(err, Error::Usage(Usage::UnknownKey { .. })));
    assert_eq!(err.to_string(), "Invalid expression: {kk: 0}");
}

#[test]
fn multi_entry_expression_lists_all_entries() {
    let record = Record::with_x(1);
    let expr = Expr::map([
        ("a", Operand::Raw("1".into())),
        ("b", Operand::Raw("2".into())),
    ]);
    let err = require_attr(&record, "x", &expr).unwrap_err();
    assert!(matches!(err, Error::Usage(Usage::TooManyEntries { .. })));
    assert_eq!(err.to_string(), "Expression too long: {a: 1, b: 2}");
}

#[test]
fn multi_entry_beats_key_inspection() {
    // Recognized keys do not rescue an overlong expression.
    let record = Record::with_x(1);
    let expr = Expr::map([
        ("to_be_a", Operand::Type(INTEGER)),
        ("to_be", Operand::Name("even".into())),
    ]);
    let err = require_attr(&record, "x", &expr).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Expression too long: {to_be_a: Integer, to_be: even}"
    );
}

#[test]
fn bare_requirement_checks_set_ness() {
    let record = Record::default();
    assert_eq!(
        message(require_attr(&record, "x", &Expr::none())),
        "Attribute must be set: x"
    );

    let record = Record::with_x(1);
    assert!(require_attr(&record, "x", &Expr::none()).is_ok());
}

#[test]
fn to_be_a_single_type() {
    let record = Record::with_x(1);
    assert_eq!(
        message(require_attr(&record, "x", &Expr::to_be_a(STRING))),
        "Attribute `x` must be a String (value:1)"
    );
    assert!(require_attr(&record, "x", &Expr::to_be_a(INTEGER)).is_ok());
    // Supertype reference: an integer is also numeric.
    assert!(require_attr(&record, "x", &Expr::to_be_a(NUMERIC)).is_ok());
}

#[test]
fn to_be_a_type_list() {
    let record = Record::with_x(1);
    assert_eq!(
        message(require_attr(&record, "x", &Expr::to_be_one_of([STRING, LIST]))),
        "Attribute `x` must be a String or List (value:1)"
    );
    assert!(require_attr(&record, "x", &Expr::to_be_one_of([STRING, INTEGER])).is_ok());
    // Duplicates are redundant but harmless.
    assert!(require_attr(&record, "x", &Expr::to_be_one_of([INTEGER, INTEGER])).is_ok());
}

#[test]
fn to_be_a_quotes_string_values() {
    let record = Record {
        name: Some("ada".to_string()),
        ..Record::default()
    };
    assert_eq!(
        message(require_attr(&record, "name", &Expr::to_be_a(INTEGER))),
        "Attribute `name` must be a Integer (value:\"ada\")"
    );
}

#[test]
fn to_respond_to() {
    let record = Record::with_x(1);
    assert_eq!(
        message(require_attr(&record, "x", &Expr::to_respond_to("each"))),
        "Attribute `x` must respond to `each` (value:1)"
    );
    assert!(require_attr(&record, "x", &Expr::to_respond_to("to_i")).is_ok());

    let record = Record {
        jobs: Some(vec!["engines".to_string()]),
        ..Record::default()
    };
    assert!(require_attr(&record, "jobs", &Expr::to_respond_to("each")).is_ok());
}

#[test]
fn conditions_on_an_integer() {
    let record = Record::with_x(1);
    assert_eq!(
        message(require_attr(&record, "x", &Expr::to_be("even"))),
        "Attribute `x` must be even (value:1)"
    );
    assert_eq!(
        message(require_attr(&record, "x", &Expr::not_to_be("odd"))),
        "Attribute `x` must not be odd (value:1)"
    );
    assert!(require_attr(&record, "x", &Expr::to_be("odd")).is_ok());
    assert!(require_attr(&record, "x", &Expr::not_to_be("even")).is_ok());
}

#[test]
fn responder_precheck_short_circuits() {
    // No `empty?` on an integer: the responder message wins over the
    // condition message, proving the pre-check fires first.
    let record = Record::with_x(1);
    assert_eq!(
        message(require_attr(&record, "x", &Expr::to_be("empty"))),
        "Attribute `x` must respond to `empty?` (value:1)"
    );
    assert_eq!(
        message(require_attr(&record, "x", &Expr::not_to_be("empty"))),
        "Attribute `x` must respond to `empty?` (value:1)"
    );
}

#[test]
fn conditions_on_a_string() {
    let record = Record {
        name: Some(String::new()),
        ..Record::default()
    };
    assert!(require_attr(&record, "name", &Expr::to_be("empty")).is_ok());
    assert_eq!(
        message(require_attr(&record, "name", &Expr::not_to_be("empty"))),
        "Attribute `name` must not be empty (value:\"\")"
    );
}

#[test]
fn conditions_on_a_float() {
    let record = Record {
        ratio: Some(f64::NAN),
        ..Record::default()
    };
    assert!(require_attr(&record, "ratio", &Expr::to_be_a(NUMERIC)).is_ok());
    assert_eq!(
        message(require_attr(&record, "ratio", &Expr::not_to_be("nan"))),
        "Attribute `ratio` must not be nan (value:NaN)"
    );
}

#[test]
fn severities_are_pattern_matchable() {
    let record = Record::with_x(1);

    let violation = require_attr(&record, "x", &Expr::to_be_a(STRING)).unwrap_err();
    assert!(violation.is_violation());
    assert!(matches!(violation, Error::Violation(Violation::WrongType { .. })));

    let usage = require_attr(&record, "x", &Expr::opaque("x")).unwrap_err();
    assert!(usage.is_usage());
    assert!(matches!(usage, Error::Usage(Usage::NotAMap { .. })));
}

#[test]
fn method_position_calls() {
    let record = Record::with_x(2);
    assert!(record.require_attr("x", &Expr::to_be("even")).is_ok());
    assert!(record.require_attr("x", &Expr::to_be("odd")).is_err());
}
