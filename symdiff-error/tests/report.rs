use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::{Error, EXPR};

/// A test error with a single label.
#[derive(Debug, ErrorKind)]
#[error(
    message = format!("cannot divide `{}` by zero", numerator),
    labels = ["this division"],
    help = format!("make the divisor of {} nonzero", numerator.fg(EXPR)),
)]
struct DivideByZero {
    numerator: String,
}

/// A test error with no fields, no help, and two labels.
#[derive(Debug, ErrorKind)]
#[error(message = "operands do not match", labels = ["left", ""])]
struct Mismatch;

/// Strips the ANSI escapes from a rendered report.
fn plain(err: &Error) -> String {
    let report = err.report_to_string().unwrap();
    String::from_utf8(strip_ansi_escapes::strip(report)).unwrap()
}

#[test]
fn message_and_display() {
    let err = Error::new("(x / 0)", vec![0..7], DivideByZero { numerator: "x".to_string() });
    assert_eq!(err.to_string(), "cannot divide `x` by zero");
    assert!(err.is::<DivideByZero>());
    assert!(!err.is::<Mismatch>());
    assert_eq!(err.downcast_kind::<DivideByZero>().unwrap().numerator, "x");
}

#[test]
fn report_points_at_span() {
    let err = Error::new("((x / 0) + y)", vec![1..8], DivideByZero { numerator: "x".to_string() });
    let report = plain(&err);
    assert!(report.contains("cannot divide `x` by zero"));
    assert!(report.contains("this division"));
    assert!(report.contains("((x / 0) + y)"));
    assert!(report.contains("make the divisor of x nonzero"));
}

#[test]
fn extra_labels_are_dropped() {
    // only one span is available, so the second label has nowhere to point
    let err = Error::whole("x - y", Mismatch);
    assert_eq!(err.spans, vec![0..5]);
    let report = plain(&err);
    assert!(report.contains("operands do not match"));
    assert!(report.contains("left"));
}

/// A test error with only a message.
#[derive(Debug, ErrorKind)]
#[error(message = "something went wrong")]
struct Bare;

#[test]
fn message_only() {
    let err = Error::whole("(x + 1)", Bare);
    assert_eq!(err.to_string(), "something went wrong");
    let report = plain(&err);
    assert!(report.contains("something went wrong"));
    assert!(!report.contains("Help"));
}
