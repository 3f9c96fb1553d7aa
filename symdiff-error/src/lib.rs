//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that ties an error kind to the expression it was raised on.

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug}, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// The source ID used for reports. Reports are always rendered against the text of a single
/// expression.
pub const SRC_ID: &str = "expr";

/// Represents any kind of error that can occur while building or rewriting an expression.
///
/// Implement this trait by deriving it with `symdiff_attrs::ErrorKind`.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns `self` as [`Any`], so that callers can inspect the concrete kind of an error.
    fn as_any(&self) -> &dyn Any;

    /// The one-line message describing the error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of a rendered expression that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The rendering of the expression this error refers to.
    pub source: String,

    /// The character ranges of [`Error::source`] that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given source text, spans, and kind.
    pub fn new(source: impl Into<String>, spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { source: source.into(), spans, kind: Box::new(kind) }
    }

    /// Creates a new error whose only span covers the entire source text.
    pub fn whole(source: impl Into<String>, kind: impl ErrorKind + 'static) -> Self {
        let source = source.into();
        let span = 0..source.chars().count();
        Self { source, spans: vec![span], kind: Box::new(kind) }
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns a reference to the kind of this error if it is `K`.
    pub fn downcast_kind<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report(&self) -> Report<(&'static str, Range<usize>)> {
        self.kind.build_report(SRC_ID, &self.spans)
    }

    /// Writes the report for this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` / `write` methods.
    pub fn report_to_stderr(&self) -> io::Result<()> {
        self.build_report().eprint((SRC_ID, Source::from(&self.source)))
    }

    /// Renders the report for this error into a string. The output contains ANSI color codes.
    pub fn report_to_string(&self) -> io::Result<String> {
        let mut buf = Vec::new();
        self.build_report().write((SRC_ID, Source::from(&self.source)), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}
