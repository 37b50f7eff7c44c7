//! Error types for the bitfield compiler.

use std::fmt;
use std::io;
use std::path::PathBuf;

use snafu::Snafu;

/// A 1-based line and column in preprocessed source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pos {
    pub line: usize,
    pub column: usize,
}

impl Pos {
    /// Locates byte `offset` within `source`.
    pub fn at(source: &str, offset: usize) -> Self {
        let before = &source[..offset.min(source.len())];
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        Self {
            line: before.matches('\n').count() + 1,
            column: before[line_start..].chars().count() + 1,
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors that abort compilation.
///
/// None of these are recoverable: a description that fails anywhere produces no output.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// A source or included file could not be read.
    #[snafu(display("{}: {source}", path.display()))]
    Io { path: PathBuf, source: io::Error },

    /// A preprocessor directive was malformed or failed.
    #[snafu(display("{file}:{line}: {message}"))]
    Preprocess {
        file: String,
        line: usize,
        message: String,
    },

    /// The text does not match the grammar.
    #[snafu(display("{pos}: parse error: {message}"))]
    Parse { pos: Pos, message: String },

    /// A statement keyword the resolver has no handling for.
    #[snafu(display("{pos}: unhandled construct `{keyword}`"))]
    Unhandled { pos: Pos, keyword: String },

    /// A block's total width is not a whole number of words.
    #[snafu(display("block `{block}` is {bits} bit(s) wide, which is not a multiple of 64"))]
    BlockSize { block: String, bits: u64 },

    /// A `field_high` extends past the top of its word.
    #[snafu(display(
        "field_high `{field}` in block `{block}` reaches bit {high}, past the end of its 64-bit word"
    ))]
    FieldHighOverflow {
        block: String,
        field: String,
        high: u32,
    },

    /// An ordinary field straddles two words.
    #[snafu(display(
        "field `{field}` in block `{block}` starts at bit {shift} of its word and is {bits} bit(s) \
         wide, crossing a word boundary"
    ))]
    FieldCrossesWord {
        block: String,
        field: String,
        shift: u32,
        bits: u32,
    },

    /// A field declared with zero bits.
    #[snafu(display("field `{field}` in block `{block}` has zero width"))]
    ZeroWidth { block: String, field: String },

    /// Two fields of one block share a name after normalization.
    #[snafu(display("block `{block}` declares field `{field}` more than once"))]
    DuplicateField { block: String, field: String },

    /// Two top-level declarations share a type name.
    #[snafu(display("`{name}` is declared more than once"))]
    DuplicateName { name: String },

    /// A tagged union that declares no tags.
    #[snafu(display("tagged union `{union}` declares no tags"))]
    EmptyUnion { union: String },

    /// A tag name is repeated within one union.
    #[snafu(display("tagged union `{union}` declares tag `{tag}` more than once"))]
    DuplicateTag { union: String, tag: String },

    /// A capability block whose discriminant cannot be resolved.
    #[snafu(display("capability block `{block}`: {message}"))]
    Discriminant { block: String, message: String },

    /// A configured capability module is not a valid Rust path.
    #[snafu(display("invalid capability module path `{path}`: {source}"))]
    CapModule { path: String, source: syn::Error },

    /// The generated tokens did not form a valid Rust file.
    #[snafu(context(false), display("generated code is malformed: {source}"))]
    Render { source: syn::Error },
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
