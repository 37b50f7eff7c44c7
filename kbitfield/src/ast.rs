//! Parse tree and grammar for preprocessed bitfield descriptions.

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{
    alpha1, alphanumeric1, char, digit1, hex_digit1, multispace1, not_line_ending, satisfy,
};
use nom::combinator::{cut, map_res, not, opt, peek, recognize};
use nom::error::{ErrorKind, FromExternalError, ParseError};
use nom::multi::{many0, separated_list0};
use nom::sequence::{delimited, pair, preceded, terminated, tuple};
use nom::{IResult, Offset, Parser};

use crate::error::{Error, Pos, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct File<'a> {
    pub items: Vec<Item<'a>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Item<'a> {
    Block(Block<'a>),
    TaggedUnion(TaggedUnion<'a>),
}

/// A `block` statement. Fields are in declaration order, most significant first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block<'a> {
    pub name: &'a str,
    pub params: Vec<&'a str>,
    pub fields: Vec<Field<'a>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field<'a> {
    Field { name: &'a str, bits: u32 },
    FieldHigh { name: &'a str, bits: u32 },
    Padding { bits: u32 },
}

impl<'a> Field<'a> {
    pub fn bits(&self) -> u32 {
        match *self {
            Self::Field { bits, .. } | Self::FieldHigh { bits, .. } | Self::Padding { bits } => bits,
        }
    }

    pub fn name(&self) -> Option<&'a str> {
        match *self {
            Self::Field { name, .. } | Self::FieldHigh { name, .. } => Some(name),
            Self::Padding { .. } => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaggedUnion<'a> {
    pub name: &'a str,
    pub tag_field: &'a str,
    pub tags: Vec<Tag<'a>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tag<'a> {
    pub name: &'a str,
    pub value: u64,
}

/// Parses a whole preprocessed description.
pub fn parse(source: &str) -> Result<File<'_>> {
    match file(source) {
        Ok((_, file)) => Ok(file),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(e.into_error(source)),
        Err(nom::Err::Incomplete(_)) => Err(Error::Parse {
            pos: Pos::at(source, source.len()),
            message: "unexpected end of input".to_string(),
        }),
    }
}

/// Where and why the grammar rejected the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxError<'a> {
    pub input: &'a str,
    pub kind: SyntaxErrorKind<'a>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyntaxErrorKind<'a> {
    Nom(ErrorKind),
    Expected(&'static str),
    Unhandled(&'a str),
    InvalidInteger,
}

impl<'a> SyntaxError<'a> {
    fn into_error(self, source: &str) -> Error {
        let pos = Pos::at(source, source.offset(self.input));
        let message = match self.kind {
            SyntaxErrorKind::Unhandled(keyword) => {
                return Error::Unhandled {
                    pos,
                    keyword: keyword.to_string(),
                }
            }
            SyntaxErrorKind::Expected(what) => format!("expected {what}"),
            SyntaxErrorKind::InvalidInteger => "integer literal out of range".to_string(),
            SyntaxErrorKind::Nom(kind) => format!("unexpected input ({})", kind.description()),
        };
        Error::Parse { pos, message }
    }
}

impl<'a> ParseError<&'a str> for SyntaxError<'a> {
    fn from_error_kind(input: &'a str, kind: ErrorKind) -> Self {
        Self {
            input,
            kind: SyntaxErrorKind::Nom(kind),
        }
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a, E> FromExternalError<&'a str, E> for SyntaxError<'a> {
    fn from_external_error(input: &'a str, _kind: ErrorKind, _e: E) -> Self {
        Self {
            input,
            kind: SyntaxErrorKind::InvalidInteger,
        }
    }
}

type PResult<'a, T> = IResult<&'a str, T, SyntaxError<'a>>;

fn line_comment(input: &str) -> PResult<&str> {
    recognize(pair(alt((tag("--"), tag("//"))), not_line_ending))(input)
}

fn whitespace0(input: &str) -> PResult<&str> {
    recognize(many0(alt((multispace1, line_comment))))(input)
}

/// Relabels a failed parser's error as "expected `what`".
fn expected<'a, O>(
    what: &'static str,
    mut parser: impl FnMut(&'a str) -> PResult<'a, O>,
) -> impl FnMut(&'a str) -> PResult<'a, O> {
    move |input| {
        parser(input).map_err(|e| {
            e.map(|mut err| {
                if let SyntaxErrorKind::Nom(_) = err.kind {
                    err.kind = SyntaxErrorKind::Expected(what);
                }
                err
            })
        })
    }
}

fn ident_char(input: &str) -> PResult<char> {
    satisfy(|c| c == '_' || c.is_ascii_alphanumeric())(input)
}

fn identifier(input: &str) -> PResult<&str> {
    preceded(
        whitespace0,
        recognize(pair(
            alt((alpha1, tag("_"))),
            many0(alt((alphanumeric1, tag("_")))),
        )),
    )(input)
}

fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> PResult<'a, &'a str> {
    move |input| preceded(whitespace0, terminated(tag(word), not(peek(ident_char))))(input)
}

fn operator<'a>(c: char) -> impl FnMut(&'a str) -> PResult<'a, char> {
    move |input| preceded(whitespace0, char(c))(input)
}

fn integer(input: &str) -> PResult<u64> {
    preceded(
        whitespace0,
        alt((
            map_res(
                preceded(
                    alt((tag("0x"), tag("0X"))),
                    terminated(hex_digit1, not(peek(ident_char))),
                ),
                |digits: &str| u64::from_str_radix(digits, 16),
            ),
            map_res(
                terminated(digit1, not(peek(ident_char))),
                |digits: &str| digits.parse::<u64>(),
            ),
        )),
    )(input)
}

fn width(input: &str) -> PResult<u32> {
    map_res(expected("a bit width", integer), u32::try_from)(input)
}

fn terminator(input: &str) -> PResult<Option<char>> {
    opt(alt((operator(';'), operator(','))))(input)
}

/// Closes a `{ ... }` body, reporting a leftover statement keyword as unhandled.
fn end_of_body<'a>(
    report_keywords: bool,
    what: &'static str,
) -> impl FnMut(&'a str) -> PResult<'a, ()> {
    move |input| {
        if let Ok((input, _)) = operator('}')(input) {
            return Ok((input, ()));
        }
        let (rest, _) = whitespace0(input)?;
        let kind = match identifier(rest) {
            Ok((_, word)) if report_keywords => SyntaxErrorKind::Unhandled(word),
            _ => SyntaxErrorKind::Expected(what),
        };
        Err(nom::Err::Failure(SyntaxError { input: rest, kind }))
    }
}

fn field(input: &str) -> PResult<Field> {
    terminated(
        alt((
            preceded(
                keyword("field_high"),
                cut(pair(expected("a field name", identifier), width)),
            )
            .map(|(name, bits)| Field::FieldHigh { name, bits }),
            preceded(
                keyword("field"),
                cut(pair(expected("a field name", identifier), width)),
            )
            .map(|(name, bits)| Field::Field { name, bits }),
            preceded(keyword("padding"), cut(width)).map(|bits| Field::Padding { bits }),
        )),
        terminator,
    )(input)
}

fn param_list(input: &str) -> PResult<Vec<&str>> {
    delimited(
        operator('('),
        separated_list0(operator(','), identifier),
        cut(expected("`)`", operator(')'))),
    )(input)
}

fn block(input: &str) -> PResult<Block> {
    let (input, _) = keyword("block")(input)?;
    let (input, (name, params, _, fields, _)) = cut(tuple((
        expected("a block name", identifier),
        opt(param_list),
        expected("`{`", operator('{')),
        many0(field),
        end_of_body(true, "a field or `}`"),
    )))(input)?;
    Ok((
        input,
        Block {
            name,
            params: params.unwrap_or_default(),
            fields,
        },
    ))
}

fn tag_decl(input: &str) -> PResult<Tag> {
    terminated(
        tuple((opt(keyword("tag")), identifier, opt(operator('=')), integer)),
        terminator,
    )
    .map(|(_, name, _, value)| Tag { name, value })
    .parse(input)
}

fn tagged_union(input: &str) -> PResult<TaggedUnion> {
    let (input, _) = keyword("tagged_union")(input)?;
    let (input, (name, tag_field, _, tags, _)) = cut(tuple((
        expected("a union name", identifier),
        expected("a tag field name", identifier),
        expected("`{`", operator('{')),
        many0(tag_decl),
        end_of_body(false, "a tag and its value, or `}`"),
    )))(input)?;
    Ok((
        input,
        TaggedUnion {
            name,
            tag_field,
            tags,
        },
    ))
}

fn item(input: &str) -> PResult<Item> {
    alt((block.map(Item::Block), tagged_union.map(Item::TaggedUnion)))(input)
}

fn file(input: &str) -> PResult<File> {
    let (input, items) = many0(item)(input)?;
    let (input, _) = whitespace0(input)?;
    if input.is_empty() {
        return Ok((input, File { items }));
    }
    let kind = match identifier(input) {
        Ok((_, word)) => SyntaxErrorKind::Unhandled(word),
        Err(_) => SyntaxErrorKind::Expected("`block` or `tagged_union`"),
    };
    Err(nom::Err::Failure(SyntaxError { input, kind }))
}
