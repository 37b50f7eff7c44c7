//! A small C-style preprocessor for description files.
//!
//! Descriptions use `#define` constants, `#if` conditionals and `#include` the way C headers do.
//! Directive lines and lines in inactive branches are replaced by empty lines, so positions in a
//! file without includes still line up with the original text.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case};
use nom::character::complete::*;
use nom::combinator::*;
use nom::multi::{fold_many0, many0};
use nom::sequence::{delimited, pair, preceded, terminated};
use nom::IResult;

use snafu::ResultExt;

use crate::error::{Error, IoSnafu, Result};

const MAX_INCLUDE_DEPTH: usize = 64;

#[derive(Clone, Debug, Default)]
pub struct Preprocessor {
    defines: HashMap<String, String>,
    include_dirs: Vec<PathBuf>,
}

/// One level of `#if` nesting.
struct Condition {
    keyword: &'static str,
    line: usize,
    parent_active: bool,
    active: bool,
    /// Some branch at this level has already been taken.
    taken: bool,
    seen_else: bool,
}

/// Where a directive came from, for error reporting.
struct Location<'a> {
    file: &'a str,
    line: usize,
}

impl Location<'_> {
    fn error(&self, message: impl Into<String>) -> Error {
        Error::Preprocess {
            file: self.file.to_string(),
            line: self.line,
            message: message.into(),
        }
    }
}

impl Preprocessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines an object-like macro, replacing any previous definition.
    pub fn define(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.defines.insert(name.into(), value.into());
    }

    /// Appends a directory to the `#include` search path.
    pub fn include_dir(&mut self, dir: impl Into<PathBuf>) {
        self.include_dirs.push(dir.into());
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.defines.contains_key(name)
    }

    /// Preprocesses `source`. `origin` names the file it was read from, if any, and is searched
    /// first for quoted includes.
    ///
    /// Definitions made by the source remain in effect afterwards.
    pub fn run(&mut self, source: &str, origin: Option<&Path>) -> Result<String> {
        let mut out = String::with_capacity(source.len());
        self.expand(source, origin, 0, &mut out)?;
        Ok(out)
    }

    pub fn run_file(&mut self, path: &Path) -> Result<String> {
        let source = read(path)?;
        self.run(&source, Some(path))
    }

    fn expand(
        &mut self,
        source: &str,
        origin: Option<&Path>,
        depth: usize,
        out: &mut String,
    ) -> Result<()> {
        let file = origin.map_or_else(|| "<input>".to_string(), |path| path.display().to_string());
        let stripped = strip_comments(source);
        let mut conditions: Vec<Condition> = Vec::new();

        let mut lines = stripped.lines().enumerate();
        while let Some((index, first)) = lines.next() {
            let location = Location {
                file: &file,
                line: index + 1,
            };

            let mut logical = first.to_string();
            let mut continued = 0;
            while logical.ends_with('\\') {
                logical.pop();
                match lines.next() {
                    Some((_, next)) => {
                        logical.push_str(next);
                        continued += 1;
                    }
                    None => break,
                }
            }

            let active = conditions.iter().all(|condition| condition.active);
            match logical.trim_start().strip_prefix('#') {
                Some(directive) => {
                    self.directive(directive, active, &mut conditions, &location, origin, depth, out)?;
                }
                None if active => {
                    out.push_str(&self.substitute(&logical, &mut Vec::new()));
                    out.push('\n');
                }
                None => out.push('\n'),
            }
            for _ in 0..continued {
                out.push('\n');
            }
        }

        match conditions.last() {
            Some(open) => Err(Error::Preprocess {
                file,
                line: open.line,
                message: format!("unterminated #{}", open.keyword),
            }),
            None => Ok(()),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn directive(
        &mut self,
        directive: &str,
        active: bool,
        conditions: &mut Vec<Condition>,
        location: &Location,
        origin: Option<&Path>,
        depth: usize,
        out: &mut String,
    ) -> Result<()> {
        let directive = directive.trim();
        let end = directive
            .find(|c: char| !is_ident_char(c))
            .unwrap_or(directive.len());
        let (name, args) = (&directive[..end], directive[end..].trim());

        match name {
            "if" | "ifdef" | "ifndef" => {
                let taken = active
                    && match name {
                        "ifdef" => self.is_defined(macro_name(args, location)?),
                        "ifndef" => !self.is_defined(macro_name(args, location)?),
                        _ => self.condition(args, location)?,
                    };
                conditions.push(Condition {
                    keyword: match name {
                        "ifdef" => "ifdef",
                        "ifndef" => "ifndef",
                        _ => "if",
                    },
                    line: location.line,
                    parent_active: active,
                    active: taken,
                    taken,
                    seen_else: false,
                });
            }
            "elif" => {
                let condition = conditions
                    .last_mut()
                    .ok_or_else(|| location.error("#elif without #if"))?;
                if condition.seen_else {
                    return Err(location.error("#elif after #else"));
                }
                if !condition.parent_active || condition.taken {
                    condition.active = false;
                } else {
                    let value = self.condition(args, location)?;
                    condition.active = value;
                    condition.taken = value;
                }
            }
            "else" => {
                let condition = conditions
                    .last_mut()
                    .ok_or_else(|| location.error("#else without #if"))?;
                if condition.seen_else {
                    return Err(location.error("#else after #else"));
                }
                condition.active = condition.parent_active && !condition.taken;
                condition.taken = true;
                condition.seen_else = true;
            }
            "endif" => {
                conditions
                    .pop()
                    .ok_or_else(|| location.error("#endif without #if"))?;
            }
            _ if !active => (),
            "define" => {
                let end = args.find(|c: char| !is_ident_char(c)).unwrap_or(args.len());
                let (defined, value) = args.split_at(end);
                if defined.is_empty() {
                    return Err(location.error("#define without a name"));
                }
                if value.starts_with('(') {
                    return Err(location.error(format!(
                        "function-like macro `{defined}` is not supported"
                    )));
                }
                self.define(defined, value.trim());
            }
            "undef" => {
                self.defines.remove(macro_name(args, location)?);
            }
            "include" => {
                if depth >= MAX_INCLUDE_DEPTH {
                    return Err(location.error("#include nested too deeply"));
                }
                let target = include_target(args)
                    .ok_or_else(|| location.error(format!("malformed #include `{args}`")))?;
                let path = self
                    .locate(target, origin)
                    .ok_or_else(|| location.error(format!("cannot find include file `{target}`")))?;
                let source = read(&path)?;
                return self.expand(&source, Some(&path), depth + 1, out);
            }
            "error" => return Err(location.error(format!("#error {args}"))),
            "pragma" | "" => (),
            other => return Err(location.error(format!("unknown directive #{other}"))),
        }
        out.push('\n');
        Ok(())
    }

    fn condition(&self, expr: &str, location: &Location) -> Result<bool> {
        Eval::new(&self.defines)
            .evaluate(expr)
            .map(|value| value != 0)
            .ok_or_else(|| location.error(format!("invalid #if expression `{expr}`")))
    }

    fn locate(&self, target: &str, origin: Option<&Path>) -> Option<PathBuf> {
        origin
            .and_then(Path::parent)
            .into_iter()
            .chain(self.include_dirs.iter().map(PathBuf::as_path))
            .map(|dir| dir.join(target))
            .find(|candidate| candidate.is_file())
    }

    /// Replaces every defined identifier in `text` with its expansion.
    fn substitute(&self, text: &str, expanding: &mut Vec<String>) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(c) = rest.chars().next() {
            if is_ident_char(c) {
                let end = rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len());
                let word = &rest[..end];
                match self.defines.get(word) {
                    Some(value)
                        if !c.is_ascii_digit() && !expanding.iter().any(|name| name == word) =>
                    {
                        expanding.push(word.to_string());
                        out.push_str(&self.substitute(value, expanding));
                        expanding.pop();
                    }
                    _ => out.push_str(word),
                }
                rest = &rest[end..];
            } else {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
        out
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).context(IoSnafu { path })
}

fn is_ident_char(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

fn macro_name<'a>(args: &'a str, location: &Location) -> Result<&'a str> {
    let name = args.split_whitespace().next().unwrap_or("");
    if name.is_empty() || !name.chars().all(is_ident_char) {
        return Err(location.error(format!("expected a macro name, found `{args}`")));
    }
    Ok(name)
}

fn include_target(args: &str) -> Option<&str> {
    let (open, close) = match args.chars().next()? {
        '"' => ('"', '"'),
        '<' => ('<', '>'),
        _ => return None,
    };
    let inner = args.strip_prefix(open)?;
    let end = inner.find(close)?;
    Some(&inner[..end]).filter(|target| !target.is_empty())
}

/// Removes C comments, keeping every newline.
fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut in_string = false;
    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            in_string = c != '"' && c != '\n';
            continue;
        }
        let next = chars.peek().copied();
        match (c, next) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                while chars.next_if(|&n| n != '\n').is_some() {}
            }
            ('/', Some('*')) => {
                chars.next();
                out.push(' ');
                let mut prev = ' ';
                for n in chars.by_ref() {
                    if n == '\n' {
                        out.push('\n');
                    }
                    if prev == '*' && n == '/' {
                        break;
                    }
                    prev = n;
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Evaluates `#if` expressions.
struct Eval<'p> {
    defines: &'p HashMap<String, String>,
    /// Macros whose values are being evaluated; a reference back to one of them reads as zero.
    expanding: Vec<&'p str>,
}

fn ws<'a, O>(
    inner: impl FnMut(&'a str) -> IResult<&'a str, O>,
) -> impl FnMut(&'a str) -> IResult<&'a str, O> {
    delimited(space0, inner, space0)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c| c == '_' || c.is_ascii_alphabetic()),
        many0(satisfy(is_ident_char)),
    ))(input)
}

fn integer(input: &str) -> IResult<&str, i64> {
    terminated(
        alt((
            map_res(preceded(tag_no_case("0x"), hex_digit1), |digits| {
                i64::from_str_radix(digits, 16)
            }),
            map_res(digit1, str::parse),
        )),
        pair(many0(one_of("uUlL")), not(peek(satisfy(is_ident_char)))),
    )(input)
}

impl<'p> Eval<'p> {
    fn new(defines: &'p HashMap<String, String>) -> Self {
        Self {
            defines,
            expanding: Vec::new(),
        }
    }

    fn evaluate(&self, expr: &str) -> Option<i64> {
        all_consuming(ws(|i| self.or(i)))(expr)
            .ok()
            .map(|(_, value)| value)
    }

    fn or<'a>(&self, input: &'a str) -> IResult<&'a str, i64> {
        let (input, init) = self.and(input)?;
        fold_many0(
            preceded(ws(tag("||")), |i| self.and(i)),
            move || init,
            |acc, value| i64::from(acc != 0 || value != 0),
        )(input)
    }

    fn and<'a>(&self, input: &'a str) -> IResult<&'a str, i64> {
        let (input, init) = self.equality(input)?;
        fold_many0(
            preceded(ws(tag("&&")), |i| self.equality(i)),
            move || init,
            |acc, value| i64::from(acc != 0 && value != 0),
        )(input)
    }

    fn equality<'a>(&self, input: &'a str) -> IResult<&'a str, i64> {
        let (input, init) = self.relational(input)?;
        fold_many0(
            pair(ws(alt((tag("=="), tag("!=")))), |i| self.relational(i)),
            move || init,
            |acc, (op, value)| i64::from((acc == value) == (op == "==")),
        )(input)
    }

    fn relational<'a>(&self, input: &'a str) -> IResult<&'a str, i64> {
        let (input, init) = self.unary(input)?;
        fold_many0(
            pair(
                ws(alt((tag("<="), tag(">="), tag("<"), tag(">")))),
                |i| self.unary(i),
            ),
            move || init,
            |acc, (op, value)| {
                i64::from(match op {
                    "<=" => acc <= value,
                    ">=" => acc >= value,
                    "<" => acc < value,
                    _ => acc > value,
                })
            },
        )(input)
    }

    fn unary<'a>(&self, input: &'a str) -> IResult<&'a str, i64> {
        alt((
            map(preceded(ws(char('!')), |i| self.unary(i)), |value| {
                i64::from(value == 0)
            }),
            map(preceded(ws(char('-')), |i| self.unary(i)), i64::wrapping_neg),
            |i| self.primary(i),
        ))(input)
    }

    fn primary<'a>(&self, input: &'a str) -> IResult<&'a str, i64> {
        ws(alt((
            delimited(char('('), |i| self.or(i), ws(char(')'))),
            |i| self.defined(i),
            integer,
            |i| self.macro_value(i),
        )))(input)
    }

    fn defined<'a>(&self, input: &'a str) -> IResult<&'a str, i64> {
        let (input, _) = terminated(tag("defined"), not(peek(satisfy(is_ident_char))))(input)?;
        let (input, name) = alt((
            delimited(ws(char('(')), identifier, ws(char(')'))),
            preceded(space0, identifier),
        ))(input)?;
        Ok((input, i64::from(self.defines.contains_key(name))))
    }

    fn macro_value<'a>(&self, input: &'a str) -> IResult<&'a str, i64> {
        let (rest, name) = identifier(input)?;
        let value = match self.defines.get_key_value(name) {
            Some((key, text)) if !self.expanding.contains(&key.as_str()) => {
                let mut expanding = self.expanding.clone();
                expanding.push(key);
                let nested = Eval {
                    defines: self.defines,
                    expanding,
                };
                if text.trim().is_empty() {
                    Some(0)
                } else {
                    nested.evaluate(text)
                }
            }
            _ => Some(0),
        };
        match value {
            Some(value) => Ok((rest, value)),
            None => Err(nom::Err::Failure(nom::error::Error::new(
                input,
                nom::error::ErrorKind::Verify,
            ))),
        }
    }
}
