//! Streaming reader for RPSL text

use std::io::BufRead;

use crate::error::ObjectParseError;
use crate::object::Object;

//
// External dependencies
//
use nom::bytes::complete::take_while1;
use nom::character::complete::char;
use nom::combinator::rest;
use nom::sequence::separated_pair;
use nom::IResult;

/// One raw source line, classified. Classification is re-derived per
/// line; nothing here outlives the line buffer it borrows from.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    /// Empty or whitespace-only. Terminates an open record.
    Blank,
    /// First non-whitespace character is `#`. Contributes nothing,
    /// wherever it occurs.
    Comment,
    /// Leading whitespace followed by text. Extends the previous value.
    Continuation(&'a str),
    /// `name:` followed by the value text.
    Attribute { name: &'a str, value: &'a str },
}

/// `name ':' rest-of-line`, where the name is a contiguous run of
/// non-colon, non-whitespace characters.
fn attribute(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(
        take_while1(|c: char| c != ':' && !c.is_whitespace()),
        char(':'),
        rest,
    )(input)
}

/// Classify a single line (already stripped of its terminator).
/// `None` means the line is structurally malformed: not blank, not a
/// comment, not continuation-indented, and without a `name:` prefix.
fn classify(line: &str) -> Option<Line> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return Some(Line::Blank);
    }
    if trimmed.starts_with('#') {
        return Some(Line::Comment);
    }
    if line.starts_with(|c: char| c.is_whitespace()) {
        return Some(Line::Continuation(trimmed));
    }
    match attribute(line) {
        Ok((_, (name, value))) => {
            let value = value.trim_start();
            // A lone `#` as the very last character of the line is a
            // stray comment marker found in some registry dumps; any
            // other `#` is part of the value.
            let value = value.strip_suffix('#').unwrap_or(value);
            Some(Line::Attribute { name, value })
        }
        Err(_) => None,
    }
}

/// A pull-based reader that assembles [`Object`]s from RPSL text.
///
/// The reader consumes its source line by line and keeps no state other
/// than the cursor position, so records never span `read` calls and the
/// returned objects are independent owned values. Reading is strictly
/// forward; the source is never seeked.
pub struct Reader<R> {
    source: R,
    /// 1-based number of the last line read, counting blank and comment
    /// lines.
    line: usize,
    done: bool,
}

impl<R: BufRead> Reader<R> {
    pub fn new(source: R) -> Reader<R> {
        Reader {
            source,
            line: 0,
            done: false,
        }
    }

    /// Read the next object from the source.
    ///
    /// Returns `Ok(Some(object))` for each record, and `Ok(None)` once
    /// the source is exhausted; further calls keep returning `Ok(None)`.
    /// Records are separated by blank lines; comment lines are discarded
    /// wherever they occur, including indented ones inside a record.
    /// Continuation lines are folded into the most recent value with a
    /// single space.
    ///
    /// A line that fits none of those shapes aborts the current record
    /// with [`ObjectParseError::MalformedLine`]. The partial record is
    /// discarded and the cursor is left on the following line, so the
    /// caller may keep reading; assembly restarts at the next record
    /// boundary.
    pub fn read(&mut self) -> Result<Option<Object>, ObjectParseError> {
        if self.done {
            return Ok(None);
        }

        let mut current: Option<Object> = None;
        let mut last_name: Option<String> = None;
        let mut raw = String::new();

        loop {
            raw.clear();
            if self.source.read_line(&mut raw)? == 0 {
                self.done = true;
                return Ok(current);
            }
            self.line += 1;

            let line = raw.strip_suffix('\n').unwrap_or(&raw);
            let line = line.strip_suffix('\r').unwrap_or(line);

            match classify(line) {
                Some(Line::Blank) => {
                    if current.is_some() {
                        return Ok(current);
                    }
                }
                Some(Line::Comment) => {}
                Some(Line::Attribute { name, value }) => {
                    let object = current.get_or_insert_with(|| Object::new(name));
                    object.push_value(name, value);
                    last_name = Some(name.to_string());
                }
                Some(Line::Continuation(text)) => {
                    // A continuation before any attribute line has
                    // nothing to extend and is dropped like other stray
                    // leading lines.
                    if let (Some(object), Some(name)) = (current.as_mut(), last_name.as_deref()) {
                        object.extend_value(name, text);
                    }
                }
                None => {
                    return Err(ObjectParseError::malformed(self.line, line));
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for Reader<R> {
    type Item = Result<Object, ObjectParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read().transpose()
    }
}
