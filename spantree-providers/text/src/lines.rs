//! Blank-skipping line reader shared by both formats.

use std::{
    borrow::Cow,
    io::{self, BufRead},
    str::Utf8Error,
};

use crate::errors::TextProviderError;

/// Largest vertex count either format accepts.
pub const MAX_VERTICES: usize = 1000;

/// A non-blank input line with surrounding ASCII whitespace removed.
///
/// The bytes are kept undecoded so each caller decides whether invalid UTF-8
/// is fatal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct RawLine {
    pub(crate) number: usize,
    bytes: Vec<u8>,
}

impl RawLine {
    pub(crate) fn text(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(&self.bytes)
    }

    pub(crate) fn lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

/// Yields a [`RawLine`] for each non-blank line, numbered from 1.
pub(crate) struct NumberedLines<R> {
    reader: R,
    number: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> NumberedLines<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            number: 0,
            buf: Vec::new(),
        }
    }

    /// Returns the next non-blank line as text.
    ///
    /// Fails with [`TextProviderError::EmptyInput`] when there is none and
    /// with [`TextProviderError::InvalidEncoding`] when it is not UTF-8.
    pub(crate) fn header(&mut self) -> Result<(usize, String), TextProviderError> {
        let raw = self.next().transpose()?.ok_or(TextProviderError::EmptyInput)?;
        let text = raw
            .text()
            .map_err(|_| TextProviderError::InvalidEncoding { line: raw.number })?;
        Ok((raw.number, text.to_owned()))
    }
}

impl<R: BufRead> Iterator for NumberedLines<R> {
    type Item = io::Result<RawLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Some(Err(err)),
            }
            self.number += 1;
            let trimmed = self.buf.trim_ascii();
            if !trimmed.is_empty() {
                return Some(Ok(RawLine {
                    number: self.number,
                    bytes: trimmed.to_vec(),
                }));
            }
        }
    }
}

/// Parses a declared vertex count and checks it against [`MAX_VERTICES`].
pub(crate) fn parse_vertex_count(
    line: usize,
    token: &str,
    expected: &'static str,
    header: &str,
) -> Result<usize, TextProviderError> {
    let got: i64 = token
        .parse()
        .map_err(|_| TextProviderError::MalformedHeader {
            line,
            expected,
            found: header.to_owned(),
        })?;
    usize::try_from(got)
        .ok()
        .filter(|count| (1..=MAX_VERTICES).contains(count))
        .ok_or(TextProviderError::VertexCountOutOfRange {
            line,
            got,
            max: MAX_VERTICES,
        })
}
