//! Sources of numerator/denominator values for populating a collection.
//!
//! A collection asks its source for the numerator and then the denominator
//! of each fraction, in index order.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::{ParseMode, SourceError};

/// Supplies integers on demand while a collection is populated.
pub trait ValueSource {
    /// Returns the numerator for the fraction at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if no value can be produced.
    fn numerator(&mut self, index: usize) -> Result<i64, SourceError>;

    /// Returns the denominator for the fraction at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if no value can be produced.
    fn denominator(&mut self, index: usize) -> Result<i64, SourceError>;
}

impl<S: ValueSource + ?Sized> ValueSource for &mut S {
    fn numerator(&mut self, index: usize) -> Result<i64, SourceError> {
        (**self).numerator(index)
    }

    fn denominator(&mut self, index: usize) -> Result<i64, SourceError> {
        (**self).denominator(index)
    }
}

/// A value source backed by an iterator of `(numerator, denominator)` pairs.
///
/// Each `numerator` call takes the next pair; the following `denominator`
/// call answers from that pair. A `denominator` call with no open pair
/// reports [`SourceError::Exhausted`] and consumes nothing.
#[derive(Clone, Debug)]
pub struct PairSource<I> {
    pairs: I,
    pending: Option<i64>,
}

impl<I> PairSource<I>
where
    I: Iterator<Item = (i64, i64)>,
{
    /// Creates a source that yields the given pairs in order.
    pub fn new<T>(pairs: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            pairs: pairs.into_iter(),
            pending: None,
        }
    }
}

impl<I> ValueSource for PairSource<I>
where
    I: Iterator<Item = (i64, i64)>,
{
    fn numerator(&mut self, index: usize) -> Result<i64, SourceError> {
        let (numerator, denominator) = self.pairs.next().ok_or(SourceError::Exhausted { index })?;
        self.pending = Some(denominator);
        Ok(numerator)
    }

    fn denominator(&mut self, index: usize) -> Result<i64, SourceError> {
        // Only the pair opened by `numerator` is answered
        self.pending.take().ok_or(SourceError::Exhausted { index })
    }
}

/// A value source reading one integer per line of text.
///
/// When constructed with [`LineSource::with_prompt`], a prompt is written
/// and flushed before every line is read.
#[derive(Debug)]
pub struct LineSource<R, W = io::Sink> {
    reader: R,
    prompt: Option<W>,
    mode: ParseMode,
    buf: Vec<u8>,
}

impl<R: BufRead> LineSource<R> {
    /// Creates a source that reads lines without prompting.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            prompt: None,
            mode: ParseMode::default(),
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead, W: Write> LineSource<R, W> {
    /// Creates a source that writes a prompt to `writer` before each read.
    pub fn with_prompt(reader: R, writer: W) -> Self {
        Self {
            reader,
            prompt: Some(writer),
            mode: ParseMode::default(),
            buf: Vec::new(),
        }
    }

    /// Sets the parse mode.
    #[must_use]
    pub fn mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    /// Reads the number of fractions to allocate.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::MissingCount`] at end of input, and parse or
    /// I/O errors as for any other value.
    pub fn read_count(&mut self) -> Result<i64, SourceError> {
        self.next_value(format_args!("How many fractions to make? "))?
            .ok_or(SourceError::MissingCount)
    }

    fn next_value(&mut self, prompt: fmt::Arguments<'_>) -> Result<Option<i64>, SourceError> {
        if let Some(writer) = self.prompt.as_mut() {
            writer.write_fmt(prompt)?;
            writer.flush()?;
        }

        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }

        self.mode.parse_bytes(&self.buf).map(Some)
    }
}

impl<R: BufRead, W: Write> ValueSource for LineSource<R, W> {
    fn numerator(&mut self, index: usize) -> Result<i64, SourceError> {
        self.next_value(format_args!("Enter numerator for fraction {}: ", index + 1))?
            .ok_or(SourceError::Exhausted { index })
    }

    fn denominator(&mut self, index: usize) -> Result<i64, SourceError> {
        self.next_value(format_args!("Enter denominator for fraction {}: ", index + 1))?
            .ok_or(SourceError::Exhausted { index })
    }
}

impl ParseMode {
    /// Parses one line of input under this mode.
    ///
    /// # Errors
    ///
    /// Only [`ParseMode::Strict`] fails, with [`SourceError::InvalidNumber`].
    pub fn parse(self, line: &str) -> Result<i64, SourceError> {
        self.parse_bytes(line.as_bytes())
    }

    /// Parses one raw line of input under this mode.
    ///
    /// Permissive parsing never looks past the leading digits, so bytes
    /// that are not valid UTF-8 read as `0` like any other garbage.
    ///
    /// # Errors
    ///
    /// Only [`ParseMode::Strict`] fails, with [`SourceError::InvalidNumber`].
    pub fn parse_bytes(self, line: &[u8]) -> Result<i64, SourceError> {
        match self {
            ParseMode::Permissive => Ok(parse_leading_int(line)),
            ParseMode::Strict => {
                let text = String::from_utf8_lossy(line);
                text.trim()
                    .parse()
                    .map_err(|_| SourceError::InvalidNumber {
                        line: text.trim_end_matches(['\r', '\n']).to_owned(),
                    })
            }
        }
    }
}

/// Reads an optionally signed run of leading digits, saturating at the
/// `i64` bounds. Returns 0 if there are no digits.
fn parse_leading_int(line: &[u8]) -> i64 {
    let start = line
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(line.len());
    let line = &line[start..];
    let (negative, digits) = match line.first() {
        Some(b'-') => (true, &line[1..]),
        Some(b'+') => (false, &line[1..]),
        _ => (false, line),
    };

    digits
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0i64, |acc, &b| {
            let digit = i64::from(b - b'0');
            if negative {
                acc.saturating_mul(10).saturating_sub(digit)
            } else {
                acc.saturating_mul(10).saturating_add(digit)
            }
        })
}
