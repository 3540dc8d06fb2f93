// crates/xf2bf-core/src/tokenizer.rs

use std::io::{self, BufRead};
use std::iter::FusedIterator;

use crate::token::Token;

/// The C locale `isspace` set: space, \t, \n, \v, \f, \r.
///
/// Note this differs from `u8::is_ascii_whitespace`, which leaves out \v.
#[inline]
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Lazy sequence of whitespace-delimited words over a byte stream.
///
/// Single forward pass: every byte is looked at once. The sequence ends at
/// the reader's end of stream; any other read failure is yielded as an
/// error and ends the sequence as well.
pub struct Words<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> Words<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }

    /// Next word, or `Ok(None)` once the stream is exhausted.
    pub fn next_word(&mut self) -> io::Result<Option<Token>> {
        // leading whitespace
        loop {
            let buf = fill_buf(&mut self.reader)?;
            if buf.is_empty() {
                return Ok(None);
            }
            match buf.iter().position(|&b| !is_space(b)) {
                Some(i) => {
                    self.reader.consume(i);
                    break;
                }
                None => {
                    let n = buf.len();
                    self.reader.consume(n);
                }
            }
        }

        let mut word = Vec::new();
        loop {
            let buf = fill_buf(&mut self.reader)?;
            if buf.is_empty() {
                break;
            }
            match buf.iter().position(|&b| is_space(b)) {
                Some(i) => {
                    word.extend_from_slice(&buf[..i]);
                    self.reader.consume(i);
                    break;
                }
                None => {
                    word.extend_from_slice(buf);
                    let n = buf.len();
                    self.reader.consume(n);
                }
            }
        }

        Ok(Some(Token::new(word)))
    }
}

impl<R: BufRead> Iterator for Words<R> {
    type Item = io::Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_word() {
            Ok(Some(tok)) => Some(Ok(tok)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead> FusedIterator for Words<R> {}

/// Convenience constructor mirroring `BufRead::lines`.
pub fn words<R: BufRead>(reader: R) -> Words<R> {
    Words::new(reader)
}

/// `fill_buf` that retries on `Interrupted`.
fn fill_buf<R: BufRead>(r: &mut R) -> io::Result<&[u8]> {
    loop {
        match r.fill_buf() {
            Ok(_) => break,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    // Buffer is primed now; this returns it without another read.
    r.fill_buf()
}
