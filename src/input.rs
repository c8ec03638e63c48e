// Read whitespace separated integers from a stream.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::error::{ProcessorError, Result};

pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
    // Number of tokens handed out so far, 1-based in error messages.
    position: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        TokenReader {
            reader,
            pending: VecDeque::new(),
            position: 0,
        }
    }

    /// Next whitespace separated token, or `None` at end of input. Only reads
    /// another line once the current one is used up. Bytes that aren't UTF-8
    /// become U+FFFD, so such a token fails to parse like any other bad token.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                line.split(|b| b.is_ascii_whitespace())
                    .filter(|token| !token.is_empty())
                    .map(|token| String::from_utf8_lossy(token).into_owned()),
            );
        }
        self.position += 1;
        Ok(self.pending.pop_front())
    }

    /// Next token parsed as an integer, `None` at end of input.
    pub fn next_i64(&mut self) -> Result<Option<i64>> {
        match self.next_token()? {
            Some(token) => {
                debug!("token {}: {}", self.position, token);
                match token.parse::<i64>() {
                    Ok(value) => Ok(Some(value)),
                    Err(_) => Err(ProcessorError::InputFormat {
                        token,
                        position: self.position,
                    }),
                }
            }
            None => Ok(None),
        }
    }

    /// Reads exactly `count` integers.
    pub fn read_i64s(&mut self, count: usize) -> Result<Vec<i64>> {
        // Don't trust a huge size before the values actually show up.
        let mut values = Vec::with_capacity(count.min(1024));
        while values.len() < count {
            match self.next_i64()? {
                Some(value) => values.push(value),
                None => {
                    return Err(ProcessorError::InputExhausted {
                        expected: count,
                        read: values.len(),
                    })
                }
            }
        }
        Ok(values)
    }

    /// Tokens already read from the stream but not handed out yet.
    pub fn buffered(&self) -> usize {
        self.pending.len()
    }
}
