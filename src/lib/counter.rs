use std::io::{ErrorKind, Read};
use std::str;

use crate::FileCounts;
use crate::error::CountError;

/// Read granularity for `count_reader`. Counts are chunking-independent, so
/// this only affects syscall batching.
const CHUNK_SIZE: usize = 64 * 1024;

/// Single-pass streaming counter.
///
/// Feed raw byte chunks in arrival order with [`update`](Self::update), then
/// take the final tallies exactly once with [`finish`](Self::finish). A
/// multi-byte UTF-8 sequence split across a chunk boundary is carried over
/// and decoded as one scalar when its remaining bytes arrive, so results are
/// identical no matter how the input is chunked.
#[derive(Debug, Default)]
pub struct StreamCounter {
    lines: usize,
    words: usize,
    bytes: usize,
    chars: usize,
    in_word: bool,
    // Incomplete UTF-8 suffix awaiting the next chunk (at most 3 bytes
    // between chunks).
    pending: Vec<u8>,
}

impl StreamCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one chunk into the running tallies.
    pub fn update(&mut self, chunk: &[u8]) {
        // Raw length first, before any decoding: the byte tally stays exact
        // even for malformed or partial multi-byte sequences.
        self.bytes += chunk.len();

        if self.pending.is_empty() {
            self.scan(chunk);
        } else {
            let mut carry = std::mem::take(&mut self.pending);
            carry.extend_from_slice(chunk);
            self.scan(&carry);
        }
    }

    /// Finalizes the stream and returns the count snapshot.
    ///
    /// A multi-byte sequence still incomplete at end-of-stream decodes to a
    /// single U+FFFD, the same as any other rejected sequence.
    pub fn finish(mut self) -> FileCounts {
        if !self.pending.is_empty() {
            self.consume("\u{FFFD}");
        }

        FileCounts {
            lines: self.lines,
            words: self.words,
            bytes: self.bytes,
            chars: self.chars,
        }
    }

    /// Decodes `input` incrementally, setting aside a trailing incomplete
    /// sequence for the next chunk and replacing rejected sequences with
    /// U+FFFD.
    fn scan(&mut self, input: &[u8]) {
        let mut rest = input;
        loop {
            match str::from_utf8(rest) {
                Ok(text) => {
                    self.consume(text);
                    return;
                }
                Err(err) => {
                    let (valid, tail) = rest.split_at(err.valid_up_to());
                    // The prefix below valid_up_to() is always valid UTF-8.
                    self.consume(str::from_utf8(valid).unwrap_or_default());

                    match err.error_len() {
                        // Rejected sequence: decode lossily as one U+FFFD.
                        Some(skip) => {
                            self.consume("\u{FFFD}");
                            rest = &tail[skip..];
                        }
                        // A multi-byte char cut off by the chunk boundary;
                        // hold its bytes until more input arrives.
                        None => {
                            self.pending.extend_from_slice(tail);
                            return;
                        }
                    }
                }
            }
        }
    }

    fn consume(&mut self, text: &str) {
        for ch in text.chars() {
            self.chars += 1;

            if ch == '\n' {
                self.lines += 1;
            }

            if ch.is_whitespace() {
                self.in_word = false;
            } else if !self.in_word {
                self.words += 1;
                self.in_word = true;
            }
        }
    }
}

/// Drives a [`StreamCounter`] over anything readable, start to end.
///
/// This is the pull shape of counting: request the next chunk, fold it in,
/// repeat until end-of-stream. A read failure aborts the whole operation;
/// partial counts are never returned.
///
/// # Errors
///
/// Returns `CountError::Stream` if reading fails mid-stream.
pub fn count_reader<R: Read>(mut reader: R) -> Result<FileCounts, CountError> {
    let mut counter = StreamCounter::new();
    let mut buf = vec![0u8; CHUNK_SIZE];

    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => counter.update(&buf[..n]),
            Err(err) if err.kind() == ErrorKind::Interrupted => {}
            Err(err) => return Err(CountError::Stream(err)),
        }
    }

    Ok(counter.finish())
}
