//! Line sources with one line of pushback.

use std::io::{self, BufRead};

/// Line-oriented input the header reader consumes.
pub trait LineSource {
    /// Read the next line without its terminator. `Ok(None)` at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Push the line last returned by [`read_line`](Self::read_line) back,
    /// so the next read yields it again. Only one line can be pushed back.
    fn unread_line(&mut self);

    /// Number of lines read so far, pushback excluded.
    fn line_number(&self) -> usize;
}

/// [`LineSource`] over any buffered reader.
pub struct PdbLineReader<R: BufRead> {
    reader: R,
    last: Option<String>,
    pending: Option<String>,
    line_number: usize,
}

impl<R: BufRead> PdbLineReader<R> {
    /// Create a new line reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            last: None,
            pending: None,
            line_number: 0,
        }
    }

    /// Drain every line not yet consumed, starting with a pushed-back one.
    pub fn into_remaining_lines(mut self) -> io::Result<Vec<String>> {
        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            lines.push(line);
        }
        Ok(lines)
    }
}

impl<R: BufRead> LineSource for PdbLineReader<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        if let Some(line) = self.pending.take() {
            self.line_number += 1;
            self.last = Some(line.clone());
            return Ok(Some(line));
        }

        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            self.last = None;
            return Ok(None);
        }
        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }
        // Legacy files carry Latin-1 symbols such as the Angstrom sign.
        let buf = String::from_utf8_lossy(&bytes).into_owned();

        self.line_number += 1;
        self.last = Some(buf.clone());
        Ok(Some(buf))
    }

    fn unread_line(&mut self) {
        if let Some(line) = self.last.take() {
            self.line_number -= 1;
            self.pending = Some(line);
        }
    }

    fn line_number(&self) -> usize {
        self.line_number
    }
}
