//! Scalar encoding for the binary header form.
//!
//! | Type   | Encoding                                  |
//! |--------|-------------------------------------------|
//! | u64    | 8 bytes, big-endian                       |
//! | f32    | 4 bytes, IEEE-754, big-endian             |
//! | string | u64 byte length, then UTF-8 bytes         |

use std::io::{self, Read, Write};

/// Writes scalars to a byte sink.
pub struct BinWriter<W: Write> {
    writer: W,
}

impl<W: Write> BinWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_u64(&mut self, value: u64) -> io::Result<()> {
        self.writer.write_all(&value.to_be_bytes())
    }

    pub fn write_f32(&mut self, value: f32) -> io::Result<()> {
        self.writer.write_all(&value.to_be_bytes())
    }

    pub fn write_str(&mut self, value: &str) -> io::Result<()> {
        self.write_u64(value.len() as u64)?;
        self.writer.write_all(value.as_bytes())
    }

    /// Write a collection length.
    pub fn write_len(&mut self, len: usize) -> io::Result<()> {
        self.write_u64(len as u64)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Reads scalars from a byte source.
///
/// The reader goes bad on the first failed read and stays bad; every
/// later read fails without touching the source.
pub struct BinReader<R: Read> {
    reader: R,
    good: bool,
}

impl<R: Read> BinReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, good: true }
    }

    /// Whether every read so far has succeeded.
    #[must_use]
    pub fn is_good(&self) -> bool {
        self.good
    }

    pub fn read_u64(&mut self) -> io::Result<u64> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf)?;
        Ok(u64::from_be_bytes(buf))
    }

    pub fn read_f32(&mut self) -> io::Result<f32> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf)?;
        Ok(f32::from_be_bytes(buf))
    }

    pub fn read_str(&mut self) -> io::Result<String> {
        let len = self.read_u64()?;
        self.check()?;
        let mut bytes = Vec::new();
        let result = (&mut self.reader).take(len).read_to_end(&mut bytes);
        let read = self.mark(result)? as u64;
        if read != len {
            self.good = false;
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("string of {len} bytes cut short after {read}"),
            ));
        }
        String::from_utf8(bytes).map_err(|e| {
            self.good = false;
            io::Error::new(io::ErrorKind::InvalidData, e)
        })
    }

    fn fill(&mut self, buf: &mut [u8]) -> io::Result<()> {
        self.check()?;
        let result = self.reader.read_exact(buf);
        self.mark(result)
    }

    fn check(&self) -> io::Result<()> {
        if self.good {
            Ok(())
        } else {
            Err(io::Error::other("binary stream already failed"))
        }
    }

    fn mark<T>(&mut self, result: io::Result<T>) -> io::Result<T> {
        if result.is_err() {
            self.good = false;
        }
        result
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}
