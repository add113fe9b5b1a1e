//! Line-oriented file access returning [`CowStr`] content.

use alloc::vec::Vec;
use std::{
    fs::{File, OpenOptions},
    io::{BufRead, BufReader, BufWriter, Read, Write},
    path::Path,
};

use bstr::ByteSlice;

use crate::{error::Error, string::CowStr};

/// Upper bound, in bytes, on a single `read` chunk or `read_line` result.
const CHUNK: usize = 4 * 1024;

/// How a [`TextFile`] is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Read from the start of the file.
    Read,
    /// Truncate (creating if needed) and write.
    Write,
    /// Write at the end of the file, creating it if needed.
    Append,
}

#[derive(Debug)]
enum Io {
    Reader(BufReader<File>),
    Writer(BufWriter<File>),
}

/// A line-oriented file handle.
///
/// Reads hand back at most 4096 bytes per call (a chunk of the remaining
/// content for [`read`](Self::read), one newline-terminated line for
/// [`read_line`](Self::read_line)) and signal end-of-file with `None`
/// rather than an error. Genuine I/O failures surface as [`Error::Io`] and
/// never as truncated content. Using a closed handle, or one opened in the
/// wrong mode, is [`Error::Closed`].
#[derive(Debug)]
pub struct TextFile {
    io: Option<Io>,
}

impl TextFile {
    /// Opens `path` in `mode`; failure carries the OS error description.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when the file cannot be opened.
    pub fn open(path: impl AsRef<Path>, mode: OpenMode) -> Result<Self, Error> {
        let io = match mode {
            OpenMode::Read => Io::Reader(BufReader::new(File::open(path)?)),
            OpenMode::Write => Io::Writer(BufWriter::new(File::create(path)?)),
            OpenMode::Append => Io::Writer(BufWriter::new(
                OpenOptions::new().create(true).append(true).open(path)?,
            )),
        };
        Ok(Self { io: Some(io) })
    }

    /// Whether the handle is still open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.io.is_some()
    }

    fn reader(&mut self) -> Result<&mut BufReader<File>, Error> {
        match &mut self.io {
            Some(Io::Reader(reader)) => Ok(reader),
            _ => Err(Error::Closed),
        }
    }

    fn writer(&mut self) -> Result<&mut BufWriter<File>, Error> {
        match &mut self.io {
            Some(Io::Writer(writer)) => Ok(writer),
            _ => Err(Error::Closed),
        }
    }

    /// Reads at most one 4096-byte chunk of the remaining content; `None`
    /// at end-of-file. A short chunk is not an error.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] on read failure, [`Error::Closed`] on a handle not
    /// open for reading.
    pub fn read(&mut self) -> Result<Option<CowStr>, Error> {
        let reader = self.reader()?;
        let mut chunk = [0u8; CHUNK];
        let got = reader.read(&mut chunk)?;
        if got == 0 {
            return Ok(None);
        }
        Ok(Some(CowStr::from_bytes(&chunk[..got])?))
    }

    /// Reads one line, newline retained, capped at 4096 bytes; `None` at
    /// end-of-file. A final line without a newline is still returned.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] on read failure (a failure mid-line is reported, not
    /// smoothed over with partial content) and [`Error::Closed`] on a
    /// handle not open for reading.
    pub fn read_line(&mut self) -> Result<Option<CowStr>, Error> {
        let reader = self.reader()?;
        let mut line: Vec<u8> = Vec::new();
        loop {
            if line.len() == CHUNK {
                break;
            }
            let (consumed, complete) = {
                let available = reader.fill_buf()?;
                if available.is_empty() {
                    break;
                }
                let room = CHUNK - line.len();
                let window = &available[..available.len().min(room)];
                match window.find_byte(b'\n') {
                    Some(at) => {
                        line.extend_from_slice(&window[..=at]);
                        (at + 1, true)
                    }
                    None => {
                        line.extend_from_slice(window);
                        (window.len(), false)
                    }
                }
            };
            reader.consume(consumed);
            if complete {
                break;
            }
        }
        if line.is_empty() {
            return Ok(None);
        }
        Ok(Some(CowStr::from_bytes(&line)?))
    }

    /// Reads every remaining line via [`read_line`](Self::read_line).
    ///
    /// # Errors
    ///
    /// Propagates the first [`read_line`](Self::read_line) failure.
    pub fn read_lines(&mut self) -> Result<Vec<CowStr>, Error> {
        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            lines.push(line);
        }
        Ok(lines)
    }

    /// Writes `text` to a handle opened for writing.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] on write failure, [`Error::Closed`] on a handle not
    /// open for writing.
    pub fn write(&mut self, text: impl AsRef<[u8]>) -> Result<(), Error> {
        self.writer()?.write_all(text.as_ref())?;
        Ok(())
    }

    /// Writes `text` followed by a newline.
    ///
    /// # Errors
    ///
    /// As [`write`](Self::write).
    pub fn write_line(&mut self, text: impl AsRef<[u8]>) -> Result<(), Error> {
        let writer = self.writer()?;
        writer.write_all(text.as_ref())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    /// Flushes any buffered writes and closes the handle. Closing an
    /// already-closed handle is a no-op.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when the final flush fails; the handle is closed
    /// either way.
    pub fn close(&mut self) -> Result<(), Error> {
        match self.io.take() {
            Some(Io::Writer(mut writer)) => {
                writer.flush()?;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}
