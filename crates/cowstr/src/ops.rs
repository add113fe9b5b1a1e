//! Pure text operations over [`CowStr`] values.
//!
//! Every operation leaves its receiver untouched and returns a fresh value.
//! Operations with nothing to do (no blanks to trim, no letters to fold)
//! return a clone sharing the receiver's buffer, which is observable through
//! [`CowStr::as_ptr`] but never through content.

use alloc::vec::Vec;
use core::fmt;

use bstr::ByteSlice;

use crate::{
    buffer::StrBuf,
    error::OomError,
    string::{clip_at_nul, CowStr},
};

/// Blank predicate: any byte at or below ASCII space. Covers space, tab,
/// newline, carriage return, and the rest of the control range.
fn is_blank(byte: u8) -> bool {
    byte <= b' '
}

impl CowStr {
    /// Builds a value from preformatted [`fmt::Arguments`], measuring the
    /// exact output length with a counting pass before allocating a single
    /// buffer and rendering into it. Zero-length output yields the empty
    /// state.
    ///
    /// The [`cow_format!`](crate::cow_format) macro is the usual entry
    /// point.
    ///
    /// # Errors
    ///
    /// [`OomError`] when the measured buffer cannot be allocated.
    ///
    /// # Panics
    ///
    /// Panics if a `Display` implementation inside `args` returns an error,
    /// matching `format!`.
    pub fn format(args: fmt::Arguments<'_>) -> Result<Self, OomError> {
        struct Count(usize);

        impl fmt::Write for Count {
            fn write_str(&mut self, piece: &str) -> fmt::Result {
                self.0 += piece.len();
                Ok(())
            }
        }

        struct Fill<'a> {
            buf: &'a mut StrBuf,
            done: bool,
        }

        impl fmt::Write for Fill<'_> {
            fn write_str(&mut self, piece: &str) -> fmt::Result {
                if self.done {
                    return Ok(());
                }
                let bytes = piece.as_bytes();
                let room = self.buf.capacity() - self.buf.len() - 1;
                let clipped = clip_at_nul(bytes);
                let take = &clipped[..clipped.len().min(room)];
                // A NUL or an over-measure ends the content here.
                if take.len() < bytes.len() {
                    self.done = true;
                }
                self.buf.append(take);
                Ok(())
            }
        }

        let mut count = Count(0);
        fmt::write(&mut count, args).expect("formatter returned an error");
        if count.0 == 0 {
            return Ok(Self::new());
        }

        let mut buf = StrBuf::allocate(count.0 + 1)?;
        let mut fill = Fill {
            buf: &mut buf,
            done: false,
        };
        fmt::write(&mut fill, args).expect("formatter returned an error");
        Ok(Self::from_buf(buf))
    }

    /// Returns a copy with ASCII uppercase letters folded to lowercase;
    /// every other byte is unchanged. When no byte would change, the
    /// receiver's buffer is shared instead of copied.
    ///
    /// # Errors
    ///
    /// [`OomError`] when the copy cannot be allocated.
    pub fn lower(&self) -> Result<Self, OomError> {
        let bytes = self.as_bytes();
        if !bytes.iter().any(u8::is_ascii_uppercase) {
            return Ok(self.clone());
        }
        let mut buf = StrBuf::with_content(bytes)?;
        buf.as_bytes_mut().make_ascii_lowercase();
        Ok(Self::from_buf(buf))
    }

    /// Removes leading and trailing blanks (bytes ≤ `0x20`).
    ///
    /// All-blank content yields the empty state; content with no boundary
    /// blanks comes back as a buffer-sharing clone.
    ///
    /// # Errors
    ///
    /// [`OomError`] when the trimmed copy cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cowstr::CowStr;
    /// let padded = CowStr::try_from("\t value \n")?;
    /// assert_eq!(padded.strip()?, "value");
    /// assert!(CowStr::try_from("   ")?.strip()?.is_empty());
    /// # Ok::<(), cowstr::OomError>(())
    /// ```
    pub fn strip(&self) -> Result<Self, OomError> {
        let bytes = self.as_bytes();
        let Some(start) = bytes.iter().position(|b| !is_blank(*b)) else {
            return Ok(Self::new());
        };
        let end = bytes.iter().rposition(|b| !is_blank(*b)).map_or(0, |at| at + 1);
        if start == 0 && end == bytes.len() {
            return Ok(self.clone());
        }
        Self::from_bytes(&bytes[start..end])
    }

    /// Removes trailing blanks only; otherwise as [`strip`](Self::strip).
    ///
    /// # Errors
    ///
    /// [`OomError`] when the trimmed copy cannot be allocated.
    pub fn rstrip(&self) -> Result<Self, OomError> {
        let bytes = self.as_bytes();
        let end = bytes.iter().rposition(|b| !is_blank(*b)).map_or(0, |at| at + 1);
        if end == bytes.len() {
            return Ok(self.clone());
        }
        Self::from_bytes(&bytes[..end])
    }

    /// Splits on runs of blanks, discarding empty fields: leading and
    /// trailing blanks produce nothing, and the empty value produces an
    /// empty vector.
    ///
    /// # Errors
    ///
    /// [`OomError`] when a field copy cannot be allocated.
    pub fn split_whitespace(&self) -> Result<Vec<Self>, OomError> {
        let mut fields = Vec::new();
        for field in self.as_bytes().split(|b| is_blank(*b)) {
            if !field.is_empty() {
                fields.push(Self::from_bytes(field)?);
            }
        }
        Ok(fields)
    }

    /// Splits on a single literal byte. Consecutive delimiters and
    /// delimiters at either boundary DO produce empty fields, so non-empty
    /// content always yields exactly one more field than it has delimiters.
    /// This is a different policy from
    /// [`split_whitespace`](Self::split_whitespace). The empty value yields
    /// an empty vector.
    ///
    /// # Errors
    ///
    /// [`OomError`] when a field copy cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cowstr::CowStr;
    /// let row = CowStr::try_from("a,,b")?;
    /// let fields = row.split_on(b',')?;
    /// assert_eq!(fields.len(), 3);
    /// assert!(fields[1].is_empty());
    /// # Ok::<(), cowstr::OomError>(())
    /// ```
    pub fn split_on(&self, delimiter: u8) -> Result<Vec<Self>, OomError> {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        let mut fields = Vec::new();
        for field in self.as_bytes().split(|b| *b == delimiter) {
            fields.push(Self::from_bytes(field)?);
        }
        Ok(fields)
    }

    /// Joins `parts` with the receiver as the separator, inserted between
    /// entries only. The empty receiver joins with no separator; an empty
    /// slice yields the empty state. The output length is computed first
    /// and rendered into one exactly-sized buffer.
    ///
    /// # Errors
    ///
    /// [`OomError`] when the joined buffer cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cowstr::CowStr;
    /// let comma = CowStr::try_from(",")?;
    /// let parts = [CowStr::try_from("a")?, CowStr::try_from("b")?];
    /// assert_eq!(comma.join(&parts)?, "a,b");
    /// assert!(comma.join(&[])?.is_empty());
    /// # Ok::<(), cowstr::OomError>(())
    /// ```
    pub fn join(&self, parts: &[Self]) -> Result<Self, OomError> {
        let delimiter = self.as_bytes();
        let content: usize = parts.iter().map(Self::len).sum::<usize>()
            + delimiter.len() * parts.len().saturating_sub(1);
        if content == 0 {
            return Ok(Self::new());
        }
        let mut buf = StrBuf::allocate(content + 1)?;
        for (index, part) in parts.iter().enumerate() {
            if index > 0 {
                buf.append(delimiter);
            }
            buf.append(part.as_bytes());
        }
        Ok(Self::from_buf(buf))
    }

    /// Whether the content begins with `prefix`, byte for byte. The empty
    /// prefix matches every value, including the empty one.
    #[must_use]
    pub fn starts_with(&self, prefix: impl AsRef<[u8]>) -> bool {
        self.as_bytes().starts_with(prefix.as_ref())
    }

    /// Byte position of the first occurrence of `needle`, a locate-only
    /// result borrowed from nothing: pair it with slicing on
    /// [`as_bytes`](Self::as_bytes) for a view, or with
    /// [`after`](Self::after) for an owned remainder. The empty needle
    /// matches at position 0.
    #[must_use]
    pub fn find(&self, needle: impl AsRef<[u8]>) -> Option<usize> {
        self.as_bytes().find(needle.as_ref())
    }

    /// Whether `needle` occurs anywhere in the content.
    #[must_use]
    pub fn contains(&self, needle: impl AsRef<[u8]>) -> bool {
        self.find(needle).is_some()
    }

    /// Everything after the first occurrence of `marker`, as a new owned
    /// value; the empty state when `marker` does not occur. The empty
    /// marker matches at the start, so the whole content is copied.
    ///
    /// # Errors
    ///
    /// [`OomError`] when the remainder copy cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cowstr::CowStr;
    /// let pair = CowStr::try_from("key=value")?;
    /// assert_eq!(pair.after("=")?, "value");
    /// assert!(pair.after("missing")?.is_empty());
    /// # Ok::<(), cowstr::OomError>(())
    /// ```
    pub fn after(&self, marker: impl AsRef<[u8]>) -> Result<Self, OomError> {
        let marker = marker.as_ref();
        match self.find(marker) {
            Some(at) => Self::from_bytes(&self.as_bytes()[at + marker.len()..]),
            None => Ok(Self::new()),
        }
    }
}
