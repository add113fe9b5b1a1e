use alloc::rc::Rc;
use core::{
    cmp::Ordering,
    ffi::CStr,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use bstr::{BStr, ByteSlice};

use crate::{buffer::StrBuf, error::OomError};

/// A reference-counted, copy-on-write text value.
///
/// Cloning shares the backing buffer by bumping a non-atomic reference
/// count; the clones are independently reassignable and droppable. Any
/// in-place write ([`assign`](Self::assign), [`push`](Self::push)) first
/// proves it is the buffer's sole owner, and otherwise moves to a fresh
/// allocation, so mutating one value can never change what another value
/// observes. The empty string is a distinguished state with no allocation.
///
/// Content is NUL-terminated, byte-oriented text: constructors clip their
/// input at the first NUL byte, and nothing in the crate is Unicode-aware.
/// The non-atomic count makes the type `!Send`/`!Sync`.
///
/// # Examples
///
/// ```rust
/// use cowstr::CowStr;
///
/// let mut greeting = CowStr::try_from("hello")?;
/// let shared = greeting.clone();
/// greeting.push(", world")?;
/// assert_eq!(greeting, "hello, world");
/// assert_eq!(shared, "hello");
/// # Ok::<(), cowstr::OomError>(())
/// ```
#[derive(Clone, Default)]
pub struct CowStr {
    buf: Option<Rc<StrBuf>>,
}

impl CowStr {
    /// The empty string; allocates nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self { buf: None }
    }

    /// Copies `content` into a fresh exactly-sized buffer, clipping at the
    /// first NUL byte. Empty content yields the empty state.
    ///
    /// # Errors
    ///
    /// [`OomError`] when the buffer cannot be allocated.
    pub fn from_bytes(content: &[u8]) -> Result<Self, OomError> {
        let content = clip_at_nul(content);
        if content.is_empty() {
            return Ok(Self::new());
        }
        Ok(Self {
            buf: Some(Rc::new(StrBuf::with_content(content)?)),
        })
    }

    /// Wraps an already-filled buffer; empty content becomes the empty state.
    pub(crate) fn from_buf(buf: StrBuf) -> Self {
        if buf.len() == 0 {
            Self::new()
        } else {
            Self {
                buf: Some(Rc::new(buf)),
            }
        }
    }

    /// Content bytes, terminator excluded.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_deref().map_or(&[], StrBuf::as_bytes)
    }

    /// Content as a [`BStr`], the conventionally-UTF-8 byte-string view.
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        BStr::new(self.as_bytes())
    }

    /// Content as a C string, terminator included.
    ///
    /// The stored text never contains an interior NUL, so the view always
    /// exists; the empty state yields `c""`.
    #[must_use]
    pub fn as_c_str(&self) -> &CStr {
        match &self.buf {
            Some(buf) => CStr::from_bytes_with_nul(buf.as_bytes_with_nul()).unwrap_or(c""),
            None => c"",
        }
    }

    /// Length in bytes, terminator excluded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.as_deref().map_or(0, StrBuf::len)
    }

    /// Whether this value is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Allocated capacity in bytes, terminator slot included; zero for the
    /// empty state.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.as_deref().map_or(0, StrBuf::capacity)
    }

    /// Address of the first content byte.
    ///
    /// Stable for as long as the backing buffer is alive, which makes it the
    /// observable handle on whether an operation reused an allocation or
    /// moved to a new one. Dangling for the empty state.
    #[must_use]
    pub fn as_ptr(&self) -> *const u8 {
        self.as_bytes().as_ptr()
    }

    /// Drops the buffer reference, returning to the empty state. Other
    /// owners of the buffer are unaffected.
    pub fn clear(&mut self) {
        self.buf = None;
    }

    /// Replaces the content.
    ///
    /// When this value is the sole owner of its buffer and the capacity
    /// holds the new content, the buffer is rewritten in place with no
    /// allocation; otherwise the old reference is dropped and an
    /// exactly-sized buffer allocated. Empty content clears to the empty
    /// state.
    ///
    /// # Errors
    ///
    /// [`OomError`] when a fresh buffer is needed and cannot be allocated.
    pub fn assign(&mut self, content: impl AsRef<[u8]>) -> Result<(), OomError> {
        let content = clip_at_nul(content.as_ref());
        if content.is_empty() {
            self.buf = None;
            return Ok(());
        }
        let needed = content.len() + 1;
        if let Some(rc) = &mut self.buf {
            if let Some(buf) = Rc::get_mut(rc) {
                if buf.fits(needed) {
                    buf.set_content(content);
                    return Ok(());
                }
            }
        }
        self.buf = Some(Rc::new(StrBuf::with_content(content)?));
        Ok(())
    }

    /// Appends `tail` to this value.
    ///
    /// Appending empty text is a no-op, even on a shared buffer. With sole
    /// ownership and enough spare capacity the bytes land in place after the
    /// current content; otherwise the content and `tail` are copied into a
    /// new buffer of exactly the required size and the old reference is
    /// dropped, leaving any other owners on the original buffer unchanged.
    ///
    /// # Errors
    ///
    /// [`OomError`] when the grown buffer cannot be allocated.
    pub fn push(&mut self, tail: impl AsRef<[u8]>) -> Result<(), OomError> {
        let tail = clip_at_nul(tail.as_ref());
        if tail.is_empty() {
            return Ok(());
        }
        let needed = self.len() + tail.len() + 1;
        if let Some(rc) = &mut self.buf {
            if let Some(buf) = Rc::get_mut(rc) {
                if buf.fits(needed) {
                    buf.append(tail);
                    return Ok(());
                }
            }
        }
        let mut grown = StrBuf::allocate(needed)?;
        grown.set_content(self.as_bytes());
        grown.append(tail);
        self.buf = Some(Rc::new(grown));
        Ok(())
    }

    /// Concatenation: clones the receiver, then appends `tail` to the
    /// clone. Neither operand is mutated.
    ///
    /// # Errors
    ///
    /// [`OomError`] when the combined buffer cannot be allocated.
    pub fn concat(&self, tail: impl AsRef<[u8]>) -> Result<Self, OomError> {
        let mut combined = self.clone();
        combined.push(tail)?;
        Ok(combined)
    }

    #[cfg(test)]
    pub(crate) fn ref_count(&self) -> usize {
        self.buf.as_ref().map_or(0, Rc::strong_count)
    }
}

/// Clips `content` at the first NUL byte, the boundary the terminator model
/// imposes on stored text.
pub(crate) fn clip_at_nul(content: &[u8]) -> &[u8] {
    match content.find_byte(0) {
        Some(at) => &content[..at],
        None => content,
    }
}

impl TryFrom<&str> for CowStr {
    type Error = OomError;

    fn try_from(content: &str) -> Result<Self, OomError> {
        Self::from_bytes(content.as_bytes())
    }
}

impl TryFrom<&[u8]> for CowStr {
    type Error = OomError;

    fn try_from(content: &[u8]) -> Result<Self, OomError> {
        Self::from_bytes(content)
    }
}

impl FromStr for CowStr {
    type Err = OomError;

    fn from_str(content: &str) -> Result<Self, OomError> {
        Self::from_bytes(content.as_bytes())
    }
}

impl AsRef<[u8]> for CowStr {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for CowStr {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for CowStr {}

impl PartialEq<[u8]> for CowStr {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for CowStr {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<str> for CowStr {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for CowStr {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<CowStr> for str {
    fn eq(&self, other: &CowStr) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<CowStr> for &str {
    fn eq(&self, other: &CowStr) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialOrd for CowStr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CowStr {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Hash for CowStr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl fmt::Display for CowStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bstr(), f)
    }
}

impl fmt::Debug for CowStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_bstr(), f)
    }
}
