//! Reference-counted, copy-on-write text values.
//!
//! The [`CowStr`] type behaves like a plain string value while sharing its
//! backing allocation between clones: copying a value bumps a reference
//! count, and in-place mutation (assignment reuse, appending) happens only
//! when the buffer has exactly one owner, cloning it first otherwise. The
//! empty string carries no allocation at all.
//!
//! Content is byte-oriented, NUL-terminated text. Case folding and the
//! whitespace predicate are ASCII-only by design, there is no Unicode or
//! locale handling anywhere, and the reference count is not atomic, so
//! values stay on the thread that made them.
//!
//! On top of the value type sit pure text operations (trimming, splitting,
//! joining, case folding, substring search, and formatted construction via
//! [`cow_format!`]), each returning a fresh value and never touching its
//! receiver. With the default `std` feature the crate also ships the narrow
//! I/O collaborators the surrounding tooling consumes: [`TextFile`] for
//! line-oriented file access and the [`os`] module for path queries,
//! directory manipulation, and process execution.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod buffer;
mod error;
mod ops;
mod string;

#[cfg(feature = "serde")]
mod serde_impls;

#[cfg(feature = "std")]
mod file;
#[cfg(feature = "std")]
pub mod os;

#[cfg(test)]
mod tests;

#[cfg(feature = "std")]
pub use error::Error;
pub use error::OomError;
#[cfg(feature = "std")]
pub use file::{OpenMode, TextFile};
pub use string::CowStr;

/// Builds a [`CowStr`] with `format!`-style syntax.
///
/// Expands to a call to [`CowStr::format`], so the result is
/// `Result<CowStr, OomError>`: the output length is measured first and a
/// single exactly-sized buffer is allocated before rendering.
///
/// ```rust
/// # use cowstr::cow_format;
/// let s = cow_format!("{}-{}", 5, "x").unwrap();
/// assert_eq!(s, "5-x");
/// assert!(cow_format!("").unwrap().is_empty());
/// ```
#[macro_export]
macro_rules! cow_format {
    ($($arg:tt)*) => {
        $crate::CowStr::format(core::format_args!($($arg)*))
    };
}
