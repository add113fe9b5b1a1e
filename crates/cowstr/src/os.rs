//! Path queries, directory manipulation, and process execution.
//!
//! The query helpers answer `false` on a failed stat instead of erroring;
//! callers use them as guards, not as probes for diagnostics. The
//! manipulation helpers surface the OS error description untouched.

use alloc::vec::Vec;
use std::{fs, path::Path, process::Command};

use crate::{error::Error, string::CowStr, OomError};

/// Whether `path` names an existing directory.
#[must_use]
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_dir())
}

/// Whether `path` names an existing regular file.
#[must_use]
pub fn is_file(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_file())
}

/// Whether `path` names a symbolic link; the link itself is examined, not
/// its target.
#[must_use]
pub fn is_symlink(path: impl AsRef<Path>) -> bool {
    fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink())
}

/// The entry names of a directory, `.` and `..` excluded.
///
/// # Errors
///
/// [`Error::Io`] when the directory cannot be read.
pub fn list_dir(path: impl AsRef<Path>) -> Result<Vec<CowStr>, Error> {
    let mut names = Vec::new();
    for entry in fs::read_dir(path)? {
        let name = entry?.file_name();
        names.push(CowStr::from_bytes(name.to_string_lossy().as_bytes())?);
    }
    Ok(names)
}

/// Creates a single directory.
///
/// # Errors
///
/// [`Error::Io`] with the OS description on failure.
pub fn make_dir(path: impl AsRef<Path>) -> Result<(), Error> {
    fs::create_dir(path)?;
    Ok(())
}

/// Creates a directory and any missing parents.
///
/// # Errors
///
/// [`Error::Io`] with the OS description on failure.
pub fn make_dirs(path: impl AsRef<Path>) -> Result<(), Error> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Removes an empty directory.
///
/// # Errors
///
/// [`Error::Io`] with the OS description on failure.
pub fn remove_dir(path: impl AsRef<Path>) -> Result<(), Error> {
    fs::remove_dir(path)?;
    Ok(())
}

/// Removes a file.
///
/// # Errors
///
/// [`Error::Io`] with the OS description on failure.
pub fn remove_file(path: impl AsRef<Path>) -> Result<(), Error> {
    fs::remove_file(path)?;
    Ok(())
}

/// Runs `command` through the system shell, blocking until it exits, and
/// returns the exit status. Output is not captured. A signal-terminated
/// child reports `-1`.
///
/// # Errors
///
/// [`Error::Io`] when the shell itself cannot be spawned.
pub fn run(command: impl AsRef<str>) -> Result<i32, Error> {
    let status = shell(command.as_ref()).status()?;
    Ok(status.code().unwrap_or(-1))
}

#[cfg(unix)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

/// A fresh random (v4) UUID in lowercase hyphenated form.
///
/// # Errors
///
/// [`OomError`] when the 36-byte buffer cannot be allocated.
pub fn uuid4() -> Result<CowStr, OomError> {
    crate::cow_format!("{}", uuid::Uuid::new_v4())
}
