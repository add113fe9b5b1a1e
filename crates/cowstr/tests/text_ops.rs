//! Public-surface checks for the value type and its operations.

use cowstr::{cow_format, CowStr, OomError};

#[test]
fn values_behave_like_values() -> Result<(), OomError> {
    let mut path = CowStr::try_from("/sys/kernel")?;
    let root = path.clone();
    path.push("/config")?;
    assert_eq!(path, "/sys/kernel/config");
    assert_eq!(root, "/sys/kernel");
    Ok(())
}

#[test]
fn capacity_reuse_is_observable_through_as_ptr() -> Result<(), OomError> {
    let mut value = CowStr::try_from("0123456789")?;
    value.assign("01")?;
    let home = value.as_ptr();
    for digit in ["2", "3", "4", "5"] {
        value.push(digit)?;
    }
    assert_eq!(value, "012345");
    assert_eq!(value.as_ptr(), home);
    Ok(())
}

#[test]
fn pipeline_of_operations_composes() -> Result<(), OomError> {
    let line = CowStr::try_from("  Device: IBLOCK/disk0 \n")?;
    let cleaned = line.strip()?;
    let kind = cleaned.after("Device: ")?;
    let fields = kind.split_on(b'/')?;
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].lower()?, "iblock");
    assert_eq!(fields[1], "disk0");
    Ok(())
}

#[test]
fn join_and_format_round_out_construction() -> Result<(), OomError> {
    let parts = [
        CowStr::try_from("a")?,
        CowStr::try_from("b")?,
        CowStr::try_from("c")?,
    ];
    let joined = CowStr::try_from(",")?.join(&parts)?;
    assert_eq!(joined, "a,b,c");

    let labeled = cow_format!("[{joined}] n={}", parts.len())?;
    assert_eq!(labeled, "[a,b,c] n=3");
    Ok(())
}

#[test]
fn searching_is_total_on_empty_inputs() -> Result<(), OomError> {
    let empty = CowStr::new();
    assert_eq!(empty.find("x"), None);
    assert!(empty.after("x")?.is_empty());
    assert!(empty.split_whitespace()?.is_empty());
    assert!(empty.split_on(b',')?.is_empty());
    assert!(!empty.starts_with("x"));
    Ok(())
}

#[test]
fn display_and_debug_render_content() -> Result<(), OomError> {
    let value = CowStr::try_from("ab")?;
    assert_eq!(value.to_string(), "ab");
    assert_eq!(format!("{value:?}"), "\"ab\"");
    Ok(())
}
