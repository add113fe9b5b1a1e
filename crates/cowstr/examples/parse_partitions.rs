//! Reads `/proc/partitions` and prints the block devices it names, one per
//! line, demonstrating the line-oriented collaborator and the text
//! operations together.
//!
//! Run with: `cargo run --example parse_partitions`

use cowstr::{cow_format, CowStr, OpenMode, TextFile};

fn main() -> Result<(), cowstr::Error> {
    let mut file = TextFile::open("/proc/partitions", OpenMode::Read)?;

    // Header line plus a blank separator, then one device per line:
    //   major minor  #blocks  name
    let mut devices: Vec<CowStr> = Vec::new();
    for line in file.read_lines()? {
        let fields = line.strip()?.split_whitespace()?;
        if fields.len() == 4 && fields[3] != "name" {
            devices.push(fields[3].clone());
        }
    }
    file.close()?;

    let listing = CowStr::try_from("\n")?.join(&devices)?;
    println!("{}", cow_format!("{} devices:\n{listing}", devices.len())?);
    Ok(())
}
