//! Serde support for [`CowStr`], enabled by the `serde` feature.
//!
//! Values serialize as strings when the content is valid UTF-8 and as byte
//! strings otherwise; both forms deserialize back.

use core::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::CowStr;

impl Serialize for CowStr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match core::str::from_utf8(self.as_bytes()) {
            Ok(text) => serializer.serialize_str(text),
            Err(_) => serializer.serialize_bytes(self.as_bytes()),
        }
    }
}

struct CowStrVisitor;

impl de::Visitor<'_> for CowStrVisitor {
    type Value = CowStr;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or byte string")
    }

    fn visit_str<E: de::Error>(self, content: &str) -> Result<CowStr, E> {
        CowStr::from_bytes(content.as_bytes()).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, content: &[u8]) -> Result<CowStr, E> {
        CowStr::from_bytes(content).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for CowStr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(CowStrVisitor)
    }
}
