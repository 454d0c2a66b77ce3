//! Serialization and deserialization for tiles, using the wire token form

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::tiles_types::Tile;

impl Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Tile>().map_err(serde::de::Error::custom)
    }
}
