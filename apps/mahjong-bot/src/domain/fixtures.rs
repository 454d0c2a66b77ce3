use super::tiles_types::Tile;

/// Centralized helper for parsing hardcoded tile tokens in tests and demo transcripts.
pub struct TileFixtures;

impl TileFixtures {
    /// Parse a space-separated list of hardcoded tile tokens (e.g., `"W1 W2 B0"`).
    ///
    /// Only for tokens known to be valid at the call site; panics otherwise.
    pub fn parse_hand(tokens: &str) -> Vec<Tile> {
        tokens
            .split_whitespace()
            .map(|s| {
                #[allow(clippy::expect_used)]
                s.parse::<Tile>().expect("hardcoded valid tile token")
            })
            .collect()
    }

    /// Parse a single hardcoded tile token.
    pub fn tile(token: &str) -> Tile {
        #[allow(clippy::expect_used)]
        token.parse::<Tile>().expect("hardcoded valid tile token")
    }

    /// Parse and sort, ready for meld scanning.
    pub fn sorted_hand(tokens: &str) -> Vec<Tile> {
        let mut tiles = Self::parse_hand(tokens);
        tiles.sort();
        tiles
    }
}
