//! Catalog entry view consumed by the selector and comparator.

use serde::{Deserialize, Serialize};

/// Number of type slots an entry can occupy.
pub const TYPE_SLOTS: usize = 2;

/// Sprite CDN serving one image per catalog id.
const SPRITE_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// One catalog entry with the attributes the game compares.
///
/// `types` keeps the source slot order (type1, type2). An empty slot is
/// represented by absence, never by a "none" label, and labels never repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DexEntry {
    pub id: i32,
    pub name: String,
    pub gen: i16,
    pub height_dm: i32,
    pub weight_hg: i32,
    pub types: Vec<String>,
    pub habitat: String,
    pub color: String,
    pub evolution_stage: i16,
}

impl DexEntry {
    /// Type label at slot `p`, if occupied.
    pub fn type_at(&self, p: usize) -> Option<&str> {
        self.types.get(p).map(String::as_str)
    }

    /// Whether `label` occupies any type slot.
    pub fn has_type(&self, label: &str) -> bool {
        self.types.iter().any(|t| t == label)
    }

    pub fn sprite_url(&self) -> String {
        sprite_url(self.id)
    }
}

/// Sprite URL for a catalog id.
pub fn sprite_url(id: i32) -> String {
    format!("{SPRITE_BASE}/{id}.png")
}
