//! Mode registry: named filters over the catalog.

/// A mode's catalog filter. `gens: None` means the whole catalog.
///
/// Modes are statically defined and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeConfig {
    pub id: &'static str,
    pub gens: Option<&'static [i16]>,
}

/// The unfiltered default mode.
pub const CLASSIC: ModeConfig = ModeConfig {
    id: "classic",
    gens: None,
};

const GEN_MODES: [ModeConfig; 9] = [
    ModeConfig { id: "gen1", gens: Some(&[1]) },
    ModeConfig { id: "gen2", gens: Some(&[2]) },
    ModeConfig { id: "gen3", gens: Some(&[3]) },
    ModeConfig { id: "gen4", gens: Some(&[4]) },
    ModeConfig { id: "gen5", gens: Some(&[5]) },
    ModeConfig { id: "gen6", gens: Some(&[6]) },
    ModeConfig { id: "gen7", gens: Some(&[7]) },
    ModeConfig { id: "gen8", gens: Some(&[8]) },
    ModeConfig { id: "gen9", gens: Some(&[9]) },
];

/// Resolve a client-supplied mode id.
///
/// Total by policy: empty or unrecognized input falls back to `classic`
/// instead of failing. Matching is case-insensitive.
pub fn resolve_mode(mode: &str) -> ModeConfig {
    let m = mode.trim().to_ascii_lowercase();
    GEN_MODES
        .iter()
        .copied()
        .find(|cfg| cfg.id == m)
        .unwrap_or(CLASSIC)
}

/// All recognized mode ids, classic first (mode-selection dashboard order).
pub fn all_modes() -> impl Iterator<Item = ModeConfig> {
    std::iter::once(CLASSIC).chain(GEN_MODES.iter().copied())
}
