//! Domain layer: pure game logic types and helpers.
//!
//! Everything here is synchronous, side-effect free and safe under
//! arbitrary concurrent invocation; no shared mutable state is read or
//! written.

pub mod compare;
pub mod dex;
pub mod modes;
pub mod selector;
pub mod session;
pub mod verdict;

#[cfg(test)]
mod tests_compare;
#[cfg(test)]
mod tests_modes;
#[cfg(test)]
mod tests_props;
#[cfg(test)]
mod tests_selector;
#[cfg(test)]
mod tests_session;

// Re-exports for ergonomics
pub use compare::{compare, ColumnVerdicts, Comparison};
pub use dex::{sprite_url, DexEntry};
pub use modes::{resolve_mode, ModeConfig};
pub use selector::select_target;
pub use verdict::Verdict;
