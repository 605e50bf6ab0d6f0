//! Praxis Nav - navigation shell descriptor
//!
//! The fixed, ordered list of navigation entries the application shell
//! renders. Pure data: labels, route paths, and opaque icon keys the UI
//! layer resolves to concrete glyphs. Initialized at compile time,
//! immutable thereafter, no operations beyond enumeration and lookup.

#![warn(unreachable_pub)]

pub mod menu;

pub use menu::{find_by_path, main_menu, IconKey, MenuItem, MAIN_MENU};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
