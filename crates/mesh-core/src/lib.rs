//! Core simulation for the animated background mesh: a jittered triangular
//! lattice whose margin points carry stochastically rewired small-world
//! shortcut edges, with a boundary sweep that tracks the side menu.
//!
//! Everything here is host-testable; the drawing surface is an abstract
//! trait and all time comes in as explicit millisecond values.

pub mod boundary;
pub mod constants;
pub mod field;
pub mod lattice;
pub mod params;
mod render;
pub mod shortcut;
pub mod surface;

pub use boundary::*;
pub use field::*;
pub use lattice::*;
pub use params::*;
pub use shortcut::*;
pub use surface::*;
