//! **mazer-core**: the tile maze model shared by the *mazer* crates.
//!
//! A maze is a flat, row-major sequence of [`Cell`] states with a fixed row
//! width. This crate answers adjacency queries over that sequence and
//! converts between flat indices and [`Point`] coordinates. It has no
//! knowledge of search or planning.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod view;

pub use cell::Cell;
pub use error::GridError;
pub use geom::{Direction, Point};
pub use grid::{DEFAULT_WIDTH, Grid};
pub use view::Tiles;
