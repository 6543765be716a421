//! Indexing and tiling for Alpha format world storage.
//!
//! An Alpha format world is a directory tree of gzip compressed NBT level
//! files. Each level sits two directories deep, with both directories named
//! after the base-36 form of the matching coordinate modulo 64:
//!
//! ```text
//! <world>/<base36(x mod 64)>/<base36(z mod 64)>/c.<base36(x)>.<base36(z)>.dat
//! ```
//!
//! [`WorldIndex`] walks such a directory once, discovers every level, applies
//! an optional rotation and bounding window, and yields the levels sorted by
//! `zPos` then `xPos` together with their bounding extent.
//! [`WorldIndex::split`] tiles an index into a grid of disjoint sub-worlds
//! sized for parallel downstream processing.
//!
//! # Example
//!
//! ```no_run
//! use alpha_world::{IndexSettings, WorldIndex};
//!
//! let settings = IndexSettings::default();
//! let index = WorldIndex::open(&settings, "saves/world").unwrap();
//!
//! for cell in &index.split(16).unwrap() {
//!     for level in cell.levels() {
//!         println!("{}", index.level_path(level).display());
//!     }
//! }
//! ```

pub mod base36;
pub mod error;
pub mod index;
pub mod position;
pub mod provider;
pub mod split;

#[cfg(feature = "zip")]
pub mod zip_lister;

pub use crate::error::{Base36DecodeError, IndexError, SplitError};
pub use crate::index::{CoordinateLimits, IndexSettings, WorldIndex};
pub use crate::position::{Level, LevelPosition, Rotation};
pub use crate::split::WorldGrid;
