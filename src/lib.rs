pub mod canonical;
pub use self::canonical::{canonicalize, CanonicalKey};
pub mod registry;
pub use self::registry::SeenRegistry;
pub mod rotation;
pub use self::rotation::{rotate, Rotations};
mod common;
pub use self::common::*;
mod error;
pub use self::error::{Error, Result};
mod input;
pub use self::input::InputSet;
mod strategy;
pub use self::strategy::Strategy;
mod report;
pub use self::report::Report;
mod enumerator;
pub use self::enumerator::{enumerate_subsets, SubsetEnumerator, Subsets};

pub mod format;
pub mod walker;
