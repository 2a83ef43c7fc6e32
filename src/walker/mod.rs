mod traits;
pub use self::traits::*;
pub mod binary;
pub use self::binary::BinaryChoiceWalker;
pub mod rotation;
pub use self::rotation::RotationWalker;
pub mod sweep;
pub use self::sweep::LevelSweepWalker;

use crate::Strategy;

/// The walker behind one [`Strategy`].
pub enum AnyWalker<'a, E> {
    Rotation(RotationWalker<'a, E>),
    BinaryChoice(BinaryChoiceWalker<'a, E>),
    LevelSweep(LevelSweepWalker<'a, E>),
}

impl<'a, E: Ord> AnyWalker<'a, E> {
    pub fn new(strategy: Strategy, whole: &'a [E]) -> Self {
        match strategy {
            Strategy::Rotation => Self::Rotation(RotationWalker::new(whole)),
            Strategy::BinaryChoice => Self::BinaryChoice(BinaryChoiceWalker::new(whole)),
            Strategy::LevelSweep => Self::LevelSweep(LevelSweepWalker::new(whole)),
        }
    }
}

impl<'a, E: Ord> Walker<'a, E> for AnyWalker<'a, E> {
    fn next_candidate(&mut self) -> Option<Vec<&'a E>> {
        match self {
            Self::Rotation(x) => x.next_candidate(),
            Self::BinaryChoice(x) => x.next_candidate(),
            Self::LevelSweep(x) => x.next_candidate(),
        }
    }

    fn accept(&mut self, subset: &[&'a E]) {
        match self {
            Self::Rotation(x) => x.accept(subset),
            Self::BinaryChoice(x) => x.accept(subset),
            Self::LevelSweep(x) => x.accept(subset),
        }
    }
}
