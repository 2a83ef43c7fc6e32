use super::*;
use crate::{
    canonical::{canonicalize, CanonicalKey},
    rotation::Rotations,
};

/// Level-by-level sweep.
///
/// Proposes every singleton first. Each following round takes the next
/// rotation of the input and extends every subset accepted in the previous
/// round by each element of that rotation it does not hold yet. The round
/// whose rotation is the input order again is skipped. The full set and the
/// empty set are proposed last.
///
/// Most proposals of a round are repeats; only the ones the registry
/// accepts make up the next round.
pub struct LevelSweepWalker<'a, E> {
    whole: &'a [E],
    phase: Phase,
    rotations: Rotations<&'a E>,
    rotation: Vec<&'a E>,
    frontier: Vec<CanonicalKey<'a, E>>,
    next_level: Vec<CanonicalKey<'a, E>>,
    key_idx: usize,
    elem_idx: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Singles(usize),
    Levels,
    Full,
    Empty,
    Done,
}

impl<'a, E: Ord> LevelSweepWalker<'a, E> {
    pub fn new(whole: &'a [E]) -> Self {
        let refs: Vec<&'a E> = whole.iter().collect();
        let phase = if whole.is_empty() {
            Phase::Empty
        } else {
            Phase::Singles(0)
        };
        Self {
            whole,
            phase,
            rotations: Rotations::new(&refs),
            rotation: refs,
            frontier: vec![],
            next_level: vec![],
            key_idx: 0,
            elem_idx: 0,
        }
    }

    fn next_round(&mut self) {
        self.frontier = std::mem::take(&mut self.next_level);
        self.key_idx = 0;
        self.elem_idx = 0;
        for rotation in self.rotations.by_ref() {
            if rotation.iter().copied().eq(self.whole.iter()) {
                continue;
            }
            self.rotation = rotation;
            return;
        }
        self.phase = Phase::Full;
    }

    fn next_in_round(&mut self) -> Option<Vec<&'a E>> {
        while let Some(key) = self.frontier.get(self.key_idx) {
            while let Some(e) = self.rotation.get(self.elem_idx).copied() {
                self.elem_idx += 1;
                if !key.contains(e) {
                    let mut candidate = key.as_subset().to_vec();
                    candidate.push(e);
                    return Some(candidate);
                }
            }
            self.key_idx += 1;
            self.elem_idx = 0;
        }
        None
    }
}

impl<'a, E: Ord> Walker<'a, E> for LevelSweepWalker<'a, E> {
    fn next_candidate(&mut self) -> Option<Vec<&'a E>> {
        loop {
            match self.phase {
                Phase::Singles(idx) => {
                    if let Some(e) = self.whole.get(idx) {
                        self.phase = Phase::Singles(idx + 1);
                        return Some(vec![e]);
                    }
                    self.phase = Phase::Levels;
                    self.next_round();
                }
                Phase::Levels => {
                    if let Some(candidate) = self.next_in_round() {
                        return Some(candidate);
                    }
                    self.next_round();
                }
                Phase::Full => {
                    self.phase = Phase::Empty;
                    return Some(self.whole.iter().collect());
                }
                Phase::Empty => {
                    self.phase = Phase::Done;
                    return Some(vec![]);
                }
                Phase::Done => return None,
            }
        }
    }

    fn accept(&mut self, subset: &[&'a E]) {
        if matches!(self.phase, Phase::Singles(_) | Phase::Levels) {
            self.next_level.push(canonicalize(subset));
        }
    }
}
