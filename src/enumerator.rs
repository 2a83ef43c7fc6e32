use crate::{
    registry::SeenRegistry,
    walker::{AnyWalker, Walker},
    InputSet, Report, Result, Strategy,
};
use log::{debug, trace};
use std::{hash::Hash, ops::ControlFlow};

/// Lazily yields every subset of an [`InputSet`] exactly once.
///
/// A subset is registered as seen before it is handed out, so dropping the
/// iterator at any point leaves every yielded subset accounted for.
pub struct Subsets<'a, E> {
    walker: AnyWalker<'a, E>,
    seen: SeenRegistry<'a, E>,
    proposed: usize,
}

impl<'a, E: Ord + Hash> Subsets<'a, E> {
    pub fn new(input: &'a InputSet<E>, strategy: Strategy) -> Self {
        debug!(
            "walking {} distinct elements with strategy {strategy}",
            input.len()
        );
        Self {
            walker: AnyWalker::new(strategy, input.elements()),
            seen: SeenRegistry::new(),
            proposed: 0,
        }
    }

    /// Candidates the walker produced so far, repeats included.
    pub fn proposed(&self) -> usize {
        self.proposed
    }

    /// Distinct subsets yielded so far.
    pub fn yielded(&self) -> usize {
        self.seen.len()
    }
}

impl<'a, E: Ord + Hash> Iterator for Subsets<'a, E> {
    type Item = Vec<&'a E>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(candidate) = self.walker.next_candidate() {
            self.proposed += 1;
            if self.seen.mark_if_new(&candidate) {
                self.walker.accept(&candidate);
                return Some(candidate);
            }
            trace!("dropping repeated subset #{}", self.proposed);
        }
        None
    }
}

/// An input set bound to the strategy that will walk it.
#[derive(Debug, Clone)]
pub struct SubsetEnumerator<E> {
    input: InputSet<E>,
    strategy: Strategy,
}

impl<E: Ord + Hash> SubsetEnumerator<E> {
    pub fn new<I: IntoIterator<Item = E>>(raw: I, strategy: Strategy) -> Result<Self> {
        let input = InputSet::new(raw)?;
        Ok(Self { input, strategy })
    }

    /// Resolves `name` before looking at `raw`, so an unknown strategy
    /// costs nothing.
    pub fn by_name<I: IntoIterator<Item = E>>(raw: I, name: &str) -> Result<Self> {
        let strategy: Strategy = name.parse()?;
        Self::new(raw, strategy)
    }

    pub fn input(&self) -> &InputSet<E> {
        &self.input
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn iter(&self) -> Subsets<'_, E> {
        Subsets::new(&self.input, self.strategy)
    }

    /// Feeds every subset to `consumer` until it breaks or the power set is
    /// exhausted.
    pub fn run<F>(&self, mut consumer: F) -> Report
    where
        F: FnMut(&[&E]) -> ControlFlow<()>,
    {
        let mut subsets = self.iter();
        let mut emitted = 0u128;
        let mut completed = true;
        for subset in subsets.by_ref() {
            emitted += 1;
            if consumer(&subset).is_break() {
                completed = false;
                break;
            }
        }
        debug!(
            "{}: {} proposed, {} emitted",
            self.strategy,
            subsets.proposed(),
            emitted
        );
        Report {
            strategy: self.strategy,
            raw_len: self.input.raw_len(),
            distinct: self.input.len(),
            emitted,
            completed,
        }
    }
}

impl<'a, E: Ord + Hash> IntoIterator for &'a SubsetEnumerator<E> {
    type Item = Vec<&'a E>;
    type IntoIter = Subsets<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Enumerates the power set of the distinct elements of `raw` with the
/// strategy called `strategy`, handing each subset to `consumer`.
pub fn enumerate_subsets<E, I, F>(raw: I, strategy: &str, consumer: F) -> Result<Report>
where
    E: Ord + Hash,
    I: IntoIterator<Item = E>,
    F: FnMut(&[&E]) -> ControlFlow<()>,
{
    let enumerator = SubsetEnumerator::by_name(raw, strategy)?;
    Ok(enumerator.run(consumer))
}
