/// A source of candidate subsets for one enumeration.
///
/// Candidates may repeat; the driving [`Subsets`](crate::Subsets) iterator
/// drops every candidate whose canonical key it has already seen and
/// reports the survivors back through [`Walker::accept`].
pub trait Walker<'a, E> {
    fn next_candidate(&mut self) -> Option<Vec<&'a E>>;

    fn accept(&mut self, _subset: &[&'a E]) {}
}
