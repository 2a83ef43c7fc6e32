/// Cyclic left rotation: the first element moves to the back.
pub fn rotate<T: Clone>(seq: &[T]) -> Vec<T> {
    let mut res = Vec::with_capacity(seq.len());
    if let Some((head, tail)) = seq.split_first() {
        res.extend_from_slice(tail);
        res.push(head.clone());
    }
    res
}

/// The successive rotations of a sequence, starting with one step from the
/// original; the `len`-th item is the original ordering again.
pub struct Rotations<T> {
    current: Vec<T>,
    remaining: usize,
}

impl<T: Clone> Rotations<T> {
    pub fn new(seq: &[T]) -> Self {
        Self {
            current: seq.to_vec(),
            remaining: seq.len(),
        }
    }
}

impl<T: Clone> Iterator for Rotations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.current = rotate(&self.current);
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Clone> ExactSizeIterator for Rotations<T> {}
