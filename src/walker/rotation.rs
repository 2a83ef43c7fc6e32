use super::*;
use crate::rotation::rotate;

/// Rotation backtracking.
///
/// A frame holds the remaining candidates and the subset accumulated so far.
/// Processing a frame emits the subset (when asked to), then, while the
/// subset is still smaller than the candidates, rotates the candidates and
/// forks into two frames:
///
/// - the rotated candidates with their last element added to the subset,
///   emitting on arrival;
/// - the rotated candidates without their last element and the same subset,
///   not emitting, since that subset has already been emitted.
///
/// Frames are kept on an explicit stack so that every frame owns its state;
/// the first fork is processed completely before the second.
pub struct RotationWalker<'a, E> {
    stack: Vec<Frame<'a, E>>,
}

struct Frame<'a, E> {
    candidates: Vec<&'a E>,
    subset: Vec<&'a E>,
    emit: bool,
}

impl<'a, E> RotationWalker<'a, E> {
    pub fn new(elements: &'a [E]) -> Self {
        let root = Frame {
            candidates: elements.iter().collect(),
            subset: vec![],
            emit: true,
        };
        Self { stack: vec![root] }
    }
}

impl<'a, E> Walker<'a, E> for RotationWalker<'a, E> {
    fn next_candidate(&mut self) -> Option<Vec<&'a E>> {
        while let Some(Frame {
            candidates,
            subset,
            emit,
        }) = self.stack.pop()
        {
            let emitted = emit.then(|| subset.clone());
            if subset.len() < candidates.len() {
                let rotated = rotate(&candidates);
                let mut without = rotated.clone();
                let entry = without.pop()?;
                if !without.is_empty() {
                    self.stack.push(Frame {
                        candidates: without,
                        subset: subset.clone(),
                        emit: false,
                    });
                }
                let mut with = subset;
                with.push(entry);
                self.stack.push(Frame {
                    candidates: rotated,
                    subset: with,
                    emit: true,
                });
            }
            if emitted.is_some() {
                return emitted;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(mut w: RotationWalker<'_, i32>) -> Vec<Vec<i32>> {
        let mut res = vec![];
        while let Some(ss) = w.next_candidate() {
            res.push(ss.into_iter().copied().collect());
        }
        res
    }

    #[test]
    fn zero() {
        assert_eq!(drain(RotationWalker::new(&[])), vec![Vec::<i32>::new()]);
    }

    #[test]
    fn three_in_walk_order() {
        let trial = drain(RotationWalker::new(&[1, 2, 3]));
        let oracle: Vec<Vec<i32>> = vec![
            vec![],
            vec![1],
            vec![1, 2],
            vec![1, 2, 3],
            vec![1, 3],
            vec![2],
            vec![2, 3],
            vec![3],
        ];
        assert_eq!(trial, oracle);
    }

    #[test]
    fn never_repeats_an_element_within_a_subset() {
        let whole: Vec<i32> = (0..9).collect();
        for ss in drain(RotationWalker::new(&whole)) {
            let mut sorted = ss.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), ss.len(), "{ss:?}");
        }
    }
}
