use super::*;

/// One include/exclude decision per input position.
///
/// Every leaf of the decision tree is a distinct subset, listed in input
/// order; "absent" is explored before "present" at each position.
pub struct BinaryChoiceWalker<'a, E> {
    whole: &'a [E],
    stack: Vec<(usize, Vec<&'a E>)>,
}

impl<'a, E> BinaryChoiceWalker<'a, E> {
    pub fn new(whole: &'a [E]) -> Self {
        Self {
            whole,
            stack: vec![(0, vec![])],
        }
    }
}

impl<'a, E> Walker<'a, E> for BinaryChoiceWalker<'a, E> {
    fn next_candidate(&mut self) -> Option<Vec<&'a E>> {
        while let Some((idx, buf)) = self.stack.pop() {
            if idx == self.whole.len() {
                return Some(buf);
            }
            let mut present = buf.clone();
            present.push(&self.whole[idx]);
            self.stack.push((idx + 1, present));
            self.stack.push((idx + 1, buf));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn drain<'a>(whole: &'a [i32]) -> Vec<Vec<&'a i32>> {
        let mut w = BinaryChoiceWalker::new(whole);
        let mut res = vec![];
        while let Some(ss) = w.next_candidate() {
            res.push(ss);
        }
        res
    }

    #[test]
    fn zero() {
        let subsets = drain(&[]);
        assert_eq!(subsets.len(), 1, "{subsets:?}");
        assert!(subsets[0].is_empty(), "{subsets:?}");
    }

    #[test]
    fn one() {
        let whole = vec![1];
        check(&whole, &drain(&whole));
    }

    #[test]
    fn two() {
        let whole = vec![1, 2];
        let subsets = drain(&whole);
        check(&whole, &subsets);
        assert_eq!(subsets, vec![vec![], vec![&2], vec![&1], vec![&1, &2]]);
    }

    #[test]
    fn eight() {
        let whole: Vec<i32> = (0..8).collect();
        check(&whole, &drain(&whole));
    }

    fn check(whole: &[i32], subsets: &[Vec<&i32>]) {
        assert_eq!(subsets.len(), 1 << whole.len());
        check_all_are_subset(whole, subsets);
        check_pairwisely_diff(subsets);
    }

    fn check_all_are_subset(whole: &[i32], subsets: &[Vec<&i32>]) {
        let whole: HashSet<i32, ahash::RandomState> = whole.iter().copied().collect();
        for ss in subsets.iter() {
            for e in ss.iter() {
                assert!(whole.contains(*e));
            }
        }
    }

    fn check_pairwisely_diff(subsets: &[Vec<&i32>]) {
        let mut iter0 = subsets.iter();
        while let Some(ss0) = iter0.next() {
            for ss1 in iter0.clone() {
                assert_ne!(ss0, ss1);
            }
        }
    }
}
