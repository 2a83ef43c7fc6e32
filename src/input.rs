use crate::{common::MAX_ELEMENTS, Error, Result};
use log::debug;
use std::{collections::HashSet, hash::Hash};

/// The distinct elements of a raw input, in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSet<E> {
    elements: Vec<E>,
    raw_len: usize,
}

impl<E: Ord + Hash> InputSet<E> {
    pub fn new<I: IntoIterator<Item = E>>(raw: I) -> Result<Self> {
        let raw: Vec<E> = raw.into_iter().collect();
        let raw_len = raw.len();
        let keep: Vec<bool> = {
            let mut seen: HashSet<&E, ahash::RandomState> = HashSet::default();
            raw.iter().map(|e| seen.insert(e)).collect()
        };
        let elements: Vec<E> = raw
            .into_iter()
            .zip(keep)
            .filter_map(|(e, keep)| keep.then_some(e))
            .collect();
        if elements.len() > MAX_ELEMENTS {
            return Err(Error::InvalidInput(format!(
                "{} distinct elements, at most {MAX_ELEMENTS} are supported",
                elements.len()
            )));
        }
        if elements.len() != raw_len {
            debug!(
                "collapsed {raw_len} raw tokens into {} distinct elements",
                elements.len()
            );
        }
        Ok(Self { elements, raw_len })
    }
}

impl<E> InputSet<E> {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of tokens before duplicates were dropped.
    pub fn raw_len(&self) -> usize {
        self.raw_len
    }

    pub fn collapsed(&self) -> bool {
        self.raw_len != self.elements.len()
    }

    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.elements.iter()
    }
}
