//! Mapping from global source node ids to batch-local slots.

use core::ops::Index;

const UNMAPPED: usize = usize::MAX;

/// Dense `source -> local id` table valid for one batch.
///
/// Lookups are a single array read; [`clear`](Self::clear) only touches the
/// entries assigned since the previous clear.
#[derive(Debug, Clone)]
pub struct LocalIds {
    local: Vec<usize>,
    sources: Vec<usize>,
}

impl LocalIds {
    /// Creates an empty mapping over `node_count` possible sources.
    pub fn new(node_count: usize) -> Self {
        Self {
            local: vec![UNMAPPED; node_count],
            sources: Vec::new(),
        }
    }

    /// Assigns the next local id to `source` and returns it.
    ///
    /// Returns `None` if `source` is already mapped.
    ///
    /// # Panics
    /// Panics if `source` is outside the node range.
    pub fn push(&mut self, source: usize) -> Option<usize> {
        if self.local[source] != UNMAPPED {
            return None;
        }
        let id = self.sources.len();
        self.local[source] = id;
        self.sources.push(source);
        Some(id)
    }

    /// Local id of `source`, if it belongs to the current batch.
    #[inline]
    pub fn get(&self, source: usize) -> Option<usize> {
        match self.local.get(source) {
            Some(&id) if id != UNMAPPED => Some(id),
            _ => None,
        }
    }

    /// Number of mapped sources.
    #[inline]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns `true` if no source is mapped.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Mapped sources in local-id order.
    #[inline]
    pub fn sources(&self) -> &[usize] {
        &self.sources
    }

    /// Iterates `(source, local id)` pairs in local-id order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, usize)> + '_ {
        self.sources.iter().copied().enumerate().map(|(id, s)| (s, id))
    }

    /// Forgets every mapping.
    pub fn clear(&mut self) {
        for &source in &self.sources {
            self.local[source] = UNMAPPED;
        }
        self.sources.clear();
    }
}

impl Index<usize> for LocalIds {
    type Output = usize;

    /// # Panics
    /// Panics if `source` is not part of the current batch.
    #[inline]
    fn index(&self, source: usize) -> &usize {
        let id = &self.local[source];
        assert!(*id != UNMAPPED, "source {source} is not part of the active batch");
        id
    }
}
