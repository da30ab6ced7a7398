//! Compact multi-map from a node to its shortest-path predecessors.

const NIL: usize = usize::MAX;

#[derive(Debug, Clone, Copy)]
struct Link {
    predecessor: usize,
    next: usize,
}

/// Predecessor lists of one source, stored as intrusive singly linked lists.
///
/// All links live in one growable arena; `heads[node]` points at the most
/// recently appended predecessor of `node`. Appending is `O(1)` and never
/// allocates per node.
#[derive(Debug, Clone)]
pub struct Paths {
    heads: Vec<usize>,
    links: Vec<Link>,
}

impl Paths {
    /// Creates empty lists for `node_count` nodes.
    pub fn new(node_count: usize) -> Self {
        Self {
            heads: vec![NIL; node_count],
            links: Vec::new(),
        }
    }

    /// Records `predecessor` as a predecessor of `node`.
    #[inline]
    pub fn append(&mut self, node: usize, predecessor: usize) {
        let next = self.heads[node];
        self.heads[node] = self.links.len();
        self.links.push(Link { predecessor, next });
    }

    /// Iterates the predecessors of `node`, most recent first.
    #[inline]
    pub fn predecessors(&self, node: usize) -> Predecessors<'_> {
        Predecessors {
            links: &self.links,
            cursor: self.heads[node],
        }
    }

    /// Returns `true` if `node` has no recorded predecessor.
    #[inline]
    pub fn is_empty_at(&self, node: usize) -> bool {
        self.heads[node] == NIL
    }

    /// Total number of recorded predecessor links.
    #[inline]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Detaches the list of `node`. Its links stay in the arena until
    /// [`release_links`](Self::release_links).
    #[inline]
    pub fn clear_node(&mut self, node: usize) {
        self.heads[node] = NIL;
    }

    /// Drops every link. Only valid once every node has been detached.
    pub fn release_links(&mut self) {
        debug_assert!(self.heads.iter().all(|&h| h == NIL));
        self.links.clear();
    }

    /// Resets every list.
    pub fn clear(&mut self) {
        self.heads.fill(NIL);
        self.links.clear();
    }
}

/// Iterator over the predecessors of one node.
#[derive(Debug, Clone)]
pub struct Predecessors<'a> {
    links: &'a [Link],
    cursor: usize,
}

impl Iterator for Predecessors<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        let link = self.links.get(self.cursor)?;
        self.cursor = link.next;
        Some(link.predecessor)
    }
}
