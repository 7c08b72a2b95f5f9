//! Disjoint sets of identifiers.
//!
//! The equivalence engine records every pair of named types it has started
//! comparing. Meeting a pair that is already in the same set means the
//! comparison has come back around a recursive definition, and the pair is
//! assumed equivalent (co-inductively).

use crate::{String, Vec};
use hashbrown::HashMap;

/// Union-find over identifiers with path halving and union by rank.
///
/// Identifiers are added on first use; every identifier starts in its own
/// singleton set.
#[derive(Debug, Default, Clone)]
pub struct UnionFind {
    index: HashMap<String, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct identifiers seen so far.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Merge the sets of `a` and `b`.
    ///
    /// Returns true if they were already in the same set, false if this
    /// call joined two previously separate sets.
    pub fn make_union(&mut self, a: &str, b: &str) -> bool {
        let a = self.id(a);
        let b = self.id(b);
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return true;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            core::cmp::Ordering::Less => self.parent[root_a] = root_b,
            core::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            core::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        false
    }

    /// Returns true if `a` and `b` are in the same set.
    ///
    /// Unknown identifiers are only in the same set as themselves.
    pub fn same_set(&mut self, a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }
        match (self.index.get(a).copied(), self.index.get(b).copied()) {
            (Some(a), Some(b)) => self.find(a) == self.find(b),
            _ => false,
        }
    }

    fn id(&mut self, name: &str) -> usize {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.parent.len();
        self.index.insert(String::from(name), id);
        self.parent.push(id);
        self.rank.push(0);
        id
    }

    fn find(&mut self, mut id: usize) -> usize {
        while self.parent[id] != id {
            // Path halving
            self.parent[id] = self.parent[self.parent[id]];
            id = self.parent[id];
        }
        id
    }
}
