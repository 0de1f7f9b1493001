use crate::types::VId;
use derive_more::Display;

/// An undirected edge.
///
/// The endpoints are stored in canonical order (smaller id first), so `Edge::new(3, 1)`
/// and `Edge::new(1, 3)` are the same value and display as `1-3`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "{}-{}", _0, _1)]
pub struct Edge(VId, VId);

impl Edge {
    pub fn new(u: VId, v: VId) -> Self {
        debug_assert_ne!(u, v, "self-loop");
        if u < v {
            Edge(u, v)
        } else {
            Edge(v, u)
        }
    }

    /// The smaller endpoint.
    pub fn u(&self) -> VId {
        self.0
    }

    /// The larger endpoint.
    pub fn v(&self) -> VId {
        self.1
    }

    pub fn endpoints(&self) -> (VId, VId) {
        (self.0, self.1)
    }

    pub fn contains(&self, vid: VId) -> bool {
        self.0 == vid || self.1 == vid
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical() {
        assert_eq!(Edge::new(4, 1), Edge::new(1, 4));
        assert_eq!(Edge::new(4, 1).endpoints(), (1, 4));
        assert_eq!(Edge::new(12, 3).to_string(), "3-12");
    }

    #[test]
    fn test_contains() {
        let edge = Edge::new(5, 2);
        assert!(edge.contains(2));
        assert!(edge.contains(5));
        assert!(!edge.contains(1));
    }
}
