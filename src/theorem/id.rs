use derive_more::Display;
use std::str::FromStr;

/// The stable identifiers of the supported theorems.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TheoremId {
    #[display(fmt = "odd_degree")]
    OddDegree,
    #[display(fmt = "bipartite")]
    Bipartite,
    #[display(fmt = "ramsey_R33")]
    RamseyR33,
    #[display(fmt = "self_complementary")]
    SelfComplementary,
    #[display(fmt = "diameter")]
    Diameter,
    #[display(fmt = "sc_diameter")]
    ScDiameter,
    #[display(fmt = "g_g_prime_connected")]
    GOrComplementConnected,
    #[display(fmt = "min_degree_connect")]
    MinDegreeConnect,
    #[display(fmt = "unique_path")]
    UniquePath,
    #[display(fmt = "tree_edges")]
    TreeEdges,
    #[display(fmt = "tree_center")]
    TreeCenter,
    #[display(fmt = "eulerian")]
    Eulerian,
}

impl TheoremId {
    pub const ALL: [TheoremId; 12] = [
        TheoremId::OddDegree,
        TheoremId::Bipartite,
        TheoremId::RamseyR33,
        TheoremId::SelfComplementary,
        TheoremId::Diameter,
        TheoremId::ScDiameter,
        TheoremId::GOrComplementConnected,
        TheoremId::MinDegreeConnect,
        TheoremId::UniquePath,
        TheoremId::TreeEdges,
        TheoremId::TreeCenter,
        TheoremId::Eulerian,
    ];

    pub fn title(self) -> &'static str {
        match self {
            TheoremId::OddDegree => "Vertices of odd degree",
            TheoremId::Bipartite => "Bipartite graphs have no odd cycles",
            TheoremId::RamseyR33 => "Ramsey's theorem R(3,3) = 6",
            TheoremId::SelfComplementary => "Self-complementary graphs have p = 0 or 1 (mod 4)",
            TheoremId::Diameter => "diam(G) >= 3 implies diam(G') <= 3",
            TheoremId::ScDiameter => "Self-complementary graphs have diameter 2 or 3",
            TheoremId::GOrComplementConnected => "G or G' is connected",
            TheoremId::MinDegreeConnect => "Minimum degree above (p-1)/2 implies connected",
            TheoremId::UniquePath => "Unique path in a tree",
            TheoremId::TreeEdges => "A tree has p-1 edges",
            TheoremId::TreeCenter => "The center of a tree",
            TheoremId::Eulerian => "Eulerian circuit",
        }
    }

    /// Theorems about trees, which are usually inapplicable to a random graph.
    pub fn is_tree_family(self) -> bool {
        matches!(
            self,
            TheoremId::UniquePath | TheoremId::TreeEdges | TheoremId::TreeCenter
        )
    }

    /// The vertex count the theorem is stated for, if it is fixed.
    pub fn required_vertex_count(self) -> Option<usize> {
        match self {
            TheoremId::RamseyR33 => Some(6),
            _ => None,
        }
    }
}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[display(fmt = "unknown theorem `{}`", _0)]
pub struct UnknownTheorem(String);

impl std::error::Error for UnknownTheorem {}

impl FromStr for TheoremId {
    type Err = UnknownTheorem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TheoremId::ALL
            .iter()
            .copied()
            .find(|theorem| theorem.to_string() == s)
            .ok_or_else(|| UnknownTheorem(String::from(s)))
    }
}
