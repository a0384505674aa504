use num_traits::{CheckedAdd, Zero};
use smartstring::alias::String;
use std::fmt;

/// Unique, case-sensitive name of a node (e.g. a station).
pub type NodeName = String;

/// Numeric type that can be used as edge weight and path distance.
///
/// Distances of nodes that have not been reached are represented as `None`
/// and never as a value of the type itself, so every value of the type is a
/// valid distance.
pub trait Weight: Copy + PartialOrd + Zero + fmt::Debug + fmt::Display + Send + Sync {
    /// Sum of two distances, `None` if the sum can't be represented.
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

integer_weight!(u64, u32, u16, u8, usize, i64, i32, i16, i8);

impl Weight for f64 {
    fn checked_sum(self, other: Self) -> Option<Self> {
        Some(self + other)
    }
}

impl Weight for f32 {
    fn checked_sum(self, other: Self) -> Option<Self> {
        Some(self + other)
    }
}

/// Undirected, weighted edge between two named nodes.
#[derive(PartialEq, Clone, Debug)]
pub struct Edge<W> {
    pub source: NodeName,
    pub target: NodeName,
    pub weight: W,
}

impl<W: Copy> Edge<W> {
    pub fn inverse(&self) -> Edge<W> {
        Edge {
            source: self.target.clone(),
            target: self.source.clone(),
            weight: self.weight,
        }
    }
}

impl<S, T, W> From<(S, T, W)> for Edge<W>
where
    S: Into<NodeName>,
    T: Into<NodeName>,
{
    fn from((source, target, weight): (S, T, W)) -> Self {
        Edge {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }
}
