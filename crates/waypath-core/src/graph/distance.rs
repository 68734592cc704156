use std::fmt;

use serde::{Serialize, Serializer};

use super::NodeId;

/// Tentative or final path length to a node.
///
/// Unreached nodes sit at infinity, and infinity absorbs any addition, so a
/// combined sum through an unreachable node stays unreachable.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);
    pub const INFINITY: Distance = Distance(f64::INFINITY);

    pub fn new(value: f64) -> Self {
        Distance(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::INFINITY
    }
}

impl std::ops::Add for Distance {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Distance(self.0 + other.0)
    }
}

impl std::ops::Add<f64> for Distance {
    type Output = Self;

    fn add(self, weight: f64) -> Self {
        Distance(self.0 + weight)
    }
}

impl From<f64> for Distance {
    fn from(value: f64) -> Self {
        Distance(value)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_infinite() {
            let sign = if self.0 < 0.0 { "-" } else { "" };
            write!(f, "{}Infinity", sign)
        } else {
            // f64's Display already drops the fraction for integral values
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_none()
        }
    }
}

/// Per-node distances produced by a single engine run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DistanceVector(Vec<Distance>);

impl DistanceVector {
    /// All nodes at infinity except `source`, which starts at zero
    pub fn new(num_nodes: usize, source: NodeId) -> Self {
        let mut dist = vec![Distance::INFINITY; num_nodes];
        if let Some(slot) = dist.get_mut(source) {
            *slot = Distance::ZERO;
        }
        DistanceVector(dist)
    }

    pub fn get(&self, node: NodeId) -> Distance {
        self.0.get(node).copied().unwrap_or(Distance::INFINITY)
    }

    /// Lower the distance to `node` if `candidate` is strictly smaller.
    /// Returns whether the entry changed.
    pub fn relax(&mut self, node: NodeId, candidate: Distance) -> bool {
        match self.0.get_mut(node) {
            Some(current) if candidate < *current => {
                *current = candidate;
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Distance> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Distance] {
        &self.0
    }
}

impl From<Vec<Distance>> for DistanceVector {
    fn from(dist: Vec<Distance>) -> Self {
        DistanceVector(dist)
    }
}

impl fmt::Display for DistanceVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}
