use std::array;
use std::error::Error;
use std::fmt;

use glam::Vec3;
use log::{debug, trace};

use super::bbs::Aabb;
use super::point::OctreePoint;

/// Deepest level at which a leaf may still be split. Two distinct positions
/// that the deepest split cannot separate are rejected instead of recursing
/// further.
pub(super) const MAX_DEPTH: usize = 32;

/// A node is always in exactly one of these states. Children only ever come
/// into existence as a full set of eight, so a partially branched node cannot
/// be represented.
#[derive(Debug)]
pub(super) enum NodeState<T> {
    Empty,
    Leaf(OctreePoint<T>),
    Internal([Box<OctreeNode<T>>; 8]),
}

/// One cuboid cell of the tree, centered at `origin` and extending
/// `half_dimension` along each axis in both directions.
#[derive(Debug)]
pub struct OctreeNode<T> {
    origin: Vec3,
    half_dimension: Vec3,
    pub(super) state: NodeState<T>,
}

impl<T> OctreeNode<T> {
    pub(super) fn new(origin: Vec3, half_dimension: Vec3) -> Self {
        Self {
            origin,
            half_dimension,
            state: NodeState::Empty,
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn half_dimension(&self) -> Vec3 {
        self.half_dimension
    }

    /// Region covered by this node.
    pub fn region(&self) -> Aabb {
        Aabb::from_center(self.origin, self.half_dimension)
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self.state, NodeState::Internal(_))
    }

    /// The point stored at this node, if any.
    pub fn point(&self) -> Option<&OctreePoint<T>> {
        match &self.state {
            NodeState::Leaf(point) => Some(point),
            _ => None,
        }
    }

    fn split_children(&self) -> [Box<OctreeNode<T>>; 8] {
        let half = self.half_dimension / 2.0;
        array::from_fn(|octant| {
            let offset = Vec3::new(
                if octant & 4 != 0 { half.x } else { -half.x },
                if octant & 2 != 0 { half.y } else { -half.y },
                if octant & 1 != 0 { half.z } else { -half.z },
            );
            Box::new(OctreeNode::new(self.origin + offset, half))
        })
    }

    pub(super) fn insert(
        &mut self,
        point: OctreePoint<T>,
        depth: usize,
    ) -> Result<(), InsertError<T>> {
        match &mut self.state {
            // Exit condition
            NodeState::Empty => {
                self.state = NodeState::Leaf(point);
                Ok(())
            }
            NodeState::Leaf(existing) => {
                // Both checks come before any structural change, so a failed
                // insert leaves the node exactly as it was
                if existing.position == point.position {
                    debug!(
                        "Rejecting insert at {}: position already occupied",
                        point.position
                    );
                    return Err(InsertError::DuplicatePosition(point));
                }
                if depth >= MAX_DEPTH {
                    debug!(
                        "Rejecting insert at {}: split depth limit reached",
                        point.position
                    );
                    return Err(InsertError::DepthLimitExceeded(point));
                }
                self.split(point, depth)
            }
            // Recursion
            NodeState::Internal(children) => {
                let octant = find_octant(self.origin, point.position);
                children[octant].insert(point, depth + 1)
            }
        }
    }

    /// Turns a leaf into an internal node with a full set of eight children,
    /// then routes the previously stored point and the new one down a level.
    fn split(&mut self, point: OctreePoint<T>, depth: usize) -> Result<(), InsertError<T>> {
        trace!("Splitting leaf at {} (depth {depth})", self.origin);
        let children = self.split_children();
        let NodeState::Leaf(existing) =
            std::mem::replace(&mut self.state, NodeState::Internal(children))
        else {
            unreachable!("split is only reachable from a leaf");
        };
        // The old point always lands in an empty child; only the new one can
        // still collide a level further down
        self.insert(existing, depth)?;
        self.insert(point, depth)
    }

    pub(super) fn find_exact(&self, position: Vec3) -> Option<&OctreeNode<T>> {
        match &self.state {
            NodeState::Empty => None,
            NodeState::Leaf(point) => (point.position == position).then_some(self),
            NodeState::Internal(children) => {
                children[find_octant(self.origin, position)].find_exact(position)
            }
        }
    }
}

// Figures out in which octant to place a position relative to a node center.
// Positions exactly on a center plane go to the positive side.
pub(super) fn find_octant(origin: Vec3, position: Vec3) -> usize {
    let mut octant = 0;
    if position.x >= origin.x {
        octant |= 4;
    }
    if position.y >= origin.y {
        octant |= 2;
    }
    if position.z >= origin.z {
        octant |= 1;
    }
    octant
}

/// Why an insertion was refused. Either way the rejected point is handed
/// back so the caller can merge payloads or drop it.
#[derive(Debug)]
pub enum InsertError<T> {
    /// A point with the exact same position is already stored.
    DuplicatePosition(OctreePoint<T>),
    /// The colliding points are too close for the deepest split to separate.
    DepthLimitExceeded(OctreePoint<T>),
}

impl<T> InsertError<T> {
    /// The point that was not inserted.
    pub fn into_point(self) -> OctreePoint<T> {
        match self {
            InsertError::DuplicatePosition(point) => point,
            InsertError::DepthLimitExceeded(point) => point,
        }
    }
}

impl<T> fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::DuplicatePosition(point) => {
                write!(f, "a point at position {} already exists", point.position)
            }
            InsertError::DepthLimitExceeded(point) => {
                write!(
                    f,
                    "no free octant for {} within {MAX_DEPTH} splits",
                    point.position
                )
            }
        }
    }
}

impl<T: fmt::Debug> Error for InsertError<T> {}
