use glam::Vec3;

use super::bbs::Aabb;
use super::iter_points::OctreePointIterator;
use super::node::{InsertError, OctreeNode};
use super::point::OctreePoint;

/// Point octree over a fixed cuboid region. The root covers
/// `[origin - half_dimension, origin + half_dimension]`; each split halves
/// the extent along every axis.
pub struct Octree<T> {
    pub(super) root: OctreeNode<T>,
    // Number of stored points. Nodes don't know their subtree totals, so the
    // owner keeps count
    len: usize,
}

impl<T> Octree<T> {
    /// Creates an empty tree covering the region centered at `origin`.
    ///
    /// Panics if `half_dimension` is not strictly positive on every axis,
    /// since a flat or inverted region makes all octant math meaningless.
    pub fn new(origin: Vec3, half_dimension: Vec3) -> Self {
        assert!(
            half_dimension.x > 0.0 && half_dimension.y > 0.0 && half_dimension.z > 0.0,
            "invalid region: half dimension {half_dimension} must be positive on every axis"
        );
        Self {
            root: OctreeNode::new(origin, half_dimension),
            len: 0,
        }
    }

    /// Region covered by the root node.
    pub fn region(&self) -> Aabb {
        self.root.region()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a point, splitting leaves as needed. A point whose position is
    /// already taken comes back inside `InsertError::DuplicatePosition`.
    pub fn insert(&mut self, point: OctreePoint<T>) -> Result<(), InsertError<T>> {
        self.root.insert(point, 0)?;
        self.len += 1;
        Ok(())
    }

    /// Iterates over all points within the inclusive window `[min, max]`, in
    /// octant traversal order. An inverted window yields nothing.
    pub fn query_range(&self, min: Vec3, max: Vec3) -> OctreePointIterator<'_, T> {
        OctreePointIterator::new(Aabb::new(min, max), self)
    }

    /// Finds the node holding a point exactly at `position`. Positions that
    /// were never inserted, or that lie outside the covered region, report
    /// `None` rather than an error.
    pub fn find_exact(&self, position: Vec3) -> Option<&OctreeNode<T>> {
        self.root.find_exact(position)
    }
}
