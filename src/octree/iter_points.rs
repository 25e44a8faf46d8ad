use super::bbs::Aabb;
use super::node::{NodeState, OctreeNode};
use super::point::OctreePoint;
use super::tree::Octree;

/// Iterates over all points within a query window, pruning subtrees whose
/// region cannot intersect it.
pub struct OctreePointIterator<'a, T> {
    stack: Vec<&'a OctreeNode<T>>,
    window: Aabb,
}

impl<'a, T> OctreePointIterator<'a, T> {
    pub(super) fn new(window: Aabb, octree: &'a Octree<T>) -> OctreePointIterator<'a, T> {
        OctreePointIterator {
            window,
            stack: vec![&octree.root],
        }
    }
}

impl<'a, T> Iterator for OctreePointIterator<'a, T> {
    type Item = &'a OctreePoint<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if !node.region().intersects(&self.window) {
                continue;
            }
            match &node.state {
                NodeState::Empty => {}
                NodeState::Leaf(point) => {
                    if self.window.contains_point(point.position) {
                        return Some(point);
                    }
                }
                NodeState::Internal(children) => {
                    // Recursion: push in reverse so octant 0 is popped first
                    // and results come out in octant order, depth first
                    for child in children.iter().rev() {
                        self.stack.push(child.as_ref());
                    }
                }
            }
        }
        None
    }
}
