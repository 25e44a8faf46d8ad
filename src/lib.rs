pub mod octree;

pub use octree::{Aabb, InsertError, Octree, OctreeNode, OctreePoint, OctreePointIterator};
