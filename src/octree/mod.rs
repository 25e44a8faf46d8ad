mod bbs;
mod iter_points;
mod node;
mod point;
mod tree;

pub use bbs::Aabb;
pub use iter_points::OctreePointIterator;
pub use node::InsertError;
pub use node::OctreeNode;
pub use point::OctreePoint;
pub use tree::Octree;
