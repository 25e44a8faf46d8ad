use glam::Vec3;

/// A payload anchored to a position in space. The tree routes purely by
/// position and never inspects the payload.
#[derive(Clone, Debug, PartialEq)]
pub struct OctreePoint<T> {
    pub position: Vec3,
    pub payload: T,
}

impl<T> OctreePoint<T> {
    pub fn new(position: Vec3, payload: T) -> Self {
        Self { position, payload }
    }
}
