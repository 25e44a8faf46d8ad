use glam::Vec3;

/// Axis aligned bounding box with inclusive min and max corners.
/// Used both for node regions and for query windows. A window with
/// `min > max` on some axis is not an error; it simply contains nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Aabb {
        Self { min, max }
    }

    pub fn from_center(center: Vec3, half_extents: Vec3) -> Aabb {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        // For each axis, check if one box is completely to one side of the other
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    pub fn contains(&self, other: &Aabb) -> bool {
        self.min.x <= other.min.x
            && self.min.y <= other.min.y
            && self.min.z <= other.min.z
            && self.max.x >= other.max.x
            && self.max.y >= other.max.y
            && self.max.z >= other.max.z
    }

    pub fn contains_point(&self, p: Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::octree::Aabb;

    #[test]
    fn test_intersection_true() {
        let a = Aabb::from_center(Vec3::ZERO, Vec3::splat(0.5));
        let b = Aabb::from_center(Vec3::ONE, Vec3::splat(0.5));
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_intersection_close_but_false() {
        let a = Aabb::from_center(Vec3::ZERO, Vec3::splat(0.5));
        let b = Aabb::from_center(Vec3::ONE, Vec3::splat(0.45));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_intersection_false() {
        let a = Aabb::from_center(Vec3::ZERO, Vec3::splat(0.5));
        let b = Aabb::from_center(Vec3::ONE * 2.0, Vec3::splat(0.5));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_touching_faces_intersect() {
        // Bounds are inclusive, so sharing a face counts as an intersection
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_contains() {
        let outer = Aabb::from_center(Vec3::ZERO, Vec3::splat(2.0));
        let inner = Aabb::from_center(Vec3::ZERO, Vec3::splat(1.0));
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
    }

    #[test]
    fn test_contains_point_on_boundary() {
        let bb = Aabb::from_center(Vec3::ZERO, Vec3::splat(1.0));
        assert!(bb.contains_point(Vec3::ONE));
        assert!(bb.contains_point(Vec3::ZERO));
        assert!(!bb.contains_point(Vec3::new(1.0, 1.0, 1.1)));
    }

    #[test]
    fn test_inverted_window_contains_nothing() {
        let bb = Aabb::new(Vec3::ONE, -Vec3::ONE);
        assert!(!bb.contains_point(Vec3::ZERO));
        assert!(!bb.contains_point(Vec3::ONE));
    }
}
