use glam::Vec3;

/// Axis-Aligned Bounding Box
#[derive(Copy, Clone, Debug)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box spanning `center +/- extent` on every axis
    pub fn from_center_extent(center: Vec3, extent: f32) -> Self {
        let half = Vec3::splat(extent);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn union(&self, other: &AABB) -> AABB {
        AABB {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Inclusive point containment on all three axes
    pub fn contains(&self, p: Vec3) -> bool {
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
    use super::*;

    #[test]
    fn test_aabb_new() {
        let min = Vec3::new(0.0, 0.0, 0.0);
        let max = Vec3::new(1.0, 1.0, 1.0);
        let aabb = AABB::new(min, max);
        assert_eq!(aabb.min, min);
        assert_eq!(aabb.max, max);
    }

    #[test]
    fn test_aabb_from_center_extent() {
        let aabb = AABB::from_center_extent(Vec3::new(1.0, 2.0, 3.0), 4.0);
        assert_eq!(aabb.min, Vec3::new(-3.0, -2.0, -1.0));
        assert_eq!(aabb.max, Vec3::new(5.0, 6.0, 7.0));
    }

    #[test]
    fn test_aabb_center() {
        let aabb = AABB::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 4.0, 6.0));
        let center = aabb.center();
        assert_eq!(center, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_aabb_contains_inside() {
        let aabb = AABB::from_center_extent(Vec3::ZERO, 2.0);
        assert!(aabb.contains(Vec3::new(1.0, -1.0, 0.5)));
    }

    #[test]
    fn test_aabb_contains_boundary() {
        let aabb = AABB::from_center_extent(Vec3::ZERO, 2.0);
        assert!(aabb.contains(Vec3::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn test_aabb_contains_outside() {
        let aabb = AABB::from_center_extent(Vec3::ZERO, 2.0);
        assert!(!aabb.contains(Vec3::new(2.1, 0.0, 0.0)));
        assert!(!aabb.contains(Vec3::new(0.0, -5.0, 0.0)));
    }

    #[test]
    fn test_aabb_union_non_overlapping() {
        let aabb1 = AABB::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        let aabb2 = AABB::new(Vec3::new(2.0, 2.0, 2.0), Vec3::new(3.0, 3.0, 3.0));
        let union = aabb1.union(&aabb2);
        assert_eq!(union.min, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(union.max, Vec3::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_aabb_union_negative_coords() {
        let aabb1 = AABB::new(Vec3::new(-3.0, -3.0, -3.0), Vec3::new(-1.0, -1.0, -1.0));
        let aabb2 = AABB::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(3.0, 3.0, 3.0));
        let union = aabb1.union(&aabb2);
        assert_eq!(union.min, Vec3::new(-3.0, -3.0, -3.0));
        assert_eq!(union.max, Vec3::new(3.0, 3.0, 3.0));
    }
}
