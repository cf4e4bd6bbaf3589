use bevy::math::Vec3;

/// Positions and colors of every particle of one generation pass.
///
/// Both buffers always have the same length and are ordered by particle
/// index. A cloud is never edited after it is built; the next pass replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    positions: Vec<[f32; 3]>,
    colors: Vec<[f32; 3]>,
}

impl PointCloud {
    pub(crate) fn with_capacity(count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(count),
            colors: Vec::with_capacity(count),
        }
    }

    pub(crate) fn from_buffers(positions: Vec<[f32; 3]>, colors: Vec<[f32; 3]>) -> Self {
        debug_assert_eq!(positions.len(), colors.len());
        Self { positions, colors }
    }

    pub(crate) fn push(&mut self, position: Vec3, color: Vec3) {
        self.positions.push(position.to_array());
        self.colors.push(color.to_array());
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[f32; 3], &[f32; 3])> {
        self.positions.iter().zip(self.colors.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_stay_index_aligned() {
        let mut cloud = PointCloud::default();
        assert!(cloud.is_empty());
        cloud.push(Vec3::new(1.0, 2.0, 3.0), Vec3::ONE);
        cloud.push(Vec3::new(-1.0, 0.0, 0.5), Vec3::ZERO);

        assert_eq!(cloud.len(), 2);
        let pairs: Vec<_> = cloud.iter().collect();
        assert_eq!(pairs[0], (&[1.0, 2.0, 3.0], &[1.0, 1.0, 1.0]));
        assert_eq!(pairs[1], (&[-1.0, 0.0, 0.5], &[0.0, 0.0, 0.0]));
    }
}
