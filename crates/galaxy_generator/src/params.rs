use crate::error::{GeneratorError, GeneratorResult};
use bevy::math::Vec3;

/// Snapshot of every input governing one generation pass.
///
/// Two sets compare equal field by field; any difference means the cloud has
/// to be regenerated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSet {
    /// Number of particles.
    pub count: usize,
    /// Rendered point size, only read by the renderer.
    pub size: f32,
    /// Maximum galaxy radius.
    pub radius: f32,
    /// Number of spiral arms.
    pub branches: u32,
    /// Extra rotation in radians per unit of radius.
    pub spin: f32,
    /// Scale of the positional jitter.
    pub randomness: f32,
    /// Exponent biasing the jitter toward zero, higher gives tighter arms.
    pub randomness_power: f32,
    pub color_inside: Vec3,
    pub color_outside: Vec3,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            count: 100_000,
            size: 0.01,
            radius: 5.0,
            branches: 3,
            spin: 1.0,
            randomness: 0.2,
            randomness_power: 3.0,
            // #ff6030
            color_inside: Vec3::new(1.0, 96.0 / 255.0, 48.0 / 255.0),
            // #1b3984
            color_outside: Vec3::new(27.0 / 255.0, 57.0 / 255.0, 132.0 / 255.0),
        }
    }
}

impl ParameterSet {
    pub const MIN: Self = Self {
        count: 100,
        size: 0.001,
        radius: 0.01,
        branches: 2,
        spin: -5.0,
        randomness: 0.0,
        randomness_power: 1.0,
        color_inside: Vec3::ZERO,
        color_outside: Vec3::ZERO,
    };
    pub const MAX: Self = Self {
        count: 1_000_000,
        size: 0.1,
        radius: 20.0,
        branches: 20,
        spin: 5.0,
        randomness: 2.0,
        randomness_power: 10.0,
        color_inside: Vec3::ONE,
        color_outside: Vec3::ONE,
    };

    /// Checks every documented domain bound.
    ///
    /// Enforced: `count` in `1..=MAX.count`, `branches >= 1`, `radius` in
    /// `(0, MAX.radius]`, `spin` in `[MIN.spin, MAX.spin]`, `randomness >= 0`,
    /// `randomness_power >= 1` and colors inside the unit cube. NaN fails every
    /// check.
    ///
    /// Not enforced: the lower count of `MIN.count`, which only the UI keeps,
    /// the UI slider ceilings for `branches`, `randomness` and
    /// `randomness_power`, which have no documented upper bound, and `size`,
    /// which only the renderer reads.
    pub fn validate(&self) -> GeneratorResult<()> {
        if self.count == 0 {
            return Err(GeneratorError::invalid("count", "must be at least 1"));
        }
        if self.count > Self::MAX.count {
            return Err(GeneratorError::invalid(
                "count",
                format!("must not exceed {}, got {}", Self::MAX.count, self.count),
            ));
        }
        if self.branches == 0 {
            return Err(GeneratorError::invalid("branches", "must be at least 1"));
        }
        // written as negated comparisons so that NaN is rejected too
        if !(self.radius > 0.0 && self.radius <= Self::MAX.radius) {
            return Err(GeneratorError::invalid(
                "radius",
                format!("must be in (0, {}], got {}", Self::MAX.radius, self.radius),
            ));
        }
        if !(self.spin >= Self::MIN.spin && self.spin <= Self::MAX.spin) {
            return Err(GeneratorError::invalid(
                "spin",
                format!(
                    "must be in [{}, {}], got {}",
                    Self::MIN.spin,
                    Self::MAX.spin,
                    self.spin
                ),
            ));
        }
        if !(self.randomness >= 0.0 && self.randomness.is_finite()) {
            return Err(GeneratorError::invalid(
                "randomness",
                format!("must be a finite value >= 0, got {}", self.randomness),
            ));
        }
        if !(self.randomness_power >= 1.0 && self.randomness_power.is_finite()) {
            return Err(GeneratorError::invalid(
                "randomness_power",
                format!("must be a finite value >= 1, got {}", self.randomness_power),
            ));
        }
        for (name, color) in [
            ("color_inside", self.color_inside),
            ("color_outside", self.color_outside),
        ] {
            if !(color.cmpge(Vec3::ZERO).all() && color.cmple(Vec3::ONE).all()) {
                return Err(GeneratorError::invalid(
                    name,
                    format!("channels must be in [0, 1], got {color}"),
                ));
            }
        }
        Ok(())
    }

    /// Returns a copy with every field clamped into `[MIN, MAX]`.
    ///
    /// Meant for parameter controls; the generator itself never clamps.
    pub fn clamped(&self) -> Self {
        let (min, max) = (Self::MIN, Self::MAX);
        Self {
            count: self.count.clamp(min.count, max.count),
            size: self.size.clamp(min.size, max.size),
            radius: self.radius.clamp(min.radius, max.radius),
            branches: self.branches.clamp(min.branches, max.branches),
            spin: self.spin.clamp(min.spin, max.spin),
            randomness: self.randomness.clamp(min.randomness, max.randomness),
            randomness_power: self
                .randomness_power
                .clamp(min.randomness_power, max.randomness_power),
            color_inside: self.color_inside.clamp(min.color_inside, max.color_inside),
            color_outside: self
                .color_outside
                .clamp(min.color_outside, max.color_outside),
        }
    }

    /// Linear inside-to-outside gradient at `radius`.
    pub fn color_at(&self, radius: f32) -> Vec3 {
        let t = radius / self.radius;
        self.color_inside + (self.color_outside - self.color_inside) * t
    }
}
