//! Procedural decorative particle fields.
//!
//! A field draws per-particle parameters once from an injectable RNG at
//! construction; afterwards every sample is a pure function of absolute
//! elapsed time. Re-evaluating at the same instant yields bit-identical
//! results, so fields survive pauses, restarts, and frame-rate swings
//! without drifting.

use glam::Vec3;
use rand::Rng;

use super::shape::EffectShape;
use crate::options::FieldOptions;

/// Immutable per-particle parameters, drawn once at field construction.
#[derive(Debug, Clone, Copy)]
struct ParticleSeed {
    /// Resting position offset from the field origin.
    origin: Vec3,
    /// Unit drift direction.
    direction: Vec3,
    /// Total drift distance over one cycle, world units.
    amplitude: f32,
    /// Cycle length in seconds.
    period: f32,
    /// Phase offset in seconds, staggering particles across the cycle.
    phase: f32,
    /// Base sprite size, world units.
    size: f32,
}

/// One evaluated particle, ready for the scene-graph adapter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSprite {
    /// World-space position.
    pub position: Vec3,
    /// Opacity in [0, 1].
    pub opacity: f32,
    /// Sprite size in world units.
    pub scale: f32,
    /// RGB tint (the owning item's theme color).
    pub tint: [f32; 3],
}

/// A fixed set of particles looping through a shared shape function.
#[derive(Debug)]
pub struct ParticleField {
    shape: EffectShape,
    tint: [f32; 3],
    /// Engine-time at which the field was spawned; samples are taken
    /// relative to this instant.
    spawned_at: f32,
    seeds: Vec<ParticleSeed>,
}

impl ParticleField {
    /// Generate a field of `options.count` particles around `origin`,
    /// drawing all randomized parameters from `rng`.
    pub fn new<R: Rng + ?Sized>(
        shape: EffectShape,
        options: &FieldOptions,
        tint: [f32; 3],
        origin: Vec3,
        spawned_at: f32,
        rng: &mut R,
    ) -> Self {
        let seeds = (0..options.count)
            .map(|_| Self::draw_seed(shape, options, origin, rng))
            .collect();
        Self {
            shape,
            tint,
            spawned_at,
            seeds,
        }
    }

    fn draw_seed<R: Rng + ?Sized>(
        shape: EffectShape,
        options: &FieldOptions,
        origin: Vec3,
        rng: &mut R,
    ) -> ParticleSeed {
        let scatter = unit_sphere(rng);
        let direction = match shape.vertical_bias() {
            // Biased shapes mostly follow the axis with a little lateral
            // scatter so streams do not collapse into a line.
            Some(axis) => (axis + scatter * 0.3).normalize(),
            None => scatter,
        };

        let period = sample_range(rng, options.period);
        ParticleSeed {
            origin: origin + unit_sphere(rng) * options.spread,
            direction,
            amplitude: sample_range(rng, options.amplitude),
            period,
            phase: rng.random::<f32>() * period,
            size: sample_range(rng, options.size),
        }
    }

    /// Evaluate every particle at absolute engine time `elapsed`, appending
    /// sprites to `out`. The buffer is reused across ticks by the engine to
    /// keep the update loop allocation-free.
    pub fn sample_at(&self, elapsed: f32, out: &mut Vec<ParticleSprite>) {
        let t = (elapsed - self.spawned_at).max(0.0);
        for seed in &self.seeds {
            let u = ((t + seed.phase) / seed.period).fract();
            out.push(ParticleSprite {
                position: seed.origin
                    + seed.direction * (seed.amplitude * self.shape.drift(u)),
                opacity: self.shape.opacity(u),
                scale: seed.size * self.shape.scale(u),
                tint: self.tint,
            });
        }
    }

    /// Number of particles in the field.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    /// Whether the field holds no particles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    /// The field's shape variant.
    #[must_use]
    pub fn shape(&self) -> EffectShape {
        self.shape
    }
}

/// Uniformly distributed unit vector.
fn unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let azimuth = rng.random::<f32>() * std::f32::consts::TAU;
    let z = rng.random::<f32>() * 2.0 - 1.0;
    let r = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(r * azimuth.cos(), z, r * azimuth.sin())
}

/// Uniform sample from an inclusive `[min, max]` pair.
fn sample_range<R: Rng + ?Sized>(rng: &mut R, range: [f32; 2]) -> f32 {
    rng.random_range(range[0]..=range[1])
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn field(seed: u64) -> ParticleField {
        let mut rng = StdRng::seed_from_u64(seed);
        ParticleField::new(
            EffectShape::Burst,
            &FieldOptions::default(),
            [0.2, 0.5, 0.9],
            Vec3::ZERO,
            0.0,
            &mut rng,
        )
    }

    #[test]
    fn evaluation_is_bit_identical() {
        let field = field(42);
        let mut first = Vec::new();
        let mut second = Vec::new();
        field.sample_at(3.7519, &mut first);
        field.sample_at(3.7519, &mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn same_seed_reproduces_the_field() {
        let a = field(7);
        let b = field(7);

        let mut sa = Vec::new();
        let mut sb = Vec::new();
        a.sample_at(1.25, &mut sa);
        b.sample_at(1.25, &mut sb);
        assert_eq!(sa, sb);
    }

    #[test]
    fn different_seeds_scatter_differently() {
        let a = field(1);
        let b = field(2);

        let mut sa = Vec::new();
        let mut sb = Vec::new();
        a.sample_at(0.5, &mut sa);
        b.sample_at(0.5, &mut sb);
        assert_ne!(sa, sb);
    }

    #[test]
    fn droplets_only_fall() {
        let mut rng = StdRng::seed_from_u64(11);
        let field = ParticleField::new(
            EffectShape::Droplet,
            &FieldOptions::default(),
            [1.0; 3],
            Vec3::ZERO,
            0.0,
            &mut rng,
        );

        let mut sprites = Vec::new();
        field.sample_at(0.9, &mut sprites);
        // The drift direction is biased downward, so at mid-cycle no
        // droplet may sit above its possible start region.
        let ceiling = FieldOptions::default().spread + 1e-3;
        for sprite in &sprites {
            assert!(sprite.position.y <= ceiling);
        }
    }

    #[test]
    fn sprites_carry_the_tint() {
        let field = field(3);
        let mut sprites = Vec::new();
        field.sample_at(0.1, &mut sprites);
        assert_eq!(sprites.len(), field.len());
        for sprite in &sprites {
            assert_eq!(sprite.tint, [0.2, 0.5, 0.9]);
        }
    }

    #[test]
    fn sample_time_is_relative_to_spawn() {
        let mut rng_a = StdRng::seed_from_u64(9);
        let mut rng_b = StdRng::seed_from_u64(9);
        let opts = FieldOptions::default();

        let fresh = ParticleField::new(
            EffectShape::Steam,
            &opts,
            [1.0; 3],
            Vec3::ZERO,
            0.0,
            &mut rng_a,
        );
        let late = ParticleField::new(
            EffectShape::Steam,
            &opts,
            [1.0; 3],
            Vec3::ZERO,
            100.0,
            &mut rng_b,
        );

        let mut sa = Vec::new();
        let mut sb = Vec::new();
        fresh.sample_at(2.0, &mut sa);
        late.sample_at(102.0, &mut sb);
        assert_eq!(sa, sb, "fields are pure in time since spawn");
    }
}
