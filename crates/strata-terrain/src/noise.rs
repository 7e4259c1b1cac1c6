//! Hash-based 2D value noise.
//!
//! Lattice values come from an integer avalanche hash of the lattice
//! coordinates, so sampling is pure: no permutation tables, no state, and
//! the same `(x, y, seed)` gives the same value on every platform.

/// Multiplier applied to the seed before it is mixed into the hash.
const SEED_PRIME: i32 = 1_442_695_041;

/// Weight of the three octaves summed by [`ValueNoise::layered`].
const LAYER_WEIGHT: f64 = 1.0 + 0.5 + 0.25;

/// Integer avalanche hash of a 2D lattice point.
///
/// All arithmetic wraps in 32 bits and `>>` is arithmetic. With `seed == 0`
/// the result is the plain `x * 374761393 + y * 668265263` mix.
#[inline]
pub fn hash2d(x: i32, y: i32, seed: i32) -> i32 {
    let mut h = x
        .wrapping_mul(374_761_393)
        .wrapping_add(y.wrapping_mul(668_265_263))
        .wrapping_add(seed.wrapping_mul(SEED_PRIME));
    h = (h ^ (h >> 13)).wrapping_mul(1_274_126_177);
    h ^ (h >> 16)
}

/// Lattice value in `[0, 1)`: the hash shifted by `2^31` into the unsigned
/// range, over `2^32`. A zero hash maps to exactly `0.5`, so `2v - 1` is the
/// signed hash over `2^31`.
#[inline]
pub fn lattice_value(x: i32, y: i32, seed: i32) -> f64 {
    (hash2d(x, y, seed) as i64 - i32::MIN as i64) as f64 / 4_294_967_296.0
}

/// Cubic smoothstep `t^2 (3 - 2t)`.
#[inline]
fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Seeded 2D value noise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValueNoise {
    seed: i32,
}

impl ValueNoise {
    pub const fn new(seed: i32) -> Self {
        Self { seed }
    }

    pub const fn seed(&self) -> i32 {
        self.seed
    }

    /// Smoothstep-weighted bilinear blend of the four surrounding lattice
    /// values. Output lies in `[0, 1)`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let x0 = x.floor();
        let y0 = y.floor();
        let xi = x0 as i32;
        let yi = y0 as i32;

        let a = lattice_value(xi, yi, self.seed);
        let b = lattice_value(xi.wrapping_add(1), yi, self.seed);
        let c = lattice_value(xi, yi.wrapping_add(1), self.seed);
        let d = lattice_value(xi.wrapping_add(1), yi.wrapping_add(1), self.seed);

        let u = smoothstep(x - x0);
        let v = smoothstep(y - y0);

        let top = a * (1.0 - u) + b * u;
        let bottom = c * (1.0 - u) + d * u;
        top * (1.0 - v) + bottom * v
    }

    /// Three octaves of [`sample`](Self::sample) at 1x, 2x and 4x frequency
    /// with weights 1, 0.5 and 0.25, normalised back to `[0, 1)`.
    pub fn layered(&self, x: f64, y: f64) -> f64 {
        let sum = self.sample(x, y)
            + self.sample(x * 2.0, y * 2.0) * 0.5
            + self.sample(x * 4.0, y * 4.0) * 0.25;
        sum / LAYER_WEIGHT
    }
}
