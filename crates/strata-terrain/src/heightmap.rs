//! Multi-octave column height sampler.
//!
//! Sums octaves of centred layered value noise around sea level, each octave
//! doubling in frequency and halving in amplitude.

use crate::noise::ValueNoise;

/// Parameters shared by the height sampler and the feature placer.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainParams {
    /// World seed mixed into every noise hash.
    pub seed: i32,
    /// Frequency of the first (lowest) octave.
    pub base_frequency: f64,
    /// Amplitude of the first octave, in blocks.
    pub amplitude: f64,
    /// Number of octaves. Each doubles the frequency and halves the amplitude.
    pub octaves: u32,
    /// Height baseline and water level.
    pub sea_level: i32,
    /// Coordinate scale of the tree-cluster noise.
    pub tree_noise_scale: f64,
    /// Tree-cluster noise must exceed this value (in `[0, 1)`).
    pub tree_noise_threshold: f64,
    /// Fraction of eligible columns that grow a tree.
    pub tree_frequency: f64,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            seed: 0,
            base_frequency: 0.01,
            amplitude: 32.0,
            octaves: 4,
            sea_level: 62,
            tree_noise_scale: 0.1,
            tree_noise_threshold: 0.85,
            tree_frequency: 0.05,
        }
    }
}

/// Samples terrain height per world column.
#[derive(Clone, Debug)]
pub struct HeightmapSampler {
    noise: ValueNoise,
    params: TerrainParams,
}

impl HeightmapSampler {
    pub fn new(params: TerrainParams) -> Self {
        Self {
            noise: ValueNoise::new(params.seed),
            params,
        }
    }

    /// Continuous surface height at world column `(wx, wz)`, in blocks.
    ///
    /// Layered noise is remapped from `[0, 1)` to `[-1, 1)` before weighting
    /// so the surface straddles sea level and low areas flood.
    pub fn column_height(&self, wx: i32, wz: i32) -> f64 {
        let mut total = 0.0;
        let mut frequency = self.params.base_frequency;
        let mut amplitude = self.params.amplitude;

        for _ in 0..self.params.octaves {
            let n = self.noise.layered(wx as f64 * frequency, wz as f64 * frequency);
            total += (2.0 * n - 1.0) * amplitude;

            frequency *= 2.0;
            amplitude *= 0.5;
        }

        self.params.sea_level as f64 + total
    }

    /// Geometric sum of all octave amplitudes.
    pub fn max_amplitude(&self) -> f64 {
        let mut sum = 0.0;
        let mut amp = self.params.amplitude;
        for _ in 0..self.params.octaves {
            sum += amp;
            amp *= 0.5;
        }
        sum
    }

    /// Inclusive `(min, max)` bounds any [`column_height`](Self::column_height) result falls in.
    pub fn height_band(&self) -> (f64, f64) {
        let sea = self.params.sea_level as f64;
        let amp = self.max_amplitude();
        (sea - amp, sea + amp)
    }

    pub fn noise(&self) -> &ValueNoise {
        &self.noise
    }

    pub fn params(&self) -> &TerrainParams {
        &self.params
    }
}
