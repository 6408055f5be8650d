//! Screen-space ambient occlusion.
//!
//! The occlusion of a fragment is estimated by sampling a hemisphere around
//! its view-space position, oriented along its normal. The hemisphere samples
//! (the *kernel*) are generated once on CPU, as well as a small tile of random
//! rotations (the *noise*) that is repeated over the screen to trade banding
//! for high frequency noise, which the blur pass removes afterwards.

pub mod targets;

pub use self::targets::{GBuffer, OcclusionTarget};

use std::f32::consts::PI;

use rand::Rng;

use crate::errors::*;
use crate::math::{self, Vector2, Vector3, InnerSpace};
use crate::video::texture::{Texture, TextureFilter, TextureFormat, TextureParams, TextureWrap};

/// The number of samples in the hemisphere kernel.
pub const KERNEL_SIZE: usize = 64;
/// The width and height of the noise tile.
pub const NOISE_DIMENSION: u32 = 4;
/// Linear attenuation of the light.
pub const LIGHT_LINEAR: f32 = 0.09;
/// Quadratic attenuation of the light.
pub const LIGHT_QUADRATIC: f32 = 0.032;

/// Generates `size` sample points in the unit hemisphere around +z. Samples
/// are distributed more densely near the origin, so occluders that are close
/// to the fragment weigh more.
pub fn kernel<R: Rng>(size: usize, rng: &mut R) -> Vec<Vector3<f32>> {
    (0..size)
        .map(|i| {
            let phi = 2.0 * PI * rng.gen::<f32>();
            let cos_theta = rng.gen::<f32>();
            let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
            let r = rng.gen::<f32>().cbrt();

            let sample = Vector3::new(
                r * phi.cos() * sin_theta,
                r * phi.sin() * sin_theta,
                r * cos_theta,
            );

            let scale = i as f32 / size as f32;
            sample * math::lerp(0.1, 1.0, scale * scale)
        })
        .collect()
}

/// Generates `count` random rotation vectors around the z-axis (in tangent
/// space), with x and y in `[-1, 1)` and zero z.
pub fn noise<R: Rng>(count: usize, rng: &mut R) -> Vec<Vector3<f32>> {
    (0..count)
        .map(|_| {
            Vector3::new(
                rng.gen::<f32>() * 2.0 - 1.0,
                rng.gen::<f32>() * 2.0 - 1.0,
                0.0,
            )
        })
        .collect()
}

/// Uploads the noise vectors as a `NOISE_DIMENSION`² `RGBA32F` texture that
/// repeats with nearest filtering.
pub fn noise_texture(noise: &[Vector3<f32>]) -> Result<Texture> {
    let params = noise_params();
    if noise.len() != (params.dimensions.x * params.dimensions.y) as usize {
        bail!(
            "[SSAO] {} noise vectors do not fill a {}x{} tile.",
            noise.len(),
            params.dimensions.x,
            params.dimensions.y
        );
    }

    let texels: Vec<f32> = noise.iter().flat_map(|v| vec![v.x, v.y, v.z, 0.0]).collect();
    Texture::new(params, Some(&texels[..]))
}

fn noise_params() -> TextureParams {
    TextureParams {
        format: TextureFormat::RGBA32F,
        wrap: TextureWrap::Repeat,
        filter: TextureFilter::Nearest,
        mipmap: false,
        dimensions: Vector2::new(NOISE_DIMENSION, NOISE_DIMENSION),
    }
}

/// Returns true if `sample` lies in the unit hemisphere around +z.
#[inline]
pub fn in_hemisphere(sample: Vector3<f32>) -> bool {
    sample.z >= 0.0 && sample.magnitude() <= 1.0 + 1e-6
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn kernel_in_hemisphere() {
        let mut rng = StdRng::seed_from_u64(7);
        let samples = kernel(KERNEL_SIZE, &mut rng);

        assert_eq!(samples.len(), KERNEL_SIZE);
        assert!(samples.iter().all(|&v| in_hemisphere(v)));
    }

    #[test]
    fn kernel_scales_towards_origin() {
        let mut rng = StdRng::seed_from_u64(7);
        let samples = kernel(KERNEL_SIZE, &mut rng);

        // The first sample is scaled by 0.1, the last one by almost 1.0.
        assert!(samples[0].magnitude() <= 0.1 + 1e-6);
        for (i, v) in samples.iter().enumerate() {
            let scale = i as f32 / KERNEL_SIZE as f32;
            assert!(v.magnitude() <= math::lerp(0.1, 1.0, scale * scale) + 1e-6);
        }
    }

    #[test]
    fn deterministic() {
        let a = kernel(16, &mut StdRng::seed_from_u64(42));
        let b = kernel(16, &mut StdRng::seed_from_u64(42));
        let c = kernel(16, &mut StdRng::seed_from_u64(43));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn noise_in_tangent_plane() {
        let mut rng = StdRng::seed_from_u64(7);
        let noise = noise(16, &mut rng);

        assert_eq!(noise.len(), 16);
        for v in noise {
            assert_eq!(v.z, 0.0);
            assert!(v.x >= -1.0 && v.x < 1.0);
            assert!(v.y >= -1.0 && v.y < 1.0);
        }
    }

    #[test]
    fn noise_tile_size() {
        assert!(noise_texture(&[Vector3::new(0.0, 0.0, 0.0); 15]).is_err());
        assert_eq!(noise_params().data_size(), 16 * 16);
    }
}
