use crate::math::hsv_to_rgb;

/// Deterministic 0..1 value for light placement, stable across runs
pub fn hash_unit(seed: usize, salt: usize) -> f32 {
    (((seed + 1) * PRIMES[salt % PRIMES.len()]) % 10_000) as f32 / 10_000.0
}

const PRIMES: [usize; 4] = [7919, 6547, 4231, 2897];

pub fn torch_hue(seed: usize) -> f32 {
    (seed as f32 * 0.618033988749895) % 1.0
}

/// Warm torch-like color with a per-light hue nudge
pub fn torch_color(seed: usize, saturation: f32, value: f32) -> [f32; 3] {
    hsv_to_rgb(torch_hue(seed) * 0.15, saturation, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_unit_range() {
        for seed in 0..500 {
            for salt in 0..4 {
                let v = hash_unit(seed, salt);
                assert!((0.0..1.0).contains(&v), "hash_unit out of range: {}", v);
            }
        }
    }

    #[test]
    fn test_hash_unit_deterministic() {
        assert_eq!(hash_unit(42, 1), hash_unit(42, 1));
    }
}
