use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// A horizontal wind vector in blocks per tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindVector {
    /// East-west component.
    pub x: f32,
    /// North-south component.
    pub z: f32,
}

impl WindVector {
    /// The zero vector.
    pub const ZERO: WindVector = WindVector { x: 0.0, z: 0.0 };

    /// Create a vector from its components.
    pub fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> f32 {
        self.x.hypot(self.z)
    }

    /// Heading in radians, in `(-PI, PI]`.
    pub fn angle(&self) -> f32 {
        self.z.atan2(self.x)
    }

    fn to_bits(self) -> u64 {
        (u64::from(self.x.to_bits()) << 32) | u64::from(self.z.to_bits())
    }

    fn from_bits(bits: u64) -> Self {
        Self {
            x: f32::from_bits((bits >> 32) as u32),
            z: f32::from_bits(bits as u32),
        }
    }
}

/// Cloneable handle publishing the latest [`WindVector`] across threads.
///
/// Both components share one atomic word, so readers never observe an `x`
/// from one tick paired with a `z` from another.
#[derive(Debug, Clone, Default)]
pub struct SharedWind {
    bits: Arc<AtomicU64>,
}

impl SharedWind {
    /// Create a handle holding the zero vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the published vector.
    pub fn publish(&self, vector: WindVector) {
        self.bits.store(vector.to_bits(), Ordering::Release);
    }

    /// Read the most recently published vector.
    pub fn load(&self) -> WindVector {
        WindVector::from_bits(self.bits.load(Ordering::Acquire))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(SharedWind::new().load(), WindVector::ZERO);
    }

    #[test]
    fn publish_then_load_preserves_components() {
        let shared = SharedWind::new();
        let vector = WindVector::new(-0.37, 1.05);
        shared.publish(vector);
        assert_eq!(shared.load(), vector);
    }

    #[test]
    fn clones_share_the_value() {
        let writer = SharedWind::new();
        let reader = writer.clone();
        writer.publish(WindVector::new(0.5, -0.25));
        assert_eq!(reader.load(), WindVector::new(0.5, -0.25));
    }

    #[test]
    fn reader_thread_sees_consistent_pairs() {
        let writer = SharedWind::new();
        let reader = writer.clone();
        let handle = std::thread::spawn(move || {
            for _ in 0..10_000 {
                let v = reader.load();
                // Every published pair satisfies z == -x.
                assert_eq!(v.z, -v.x);
            }
        });
        for i in 0..10_000 {
            let x = i as f32 * 0.001;
            writer.publish(WindVector::new(x, -x));
        }
        handle.join().unwrap();
    }

    #[test]
    fn magnitude_and_angle() {
        let v = WindVector::new(3.0, 4.0);
        assert!((v.magnitude() - 5.0).abs() < 1e-6);
        let north = WindVector::new(0.0, 1.0);
        assert!((north.angle() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }
}
