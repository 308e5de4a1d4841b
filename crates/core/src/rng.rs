//! RNG module - random piece selection
//!
//! Each spawn draws a kind uniformly and independently over the seven kinds,
//! the policy consistently observed across classic implementations (a bag
//! randomizer would change the distribution and is deliberately not used).
//!
//! Backed by a simple LCG so sessions are deterministic per seed.

use blockfall_types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state (for reproducing a sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform piece source - one independent draw per spawn
#[derive(Debug, Clone)]
pub struct PieceSource {
    rng: SimpleRng,
}

impl PieceSource {
    /// Create a new source with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32);
        PieceKind::ALL[idx as usize]
    }

    /// Current RNG state (for reproducing the remaining sequence)
    pub fn state(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PieceSource {
    fn default() -> Self {
        Self::new(1)
    }
}
