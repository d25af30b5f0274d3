//! RNG module - seeded piece generation
//!
//! Every random draw in a round goes through one [`PieceSource`], so a round is
//! fully reproducible from its seed: initial board, refills and therefore score.

use crate::error::EngineError;
use crate::types::{PieceType, MIN_PALETTE_SIZE};

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
    ///
    /// Takes the high bits: the low bits of a power-of-two LCG cycle with a very
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// The set of piece types in play for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    size: u8,
}

impl Palette {
    /// A palette of the first `size` piece types.
    ///
    /// Fewer than [`MIN_PALETTE_SIZE`] types would let initial generation loop
    /// forever, so they are refused.
    pub fn new(size: u8) -> Result<Self, EngineError> {
        if size < MIN_PALETTE_SIZE {
            return Err(EngineError::InsufficientPaletteSize { size });
        }
        let max = PieceType::ALL.len() as u8;
        if size > max {
            return Err(EngineError::PaletteTooLarge { size, max });
        }
        Ok(Self { size })
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn pieces(&self) -> &'static [PieceType] {
        &PieceType::ALL[..self.size as usize]
    }

    pub fn contains(&self, piece: PieceType) -> bool {
        self.pieces().contains(&piece)
    }
}

/// Uniform random piece draws over a palette
#[derive(Debug, Clone)]
pub struct PieceSource {
    palette: Palette,
    rng: SimpleRng,
}

impl PieceSource {
    pub fn new(palette: Palette, seed: u32) -> Self {
        Self {
            palette,
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece
    pub fn draw(&mut self) -> PieceType {
        let pieces = self.palette.pieces();
        let idx = self.rng.next_range(pieces.len() as u32) as usize;
        pieces[idx]
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }
}
