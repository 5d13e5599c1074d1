use std::mem::transmute;

use derive_more::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Shl};

use super::types::*;

#[rustfmt::skip]
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd,
    BitAnd, BitAndAssign, BitOr, BitOrAssign, Shl
)]
pub struct Bitboard(u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    pub const fn new(bits: u64) -> Self {
        Bitboard(bits)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn contains(self, sq: Square) -> bool {
        let and = self & Bitboard::from(sq);
        !and.is_empty()
    }

    pub const fn first_square(self) -> Option<Square> {
        if self.is_empty() {
            return None;
        }

        let sq_idx: u8 = self.0.trailing_zeros() as u8;
        unsafe { Some(transmute(sq_idx)) }
    }

    pub fn pop_square(&mut self) -> Option<Square> {
        let sq: Option<Square> = self.first_square();

        if sq.is_some() {
            *self &= Bitboard::from(self.0 - 1);
        }

        sq
    }
}

impl From<u64> for Bitboard {
    fn from(bitboard: u64) -> Self {
        Bitboard(bitboard)
    }
}

impl From<Square> for Bitboard {
    fn from(sq: Square) -> Self {
        Bitboard::from(1) << (sq as u8)
    }
}

impl Iterator for Bitboard {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        self.pop_square()
    }
}
