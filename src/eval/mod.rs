pub mod params;
mod trace;
pub mod value;

pub use trace::trace;
pub use value::Value;

use crate::chess::types::{Color, PieceType};
use params::*;
use strum::IntoEnumIterator;

// nodes: counter of the search thread owning the position, only seeds the noise
pub trait EvalPosition {
    fn side_to_move(&self) -> Color;
    fn in_check(&self) -> bool;
    fn count(&self, color: Color, pt: PieceType) -> u32;
    fn nodes(&self) -> u64;
}

pub(crate) struct Evaluation<'a, P: EvalPosition + ?Sized> {
    pos: &'a P,
}

impl<'a, P: EvalPosition + ?Sized> Evaluation<'a, P> {
    pub(crate) fn new(pos: &'a P) -> Self {
        Evaluation { pos }
    }

    // White minus black, in tenths of a pawn
    fn material(&self) -> i32 {
        PieceType::iter()
            .take(5)
            .map(|pt| {
                let num_white = self.pos.count(Color::White, pt) as i32;
                let num_black = self.pos.count(Color::Black, pt) as i32;
                (num_white - num_black) * get_weight(pt)
            })
            .sum()
    }

    // Side to move's point of view
    pub(crate) fn value(&self) -> Value {
        debug_assert!(!self.pos.in_check(), "Evaluated a position in check");

        let mut eval: i32 = self.material() * pawn_value_eg() / WEIGHT_SCALE;
        eval += noise(self.pos.nodes());

        let value = Value::new(match self.pos.side_to_move() {
            Color::White => eval,
            Color::Black => -eval,
        });

        debug_assert!(value.is_static_eval());
        value
    }
}

// Maps the node counter to one of -14, -10, -6, -2, 2, 6, 10, 14.
pub const fn noise(nodes: u64) -> i32 {
    2 * (nodes & NOISE_MASK) as i32 - NOISE_OFFSET
}

// Must not be called in check
pub fn evaluate<P: EvalPosition + ?Sized>(pos: &P) -> Value {
    Evaluation::new(pos).value()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    pub(crate) struct FakePosition {
        pub counts: [[u32; 6]; 2], // [color][piece_type]
        pub stm: Color,
        pub in_check: bool,
        pub nodes: u64,
    }

    impl FakePosition {
        pub fn start(stm: Color, nodes: u64) -> Self {
            FakePosition {
                counts: [[8, 2, 2, 2, 1, 1]; 2],
                stm,
                in_check: false,
                nodes,
            }
        }

        pub fn with_count(mut self, color: Color, pt: PieceType, count: u32) -> Self {
            self.counts[color][pt] = count;
            self
        }

        pub fn flipped(&self) -> Self {
            FakePosition {
                stm: !self.stm,
                ..self.clone()
            }
        }
    }

    impl EvalPosition for FakePosition {
        fn side_to_move(&self) -> Color {
            self.stm
        }

        fn in_check(&self) -> bool {
            self.in_check
        }

        fn count(&self, color: Color, pt: PieceType) -> u32 {
            self.counts[color][pt]
        }

        fn nodes(&self) -> u64 {
            self.nodes
        }
    }

    #[test]
    fn test_noise_values() {
        let mut seen: Vec<i32> = (0..64).map(noise).collect();
        seen.sort();
        seen.dedup();

        assert_eq!(seen, vec![-14, -10, -6, -2, 2, 6, 10, 14]);

        assert_eq!(noise(0), -14);
        assert_eq!(noise(1), -14);
        assert_eq!(noise(2), -10);
        assert_eq!(noise(14), 14);
        assert_eq!(noise(16), -14);
        assert_eq!(noise(u64::MAX), 14);
    }

    #[test]
    fn test_start_position_is_pure_noise() {
        for nodes in 0..32 {
            let white = evaluate(&FakePosition::start(Color::White, nodes));
            let black = evaluate(&FakePosition::start(Color::Black, nodes));

            assert!(white.get().abs() <= 14);
            assert_eq!(white.get(), noise(nodes));
            assert_eq!(black.get(), -noise(nodes));
        }
    }

    #[test]
    fn test_extra_queen() {
        let expected = 9 * pawn_value_eg() - 14;

        for nodes in [0, 16, 32, 1 << 20] {
            let pos = FakePosition::start(Color::White, nodes).with_count(
                Color::Black,
                PieceType::Queen,
                0,
            );

            assert_eq!(evaluate(&pos), Value::new(expected));
            assert_eq!(evaluate(&pos.flipped()), Value::new(-expected));
        }
    }

    #[test]
    fn test_knight_weight() {
        // 2.9 pawns truncated toward zero, plus noise(8) == 2
        let pos = FakePosition::start(Color::White, 8).with_count(Color::Black, PieceType::Knight, 1);
        assert_eq!(evaluate(&pos), Value::new(29 * 208 / 10 + 2));

        let pos = FakePosition::start(Color::White, 8).with_count(Color::White, PieceType::Knight, 1);
        assert_eq!(evaluate(&pos), Value::new(-(29 * 208 / 10) + 2));
    }

    #[test]
    fn test_king_is_ignored() {
        let pos = FakePosition::start(Color::White, 6).with_count(Color::Black, PieceType::King, 0);
        assert_eq!(evaluate(&pos), Value::new(noise(6)));
    }

    #[test]
    fn test_antisymmetry() {
        let positions = [
            FakePosition::start(Color::White, 0),
            FakePosition::start(Color::White, 3).with_count(Color::White, PieceType::Pawn, 5),
            FakePosition::start(Color::White, 9)
                .with_count(Color::Black, PieceType::Rook, 0)
                .with_count(Color::White, PieceType::Bishop, 1),
            FakePosition::start(Color::White, 12)
                .with_count(Color::Black, PieceType::Knight, 0)
                .with_count(Color::White, PieceType::Queen, 2),
        ];

        for pos in positions {
            assert_eq!(evaluate(&pos), -evaluate(&pos.flipped()));
        }
    }

    #[test]
    fn test_deterministic_per_counter() {
        let pos = FakePosition::start(Color::Black, 10).with_count(Color::White, PieceType::Rook, 1);

        assert_eq!(evaluate(&pos), evaluate(&pos.clone()));

        // Siblings with the same material are nudged apart
        let sibling = FakePosition { nodes: 11, ..pos.clone() };
        let cousin = FakePosition { nodes: 12, ..pos.clone() };
        assert_eq!(evaluate(&pos), evaluate(&sibling));
        assert_ne!(evaluate(&pos), evaluate(&cousin));
    }

    #[test]
    fn test_noise_is_bounded_around_material() {
        let base = FakePosition::start(Color::White, 0).with_count(Color::Black, PieceType::Pawn, 6);
        let material = 2 * pawn_value_eg();

        for nodes in 0..256 {
            let pos = FakePosition { nodes, ..base.clone() };
            let diff = evaluate(&pos).get() - material;
            assert!([-14, -10, -6, -2, 2, 6, 10, 14].contains(&diff));
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Evaluated a position in check")]
    fn test_in_check_is_a_contract_violation() {
        let mut pos = FakePosition::start(Color::White, 0);
        pos.in_check = true;
        evaluate(&pos);
    }
}
