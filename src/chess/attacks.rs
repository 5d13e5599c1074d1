use super::bitboard::Bitboard;
use super::types::Square;

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

// [color]
const PAWN_DELTAS: [[(i8, i8); 2]; 2] = [[(-1, 1), (1, 1)], [(-1, -1), (1, -1)]];

const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const fn leaper_attacks(sq_idx: usize, deltas: &[(i8, i8)]) -> Bitboard {
    let file = (sq_idx % 8) as i8;
    let rank = (sq_idx / 8) as i8;
    let mut bits: u64 = 0;

    let mut i: usize = 0;
    while i < deltas.len() {
        let (df, dr) = deltas[i];
        let (f, r) = (file + df, rank + dr);

        if f >= 0 && f < 8 && r >= 0 && r < 8 {
            bits |= 1u64 << ((r * 8 + f) as u32);
        }

        i += 1;
    }

    Bitboard::new(bits)
}

const fn leaper_table(deltas: &[(i8, i8)]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];

    let mut sq_idx: usize = 0;
    while sq_idx < 64 {
        table[sq_idx] = leaper_attacks(sq_idx, deltas);
        sq_idx += 1;
    }

    table
}

// [color][square]
pub static PAWN_ATTACKS: [[Bitboard; 64]; 2] =
    [leaper_table(&PAWN_DELTAS[0]), leaper_table(&PAWN_DELTAS[1])];

// [square]
pub static KNIGHT_ATTACKS: [Bitboard; 64] = leaper_table(&KNIGHT_DELTAS);

// [square]
pub static KING_ATTACKS: [Bitboard; 64] = leaper_table(&KING_DELTAS);

fn ray_attacks(sq: Square, occ: Bitboard, dirs: &[(i8, i8); 4]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;

    for &(df, dr) in dirs {
        let mut current: Square = sq;

        while let Some(next) = current.offset(df, dr) {
            attacks |= Bitboard::from(next);

            if occ.contains(next) {
                break;
            }

            current = next;
        }
    }

    attacks
}

pub fn bishop_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    ray_attacks(sq, occ, &BISHOP_DIRS)
}

pub fn rook_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    ray_attacks(sq, occ, &ROOK_DIRS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::types::*;

    #[test]
    fn test_pawn_knight_king_attacks() {
        assert_eq!(
            PAWN_ATTACKS[Color::White][Square::E4],
            Bitboard::from(Square::D5) | Bitboard::from(Square::F5)
        );

        assert_eq!(
            PAWN_ATTACKS[Color::Black][Square::A2],
            Bitboard::from(Square::B1)
        );

        assert_eq!(KNIGHT_ATTACKS[Square::A3], Bitboard::from(8657044482));
        assert_eq!(KNIGHT_ATTACKS[Square::D4], Bitboard::from(22136263676928));

        assert_eq!(KING_ATTACKS[Square::B1], Bitboard::from(1797));
        assert_eq!(KING_ATTACKS[Square::D4], Bitboard::from(120596463616));
    }

    #[test]
    fn test_bishop_rook_attacks() {
        assert_eq!(
            bishop_attacks(Square::B2, Bitboard::from(0)),
            Bitboard::from(9241421688590368773)
        );

        assert_eq!(
            bishop_attacks(Square::B2, Bitboard::from(68719542784)),
            Bitboard::from(68854022149)
        );

        assert_eq!(
            rook_attacks(Square::B1, Bitboard::from(0)),
            Bitboard::from(144680345676153597)
        );

        assert_eq!(
            rook_attacks(Square::B1, Bitboard::from(562949953421442)),
            Bitboard::from(565157600297725)
        );
    }
}
