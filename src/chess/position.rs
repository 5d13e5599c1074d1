use super::attacks::*;
use super::bitboard::Bitboard;
use super::types::*;
use super::util::FEN_START;
use std::fmt;
use std::mem::transmute;
use std::num::NonZeroU16;
use strum::IntoEnumIterator;

// No move making, checkers are computed once when the FEN is parsed
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    stm: Color,
    color_bbs: [Bitboard; 2], // [color]
    piece_bbs: [Bitboard; 6], // [piece_type]
    castling_rights: Bitboard,
    en_passant_square: Option<Square>,
    plies_since_pawn_or_capture: u16,
    move_counter: NonZeroU16,
    checkers: Bitboard,
}

impl TryFrom<&str> for Position {
    type Error = String;

    fn try_from(fen: &str) -> Result<Self, Self::Error> {
        let split_ws: Vec<&str> = fen.split_whitespace().collect();

        if split_ws.len() < 4 || split_ws.len() > 6 {
            return Err("FEN must have exactly 4, 5 or 6 tokens separated by space(s)".to_string());
        }

        let mut pos = Position {
            stm: Color::White,
            color_bbs: [Bitboard::EMPTY; 2],
            piece_bbs: [Bitboard::EMPTY; 6],
            castling_rights: Bitboard::EMPTY,
            en_passant_square: None,
            plies_since_pawn_or_capture: 0,
            move_counter: NonZeroU16::MIN,
            checkers: Bitboard::EMPTY,
        };

        let pieces_by_rank: Vec<&str> = split_ws[0].split('/').collect();

        if pieces_by_rank.len() != 8 {
            return Err("FEN pieces must be 8 tokens separated by '/'".to_string());
        }

        for (rank, rank_of_pieces) in Rank::iter().zip(pieces_by_rank.iter().rev()) {
            let mut file_idx: u32 = 0;

            for chr in rank_of_pieces.chars() {
                if let Some(digit) = chr.to_digit(10) {
                    file_idx += digit;
                    continue;
                }

                if file_idx >= 8 {
                    return Err(format!("FEN rank '{rank_of_pieces}' has more than 8 squares"));
                }

                let pt: PieceType = PieceType::try_from(chr)?;
                let piece_color = [Color::White, Color::Black][chr.is_lowercase() as usize];
                let file: File = unsafe { transmute(file_idx as u8) };

                pos.place_piece(piece_color, pt, Square::new(file, rank));
                file_idx += 1;
            }

            if file_idx != 8 {
                return Err(format!("FEN rank '{rank_of_pieces}' must cover 8 squares"));
            }
        }

        pos.stm = match split_ws[1] {
            "w" | "W" => Ok(Color::White),
            "b" | "B" => Ok(Color::Black),
            _ => Err("Error parsing color to move in FEN".to_string()),
        }?;

        for chr in split_ws[2].chars() {
            match chr {
                'K' => pos.castling_rights |= Bitboard::from(Square::H1),
                'Q' => pos.castling_rights |= Bitboard::from(Square::A1),
                'k' => pos.castling_rights |= Bitboard::from(Square::H8),
                'q' => pos.castling_rights |= Bitboard::from(Square::A8),
                _ => {}
            }
        }

        pos.en_passant_square = Square::try_from(split_ws[3]).ok();

        if split_ws.len() > 4 {
            pos.plies_since_pawn_or_capture = split_ws[4]
                .parse()
                .map_err(|_| "Error parsing halfmove clock in FEN".to_string())?;
        }

        if split_ws.len() > 5 {
            pos.move_counter = split_ws[5]
                .parse()
                .map_err(|_| "Error parsing move counter in FEN".to_string())?;
        }

        for color in Color::iter() {
            if pos.piece_bb(color, PieceType::King).count() != 1 {
                return Err(format!("FEN must have exactly one {color} king"));
            }
        }

        let king_sq: Square = pos.king_square(pos.stm);
        pos.checkers = pos.attackers(king_sq, pos.occupancy()) & pos.them();

        Ok(pos)
    }
}

impl Position {
    pub fn start() -> Self {
        Position::try_from(FEN_START).expect("FEN_START is a valid FEN")
    }

    pub const fn side_to_move(&self) -> Color {
        self.stm
    }

    pub fn piece_bb(&self, color: Color, pt: PieceType) -> Bitboard {
        self.color_bbs[color] & self.piece_bbs[pt]
    }

    pub fn count(&self, color: Color, pt: PieceType) -> u32 {
        self.piece_bb(color, pt).count()
    }

    pub fn them(&self) -> Bitboard {
        self.color_bbs[!self.stm]
    }

    pub fn occupancy(&self) -> Bitboard {
        self.color_bbs[Color::White] | self.color_bbs[Color::Black]
    }

    pub const fn in_check(&self) -> bool {
        !self.checkers.is_empty()
    }

    pub fn at(&self, sq: Square) -> Option<PieceType> {
        if !self.occupancy().contains(sq) {
            return None;
        }

        PieceType::iter().find(|&pt| self.piece_bbs[pt].contains(sq))
    }

    pub fn color_at(&self, sq: Square) -> Option<Color> {
        Color::iter().find(|&color| self.color_bbs[color].contains(sq))
    }

    pub fn king_square(&self, color: Color) -> Square {
        debug_assert!(self.piece_bb(color, PieceType::King).count() == 1);

        unsafe {
            self.piece_bb(color, PieceType::King)
                .first_square()
                .unwrap_unchecked()
        }
    }

    // Pieces of both colors attacking sq
    pub fn attackers(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        let mut attackers_bb: Bitboard =
            self.piece_bb(Color::White, PieceType::Pawn) & PAWN_ATTACKS[Color::Black][sq];

        attackers_bb |=
            self.piece_bb(Color::Black, PieceType::Pawn) & PAWN_ATTACKS[Color::White][sq];

        attackers_bb |= self.piece_bbs[PieceType::Knight] & KNIGHT_ATTACKS[sq];

        let bishops_queens: Bitboard =
            self.piece_bbs[PieceType::Bishop] | self.piece_bbs[PieceType::Queen];

        let rooks_queens: Bitboard =
            self.piece_bbs[PieceType::Rook] | self.piece_bbs[PieceType::Queen];

        attackers_bb |= bishops_queens & bishop_attacks(sq, occupancy);
        attackers_bb |= rooks_queens & rook_attacks(sq, occupancy);

        attackers_bb |= self.piece_bbs[PieceType::King] & KING_ATTACKS[sq];

        attackers_bb
    }

    fn place_piece(&mut self, color: Color, pt: PieceType, sq: Square) {
        self.color_bbs[color] |= Bitboard::from(sq);
        self.piece_bbs[pt] |= Bitboard::from(sq);
    }

    fn piece_char_at(&self, sq: Square) -> Option<char> {
        Some(piece_to_char(self.at(sq)?, self.color_at(sq)?))
    }

    pub fn fen(&self) -> String {
        let mut fen_pieces: [String; 8] = Default::default();

        for rank in Rank::iter() {
            let mut squares_skipped: u32 = 0;

            for file in File::iter() {
                let Some(piece_chr) = self.piece_char_at(Square::new(file, rank)) else {
                    squares_skipped += 1;
                    continue;
                };

                if squares_skipped > 0 {
                    fen_pieces[rank] += &squares_skipped.to_string();
                    squares_skipped = 0;
                }

                fen_pieces[rank].push(piece_chr);
            }

            if squares_skipped > 0 {
                fen_pieces[rank] += &squares_skipped.to_string();
            }
        }

        let fen_stm = if self.stm == Color::White { "w" } else { "b" };

        let fen_castling_rights = if self.castling_rights.is_empty() {
            "-".to_string()
        } else {
            [
                ('K', Square::H1),
                ('Q', Square::A1),
                ('k', Square::H8),
                ('q', Square::A8),
            ]
            .iter()
            .filter_map(|&(chr, sq)| self.castling_rights.contains(sq).then_some(chr))
            .collect::<String>()
        };

        let fen_ep_square = self
            .en_passant_square
            .map_or("-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            fen_pieces
                .iter()
                .rev()
                .cloned()
                .collect::<Vec<_>>()
                .join("/"),
            fen_stm,
            fen_castling_rights,
            fen_ep_square,
            self.plies_since_pawn_or_capture,
            self.move_counter
        )
    }
}

// Board diagram with rank 8 on top, followed by the FEN
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            let row: Vec<String> = File::iter()
                .map(|file| {
                    self.piece_char_at(Square::new(file, rank))
                        .unwrap_or('.')
                        .to_string()
                })
                .collect();

            writeln!(f, "{}", row.join(" "))?;
        }

        write!(f, "\n{}", self.fen())
    }
}
