pub mod attacks;
pub mod bitboard;
pub mod position;
pub mod types;
pub mod util;
