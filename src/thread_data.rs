use crate::chess::{
    position::Position,
    types::{Color, PieceType},
};
use crate::eval::EvalPosition;
use delegate::delegate;

#[derive(Clone, Debug)]
pub struct ThreadData {
    pub pos: Position,
    pub(crate) nodes: u64,
}

impl Default for ThreadData {
    fn default() -> Self {
        Self::new()
    }
}

impl ThreadData {
    pub fn new() -> Self {
        ThreadData {
            pos: Position::start(),
            nodes: 0,
        }
    }

    pub fn ucinewgame(&mut self) {
        self.pos = Position::start();
        self.nodes = 0;
    }

    pub const fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn set_nodes(&mut self, nodes: u64) {
        self.nodes = nodes;
    }

    // Called by search once per visited node
    pub fn inc_nodes(&mut self) {
        self.nodes = self.nodes.wrapping_add(1);
    }
}

impl EvalPosition for ThreadData {
    delegate! {
        to self.pos {
            fn side_to_move(&self) -> Color;
            fn in_check(&self) -> bool;
            fn count(&self, color: Color, pt: PieceType) -> u32;
        }
    }

    fn nodes(&self) -> u64 {
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::util::*;
    use crate::eval::{Value, evaluate, noise, params::pawn_value_eg, trace};

    #[test]
    fn test_evaluate_thread_position() {
        let mut td = ThreadData::new();
        td.pos = Position::try_from(FEN_QUEEN_UP).unwrap();

        assert_eq!(evaluate(&td), Value::new(9 * pawn_value_eg() - 14));

        td.pos = Position::try_from(FEN_QUEEN_DOWN).unwrap();
        assert_eq!(evaluate(&td), Value::new(-9 * pawn_value_eg() - 14));
    }

    #[test]
    fn test_most_material_stays_below_mate_scores() {
        let mut td = ThreadData::new();
        td.pos = Position::try_from(FEN_MOST_MATERIAL).unwrap();

        // (9 * 90 + 2 * 50 + 2 * 30 + 2 * 29) * 208 / 10 - 14
        let value = evaluate(&td);
        assert_eq!(value, Value::new(21368));
        assert!(value.is_static_eval());
    }

    #[test]
    fn test_counter_drives_noise() {
        let mut td = ThreadData::new();

        for _ in 0..40 {
            assert_eq!(evaluate(&td), Value::new(noise(td.nodes())));
            td.inc_nodes();
        }

        td.set_nodes(7);
        let first = evaluate(&td);
        assert_eq!(first, evaluate(&td));
        assert_eq!(first, Value::new(-2));
    }

    #[test]
    fn test_trace_thread_position() {
        let mut td = ThreadData::new();
        td.pos = Position::try_from("4k3/3P4/8/8/8/8/8/4K3 b - - 0 1").unwrap();

        assert_eq!(trace(&td), "Total evaluation: none (in check)");

        td.ucinewgame();
        assert_eq!(td.nodes(), 0);
        assert_eq!(trace(&td), "Final evaluation: -0.0673077 (white side)\n");
    }
}
