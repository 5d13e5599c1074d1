#[allow(dead_code)]
pub const FEN_START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[allow(dead_code)]
pub const FEN_KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -";

#[allow(dead_code)]
pub const FEN_POS_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

#[allow(dead_code)]
pub const FEN_POS_4: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";

// Start position without White's queen
#[allow(dead_code)]
pub const FEN_QUEEN_DOWN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBNR w KQkq - 0 1";

// Start position without Black's queen
#[allow(dead_code)]
pub const FEN_QUEEN_UP: &str = "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

// Every piece White can own after promoting all pawns to queens, against a bare king
#[allow(dead_code)]
pub const FEN_MOST_MATERIAL: &str = "QQQQQQQQ/QRRBBNNK/8/8/8/8/8/7k w - - 0 1";
