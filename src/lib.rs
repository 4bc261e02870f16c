pub mod game;

pub use game::{
    Board, BoardBuilder, CapturedPieces, Color, FenError, Game, MoveError, MoveRecord, MoveTarget,
    Piece, SharedGame, Snapshot, Square, SquareError, Status, TargetList,
};
