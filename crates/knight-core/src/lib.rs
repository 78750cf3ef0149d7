//! # knight-core
//!
//! 8x8 盤上でナイトの最短経路を求めるライブラリ。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Coordinate, Square, JSON表現）
//! - `movegen`: ナイトの移動先生成
//! - `board`: 進入禁止マス（障害物）付きの盤
//! - `search`: 幅優先探索と経路復元
//! - `error`: エラー型
//!
//! ```
//! let path = knight_core::find_path("a8", "h2").unwrap();
//! assert_eq!(path.to_string(), "a8, c7, e8, f6, g4, h2");
//! assert_eq!(path.moves(), 5);
//! ```

pub mod board;
pub mod error;
pub mod movegen;
pub mod search;
pub mod types;

pub use board::Board;
pub use error::{KnightError, KnightResult};
pub use movegen::{is_knight_move, possible_knight_moves, KNIGHT_OFFSETS};
pub use search::{
    distance, distances_from, find_path, find_path_on, Path, PathFinder, SearchStats, StepOutcome,
    VisitRecord,
};
pub use types::{Coordinate, PathJson, Square};
