//! 探索
//!
//! - `pathfinder`: 目標升で打ち切る幅優先探索と経路復元
//! - `record`: 升ごとの訪問記録
//! - `path`: 探索結果の経路

mod path;
mod pathfinder;
mod record;

use std::collections::VecDeque;

pub use path::Path;
pub use pathfinder::{PathFinder, SearchStats, StepOutcome};
pub use record::VisitRecord;

use crate::board::Board;
use crate::error::KnightResult;
use crate::movegen::knight_targets;
use crate::types::Square;

/// 障害物のない盤でラベル同士の最短経路を求める
///
/// ```
/// let path = knight_core::find_path("c5", "c8").unwrap();
/// assert_eq!(path.labels(), ["c5", "e4", "d6", "c8"]);
/// ```
pub fn find_path(start: &str, end: &str) -> KnightResult<Path> {
    find_path_on(&Board::EMPTY, start, end)
}

/// 指定した盤でラベル同士の最短経路を求める
///
/// ラベルは探索状態を作る前にすべて検証する。
pub fn find_path_on(board: &Board, start: &str, end: &str) -> KnightResult<Path> {
    let start = Square::from_label(start)?;
    let end = Square::from_label(end)?;
    PathFinder::new(*board, start, end).run()
}

/// 最短手数
pub fn distance(board: &Board, start: Square, end: Square) -> KnightResult<usize> {
    PathFinder::new(*board, start, end).run().map(|path| path.moves())
}

/// `start` から全升への最短手数（到達不能はNone）
///
/// 目標升を持たない幅優先探索で、盤全体を展開し切る。
pub fn distances_from(board: &Board, start: Square) -> [Option<u8>; Square::NUM] {
    let mut distances = [None; Square::NUM];
    distances[start.index()] = Some(0u8);

    let mut queue = VecDeque::from([(start, 0u8)]);
    while let Some((from, d)) = queue.pop_front() {
        for to in knight_targets(from) {
            if board.is_blocked(to) || distances[to.index()].is_some() {
                continue;
            }
            distances[to.index()] = Some(d + 1);
            queue.push_back((to, d + 1));
        }
    }
    distances
}
