//! 幅優先探索によるナイトの最短経路探索
//!
//! 1世代（同じ手数で到達した升の集合）ずつ展開する。各升は最初に到達した
//! ときにだけ記録されるので、目標升の記録をたどれば最短経路が得られる。
//!
//! 世代の展開は [`PathFinder::step`] として公開しており、呼び出し側が
//! 世代の区切りで中断できる。

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, trace};

use super::path::Path;
use super::record::{VisitRecord, VisitTable};
use crate::board::Board;
use crate::error::{KnightError, KnightResult};
use crate::movegen::knight_targets;
use crate::types::Square;

/// 1世代展開した結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// 展開した。目標升は未到達で、次の世代がある
    Expanded,
    /// 目標升に到達した
    Found,
    /// 次の世代が空で、目標升に到達できない
    Exhausted,
}

/// 探索統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// 展開した世代数
    pub depth: u32,
    /// 移動先を列挙した升の数
    pub expanded: u64,
    /// 訪問済みにした升の数（開始升を含む）
    pub visited: u64,
}

/// ナイトの最短経路探索
///
/// 訪問記録は探索1回が専有する。別の探索と共有しないので、
/// 複数の `PathFinder` を別スレッドで同時に動かしてよい。
#[derive(Debug, Clone)]
pub struct PathFinder {
    board: Board,
    start: Square,
    target: Square,
    table: VisitTable,
    frontier: Vec<Square>,
    stats: SearchStats,
}

impl PathFinder {
    /// 開始升だけを訪問済みにして初期化する
    pub fn new(board: Board, start: Square, target: Square) -> Self {
        let table = VisitTable::new(start);
        let stats = SearchStats { visited: table.visited_count() as u64, ..SearchStats::default() };
        Self { board, start, target, table, frontier: vec![start], stats }
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.start
    }

    #[inline]
    pub fn target(&self) -> Square {
        self.target
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// 升の訪問記録
    #[inline]
    pub fn record(&self, sq: Square) -> VisitRecord {
        self.table.get(sq)
    }

    /// 次に展開する世代
    #[inline]
    pub fn frontier(&self) -> &[Square] {
        &self.frontier
    }

    /// 目標升に到達済みか
    #[inline]
    pub fn is_found(&self) -> bool {
        self.table.is_visited(self.target)
    }

    /// 1世代展開する
    ///
    /// 目標升に到達した時点で残りの升を展開せずに戻る。
    /// 終了状態（Found / Exhausted）で呼んでも状態は変わらない。
    pub fn step(&mut self) -> StepOutcome {
        if self.is_found() {
            return StepOutcome::Found;
        }
        if self.frontier.is_empty() {
            return StepOutcome::Exhausted;
        }

        self.stats.depth += 1;
        let current = std::mem::take(&mut self.frontier);
        let mut next = Vec::with_capacity(current.len() * 2);

        for &from in &current {
            self.stats.expanded += 1;
            for to in knight_targets(from) {
                if self.board.is_blocked(to) || !self.table.visit(to, from) {
                    continue;
                }
                trace!("depth {}: {from} -> {to}", self.stats.depth);
                self.stats.visited += 1;
                next.push(to);

                if to == self.target {
                    debug!(
                        "reached {} at depth {} ({} expanded, {} visited)",
                        self.target, self.stats.depth, self.stats.expanded, self.stats.visited
                    );
                    self.frontier = next;
                    return StepOutcome::Found;
                }
            }
        }

        debug!("depth {}: {} new squares", self.stats.depth, next.len());
        self.frontier = next;
        if self.frontier.is_empty() {
            StepOutcome::Exhausted
        } else {
            StepOutcome::Expanded
        }
    }

    /// 目標升に到達するまで展開して経路を返す
    pub fn run(mut self) -> KnightResult<Path> {
        self.drive(None)
    }

    /// 世代ごとに `stop` を確認しながら探索する
    pub fn run_with_stop(mut self, stop: &AtomicBool) -> KnightResult<Path> {
        self.drive(Some(stop))
    }

    fn drive(&mut self, stop: Option<&AtomicBool>) -> KnightResult<Path> {
        if self.start == self.target {
            return Ok(Path::new(vec![self.start]));
        }

        loop {
            if !self.is_found() && stop.is_some_and(|s| s.load(Ordering::Relaxed)) {
                debug!(
                    "search {} -> {} stopped at depth {}",
                    self.start, self.target, self.stats.depth
                );
                return Err(KnightError::Interrupted {
                    start: self.start,
                    end: self.target,
                    depth: self.stats.depth,
                });
            }

            match self.step() {
                StepOutcome::Expanded => continue,
                StepOutcome::Found => return Ok(self.reconstruct()),
                StepOutcome::Exhausted => {
                    debug!(
                        "no path {} -> {} ({} squares reachable)",
                        self.start, self.target, self.stats.visited
                    );
                    return Err(KnightError::NoPathFound { start: self.start, end: self.target });
                }
            }
        }
    }

    /// 目標升から直前の升をたどり、逆順にして経路にする
    fn reconstruct(&self) -> Path {
        let mut squares = vec![self.target];
        let mut current = self.target;
        while let Some(prev) = self.table.get(current).from() {
            squares.push(prev);
            current = prev;
        }
        debug_assert_eq!(current, self.start);
        squares.reverse();
        Path::new(squares)
    }
}
