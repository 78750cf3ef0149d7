//! 盤（進入禁止マス付き）
//!
//! 通常の 8x8 盤は全マスが連結しているが、進入禁止マスを置くと
//! 到達不能な組が生まれる。探索側はこの盤を参照するだけで変更しない。

use crate::error::KnightResult;
use crate::types::Square;

/// 進入禁止マスの集合（1ビット = 1升、ビット位置は `Square::index`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    blocked: u64,
}

impl Board {
    /// 障害物のない盤
    pub const EMPTY: Board = Board { blocked: 0 };

    /// 障害物のない盤を生成
    #[inline]
    pub const fn new() -> Board {
        Self::EMPTY
    }

    /// 指定した升を進入禁止にした盤を生成
    pub fn with_blocked<I>(squares: I) -> Board
    where
        I: IntoIterator<Item = Square>,
    {
        let mut board = Board::new();
        for sq in squares {
            board.block(sq);
        }
        board
    }

    /// ラベル列から生成
    pub fn from_labels<I, S>(labels: I) -> KnightResult<Board>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let squares = labels
            .into_iter()
            .map(|label| Square::from_label(label.as_ref()))
            .collect::<KnightResult<Vec<_>>>()?;
        Ok(Board::with_blocked(squares))
    }

    /// 升を進入禁止にする
    #[inline]
    pub fn block(&mut self, sq: Square) {
        self.blocked |= sq.bit();
    }

    /// 進入禁止を解除する
    #[inline]
    pub fn unblock(&mut self, sq: Square) {
        self.blocked &= !sq.bit();
    }

    #[inline]
    pub const fn is_blocked(self, sq: Square) -> bool {
        self.blocked & sq.bit() != 0
    }

    /// 進入禁止マスの数
    #[inline]
    pub const fn blocked_count(self) -> u32 {
        self.blocked.count_ones()
    }

    /// 進入禁止マスを昇順に列挙
    pub fn blocked_squares(self) -> impl Iterator<Item = Square> {
        Square::all().filter(move |&sq| self.is_blocked(sq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KnightError;

    #[test]
    fn test_empty_board() {
        let board = Board::default();
        assert_eq!(board, Board::EMPTY);
        assert_eq!(board.blocked_count(), 0);
        assert!(Square::all().all(|sq| !board.is_blocked(sq)));
    }

    #[test]
    fn test_block_and_unblock() {
        let mut board = Board::new();
        board.block(Square::A8);
        board.block(Square::H1);
        board.block(Square::H1);
        assert_eq!(board.blocked_count(), 2);
        assert!(board.is_blocked(Square::A8));
        assert!(!board.is_blocked(Square::A1));

        board.unblock(Square::A8);
        assert_eq!(board.blocked_squares().collect::<Vec<_>>(), [Square::H1]);
    }

    #[test]
    fn test_from_labels() {
        let board = Board::from_labels(["c7", "B6"]).unwrap();
        let labels: Vec<String> = board.blocked_squares().map(Square::to_label).collect();
        assert_eq!(labels, ["c7", "b6"]);

        assert!(matches!(
            Board::from_labels(["c7", "x1"]),
            Err(KnightError::InvalidLabel { .. })
        ));
    }
}
