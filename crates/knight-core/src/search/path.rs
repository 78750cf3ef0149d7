//! 経路（Path）

use std::fmt;

use crate::movegen::is_knight_move;
use crate::types::Square;

/// 開始升から終了升まで（両端を含む）の升の列
///
/// 探索が成功したときにだけ作られ、常に1升以上を含む。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    squares: Vec<Square>,
}

impl Path {
    pub(crate) fn new(squares: Vec<Square>) -> Path {
        debug_assert!(!squares.is_empty());
        Path { squares }
    }

    #[inline]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.squares[0]
    }

    #[inline]
    pub fn end(&self) -> Square {
        self.squares[self.squares.len() - 1]
    }

    /// 升の数
    #[inline]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// 常に false（空の経路は作られない）
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// 手数
    #[inline]
    pub fn moves(&self) -> usize {
        self.squares.len() - 1
    }

    /// ラベル列（"a8"等）
    pub fn labels(&self) -> Vec<String> {
        self.squares.iter().map(|sq| sq.to_label()).collect()
    }

    /// 隣り合う升がすべてナイトの1手で結ばれているか
    pub fn is_connected(&self) -> bool {
        self.squares
            .windows(2)
            .all(|pair| is_knight_move(pair[0].coordinate(), pair[1].coordinate()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.squares.iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// "a8, c7, e8" 形式
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sq) in self.squares.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{sq}")?;
        }
        Ok(())
    }
}
