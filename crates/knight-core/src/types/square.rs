//! 升目（Square）

use std::fmt;

use super::Coordinate;
use crate::error::{KnightError, KnightResult};

/// 升目（0-63）
///
/// 配置: 8段目から段ごとに並べる
/// a8=0, b8=1, ..., h8=7, a7=8, ..., h1=63
///
/// `index = (8 - row) * 8 + (column - 1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 升目の数
    pub const NUM: usize = 64;

    // 定数定義（四隅）
    /// a8
    pub const A8: Square = Square(0);
    /// h8
    pub const H8: Square = Square(7);
    /// a1
    pub const A1: Square = Square(56);
    /// h1
    pub const H1: Square = Square(63);

    /// 座標からSquareを生成
    #[inline]
    pub const fn from_coordinate(c: Coordinate) -> Square {
        let size = Coordinate::SIZE;
        Square((size - c.row()) * size + (c.column() - 1))
    }

    /// 座標を取得
    #[inline]
    pub const fn coordinate(self) -> Coordinate {
        let size = Coordinate::SIZE;
        Coordinate::new_unchecked(size - self.0 / size, self.0 % size + 1)
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 内部値を取得
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// u8から生成（範囲チェックあり）
    #[inline]
    pub const fn from_u8(n: u8) -> Option<Square> {
        if (n as usize) < Self::NUM { Some(Square(n)) } else { None }
    }

    /// インデックスから生成（盤外ならエラー）
    pub fn from_index(index: usize) -> KnightResult<Square> {
        u8::try_from(index)
            .ok()
            .and_then(Square::from_u8)
            .ok_or(KnightError::IndexOutOfRange(index))
    }

    /// 盤面マスク上のビット
    #[inline]
    pub const fn bit(self) -> u64 {
        1u64 << self.0
    }

    /// ラベル（"a8"等）からSquareに変換
    pub fn from_label(label: &str) -> KnightResult<Square> {
        Coordinate::from_label(label).map(Square::from_coordinate)
    }

    /// ラベル（"a8"等）に変換
    pub fn to_label(self) -> String {
        self.coordinate().to_label()
    }

    /// 全ての升を返すイテレータ
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::NUM as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.coordinate(), f)
    }
}

impl std::str::FromStr for Square {
    type Err = KnightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_label(s)
    }
}

impl From<Coordinate> for Square {
    fn from(c: Coordinate) -> Self {
        Square::from_coordinate(c)
    }
}
