//! 座標（Coordinate）

use std::fmt;

use super::Square;
use crate::error::{KnightError, KnightResult};

/// 盤上の座標（row, column とも 1〜8）
///
/// row 8 が最上段（8段目）、column 1 が a筋。
/// 生成後は不変で、常に盤内を指す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    row: u8,
    column: u8,
}

impl Coordinate {
    /// 1辺のマス数
    pub const SIZE: u8 = 8;

    /// row, column から生成（盤外ならNone）
    #[inline]
    pub const fn new(row: u8, column: u8) -> Option<Coordinate> {
        if row >= 1 && row <= Self::SIZE && column >= 1 && column <= Self::SIZE {
            Some(Coordinate { row, column })
        } else {
            None
        }
    }

    /// 範囲チェックなしで生成
    ///
    /// 呼び出し側で 1..=8 を保証すること。
    #[inline]
    pub(crate) const fn new_unchecked(row: u8, column: u8) -> Coordinate {
        debug_assert!(row >= 1 && row <= Self::SIZE && column >= 1 && column <= Self::SIZE);
        Coordinate { row, column }
    }

    /// 段（1〜8）
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// 筋（1〜8、a=1）
    #[inline]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// (Δrow, Δcolumn) を足した座標を返す（盤外ならNone）
    ///
    /// 盤外判定は座標のまま行う。インデックスに変換してからでは
    /// 筋の折り返しを検出できない。
    #[inline]
    pub const fn offset(self, d_row: i8, d_column: i8) -> Option<Coordinate> {
        // i8 同士の加算はあふれるので i16 で計算する
        let row = self.row as i16 + d_row as i16;
        let column = self.column as i16 + d_column as i16;
        let size = Self::SIZE as i16;
        if row < 1 || row > size || column < 1 || column > size {
            return None;
        }
        Some(Coordinate { row: row as u8, column: column as u8 })
    }

    /// 盤インデックスに変換
    #[inline]
    pub const fn to_square(self) -> Square {
        Square::from_coordinate(self)
    }

    /// 盤インデックス（0〜63）から生成
    pub fn from_index(index: usize) -> KnightResult<Coordinate> {
        Square::from_index(index).map(Square::coordinate)
    }

    /// 筋の文字（'a'〜'h'）
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.column - 1) as char
    }

    /// 段の文字（'1'〜'8'）
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'0' + self.row) as char
    }

    /// ラベル（"a8"等）から生成
    ///
    /// 筋の文字は大文字も受け付ける。
    pub fn from_label(label: &str) -> KnightResult<Coordinate> {
        let mut chars = label.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => (f, r),
            _ => return Err(KnightError::invalid_label(label, "expected 2 characters")),
        };

        let column = match file.to_ascii_lowercase() {
            c @ 'a'..='h' => c as u8 - b'a' + 1,
            _ => return Err(KnightError::invalid_label(label, "file must be a..h")),
        };
        let row = match rank {
            c @ '1'..='8' => c as u8 - b'0',
            _ => return Err(KnightError::invalid_label(label, "rank must be 1..8")),
        };

        Ok(Coordinate::new_unchecked(row, column))
    }

    /// ラベル（"a8"等）に変換
    pub fn to_label(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl std::str::FromStr for Coordinate {
    type Err = KnightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coordinate::from_label(s)
    }
}
