//! ナイトの移動先生成

use smallvec::SmallVec;

use crate::types::{Coordinate, Square};

/// ナイトの移動オフセット (Δrow, Δcolumn)
///
/// 列挙順は固定: 右へ2筋の2手、上へ2段の2手、左へ2筋の2手、下へ2段の2手。
/// 最短経路が複数あるとき、どれが返るかはこの順序と探索キューの順序で決まる。
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
];

/// 1升からの移動先（最大8）
pub type KnightMoves = SmallVec<[Coordinate; 8]>;

/// 盤内に収まるナイトの移動先を列挙する
///
/// 盤外判定は座標で行い、インデックスへの変換は盤内と確定した後にだけ行う。
#[inline]
pub fn possible_knight_moves(from: Coordinate) -> KnightMoves {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(d_row, d_column)| from.offset(d_row, d_column))
        .collect()
}

/// 移動先を盤インデックスで返す
#[inline]
pub fn knight_targets(from: Square) -> impl Iterator<Item = Square> {
    possible_knight_moves(from.coordinate()).into_iter().map(Square::from_coordinate)
}

/// `from` から `to` がナイトの1手かどうか
#[inline]
pub fn is_knight_move(from: Coordinate, to: Coordinate) -> bool {
    let d_row = to.row() as i8 - from.row() as i8;
    let d_column = to.column() as i8 - from.column() as i8;
    KNIGHT_OFFSETS.contains(&(d_row, d_column))
}
