//! 基本型
//!
//! ラベル（"a8"）、座標（row, column）、盤インデックス（0-63）の相互変換を担う。

mod coord;
mod json;
mod square;

pub use coord::Coordinate;
pub use json::PathJson;
pub use square::Square;
