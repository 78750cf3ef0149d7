//! 経路のJSON表現（CLI の `--json` 出力）

use serde::{Deserialize, Serialize};

use crate::search::Path;

/// 経路のJSON表現
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathJson {
    /// 開始升 "a8" 形式
    pub start: String,
    /// 終了升
    pub end: String,
    /// 手数（升の数 - 1）
    pub moves: usize,
    /// 開始から終了までの升（両端を含む）
    pub path: Vec<String>,
}

impl From<&Path> for PathJson {
    fn from(path: &Path) -> Self {
        PathJson {
            start: path.start().to_label(),
            end: path.end().to_label(),
            moves: path.moves(),
            path: path.labels(),
        }
    }
}
