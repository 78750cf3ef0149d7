//! 訪問記録（VisitRecord）
//!
//! 1升につき1レコード。直前の升をインデックスで持つので、
//! 記録全体は開始升を根とする親ポインタの木になる。

use crate::types::Square;

/// 1升の訪問状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisitRecord {
    from: Option<Square>,
    visited: bool,
}

impl VisitRecord {
    /// 未訪問
    pub const UNVISITED: VisitRecord = VisitRecord { from: None, visited: false };

    /// 訪問済みかどうか
    #[inline]
    pub const fn is_visited(self) -> bool {
        self.visited
    }

    /// 最初に到達したときの直前の升（開始升と未訪問はNone）
    #[inline]
    pub const fn from(self) -> Option<Square> {
        self.from
    }
}

/// 探索1回分の訪問記録（64升）
#[derive(Debug, Clone)]
pub(crate) struct VisitTable {
    records: [VisitRecord; Square::NUM],
    visited: usize,
}

impl VisitTable {
    /// 開始升だけ訪問済みの表を作る
    pub(crate) fn new(start: Square) -> Self {
        let mut records = [VisitRecord::UNVISITED; Square::NUM];
        records[start.index()] = VisitRecord { from: None, visited: true };
        Self { records, visited: 1 }
    }

    #[inline]
    pub(crate) fn get(&self, sq: Square) -> VisitRecord {
        self.records[sq.index()]
    }

    #[inline]
    pub(crate) fn is_visited(&self, sq: Square) -> bool {
        self.records[sq.index()].visited
    }

    /// 未訪問なら `from` 経由で訪問済みにして true を返す
    ///
    /// 一度書いたレコードは二度と書き換えない（最初の到達が最短）。
    #[inline]
    pub(crate) fn visit(&mut self, sq: Square, from: Square) -> bool {
        let record = &mut self.records[sq.index()];
        if record.visited {
            return false;
        }
        *record = VisitRecord { from: Some(from), visited: true };
        self.visited += 1;
        true
    }

    /// 訪問済みの升の数（開始升を含む）
    #[inline]
    pub(crate) fn visited_count(&self) -> usize {
        self.visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_marks_only_start() {
        let start: Square = "d4".parse().unwrap();
        let table = VisitTable::new(start);
        assert_eq!(table.visited_count(), 1);
        assert!(table.is_visited(start));
        assert_eq!(table.get(start).from(), None);
        assert!(
            Square::all()
                .filter(|&sq| sq != start)
                .all(|sq| table.get(sq) == VisitRecord::UNVISITED)
        );
    }

    #[test]
    fn test_first_visit_wins() {
        let start: Square = "a8".parse().unwrap();
        let first: Square = "c7".parse().unwrap();
        let second: Square = "b6".parse().unwrap();
        let target: Square = "a5".parse().unwrap();

        let mut table = VisitTable::new(start);
        assert!(table.visit(target, first));
        assert!(!table.visit(target, second));
        assert_eq!(table.get(target).from(), Some(first));
        assert_eq!(table.visited_count(), 2);

        // 開始升も上書きされない
        assert!(!table.visit(start, first));
        assert_eq!(table.get(start).from(), None);
    }
}
