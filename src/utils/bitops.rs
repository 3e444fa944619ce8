use crate::tile::{Tile, TileKind};
use crate::game::constants::MATCH_SIZE;

/// 图案位掩码
///
/// 使用 u8 的 8 位表示每种图案是否存在（至少一个未消除的方块）。
///
/// 存在一组可消除的三元组，当且仅当至少有 3 种不同图案各出现至少一次，
/// 因此 `can_form_match` 只需一次 popcount，与逐个枚举三元组等价但为 O(n)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KindMask {
    /// 第 i 位为 1 表示 `TileKind::from_index(i)` 存在
    presence: u8,
}

impl KindMask {
    /// 创建空掩码
    pub fn new() -> Self {
        Self { presence: 0 }
    }

    /// 从方块列表创建掩码（跳过已消除的方块）
    pub fn from_tiles<'a, I>(tiles: I) -> Self
    where
        I: IntoIterator<Item = &'a Tile>,
    {
        let mut mask = Self::new();
        for tile in tiles.into_iter().filter(|t| t.is_active()) {
            mask.insert(tile.kind);
        }
        mask
    }

    /// 记录一个图案
    pub fn insert(&mut self, kind: TileKind) {
        self.presence |= 1 << kind.index();
    }

    /// 是否存在某种图案
    pub fn contains(&self, kind: TileKind) -> bool {
        (self.presence & (1 << kind.index())) != 0
    }

    /// 不同图案的种类数
    pub fn distinct_kinds(&self) -> u32 {
        self.presence.count_ones()
    }

    /// 是否还能组成一组图案互不相同的三元组
    pub fn can_form_match(&self) -> bool {
        self.distinct_kinds() as usize >= MATCH_SIZE
    }
}
