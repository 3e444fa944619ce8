use std::fmt;
use std::str::FromStr;

use crate::game::game_engine::GameError;

/// 方块图案类型
///
/// 三异连连看固定使用 8 种图案，图案与图标/颜色的对应关系由表现层决定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    Star,
    Circle,
    Square,
    Triangle,
    Diamond,
    Heart,
    Flower,
    Moon,
}

impl TileKind {
    /// 图案种类数：8 种
    pub const COUNT: usize = 8;

    /// 全部图案（按枚举顺序，发牌时据此均匀抽样）
    pub const ALL: [TileKind; Self::COUNT] = [
        TileKind::Star,
        TileKind::Circle,
        TileKind::Square,
        TileKind::Triangle,
        TileKind::Diamond,
        TileKind::Heart,
        TileKind::Flower,
        TileKind::Moon,
    ];

    /// 转换为索引（0-7）
    pub fn index(self) -> usize {
        self as usize
    }

    /// 从索引创建图案
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 表现层使用的小写名称
    pub fn name(self) -> &'static str {
        match self {
            TileKind::Star => "star",
            TileKind::Circle => "circle",
            TileKind::Square => "square",
            TileKind::Triangle => "triangle",
            TileKind::Diamond => "diamond",
            TileKind::Heart => "heart",
            TileKind::Flower => "flower",
            TileKind::Moon => "moon",
        }
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TileKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| GameError::UnknownTileKind(s.to_string()))
    }
}

/// 方块 ID
///
/// 在同一局棋盘内唯一且不可变。对外的字符串形式为 `tile-<序号>`，
/// 序号即按行优先顺序生成时的位置。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TileId(u32);

impl TileId {
    const PREFIX: &'static str = "tile-";

    pub fn new(seq: u32) -> Self {
        Self(seq)
    }

    /// 生成序号
    pub fn seq(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

impl FromStr for TileId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| GameError::InvalidTileId(s.to_string()))?;
        // 拒绝 "+1" 之类 u32::from_str 能接受的写法
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GameError::InvalidTileId(s.to_string()));
        }
        digits
            .parse::<u32>()
            .map(TileId)
            .map_err(|_| GameError::InvalidTileId(s.to_string()))
    }
}

impl From<TileId> for String {
    fn from(id: TileId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for TileId {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// 方块
///
/// 除 `removed` 外创建后不再变化；`removed` 只会从 false 变为 true 一次
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Tile {
    pub id: TileId,
    #[serde(rename = "type")]
    pub kind: TileKind,
    pub row: u32,
    pub col: u32,
    #[serde(rename = "isRemoved")]
    pub removed: bool,
}

impl Tile {
    /// 创建一个未消除的方块
    pub fn new(id: TileId, kind: TileKind, row: u32, col: u32) -> Self {
        Self {
            id,
            kind,
            row,
            col,
            removed: false,
        }
    }

    /// 是否仍在棋盘上
    pub fn is_active(&self) -> bool {
        !self.removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_index_roundtrip() {
        for (i, kind) in TileKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(TileKind::from_index(i), Some(*kind));
        }
        assert_eq!(TileKind::from_index(TileKind::COUNT), None);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TileKind::Star.name(), "star");
        assert_eq!(TileKind::Moon.to_string(), "moon");
        assert_eq!("flower".parse::<TileKind>().unwrap(), TileKind::Flower);
        assert!(matches!("Star".parse::<TileKind>(), Err(GameError::UnknownTileKind(_))));
    }

    #[test]
    fn test_tile_id_format() {
        let id = TileId::new(17);
        assert_eq!(id.to_string(), "tile-17");
        assert_eq!("tile-17".parse::<TileId>().unwrap(), id);
    }

    #[test]
    fn test_tile_id_rejects_malformed() {
        for bad in ["17", "tile-", "tile-+1", "tile--1", "tile-1a", "Tile-1", "tile-99999999999"] {
            assert!(
                matches!(bad.parse::<TileId>(), Err(GameError::InvalidTileId(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_new_tile_is_active() {
        let tile = Tile::new(TileId::new(0), TileKind::Heart, 2, 3);
        assert!(tile.is_active());
        assert_eq!((tile.row, tile.col), (2, 3));
    }
}
