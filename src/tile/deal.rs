use rand::Rng;

use super::tile::{Tile, TileId, TileKind};
use crate::game::constants::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::game::game_engine::GameError;

/// 发牌器
///
/// 按行优先顺序生成 `rows * cols` 个方块，ID 依次为 `tile-0 .. tile-(n-1)`。
/// 每个方块的图案独立、均匀地从 8 种图案中抽取（有放回抽样），
/// 不保证生成的棋盘可解。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dealer {
    rows: u32,
    cols: u32,
}

impl Dealer {
    /// 创建发牌器，校验棋盘尺寸
    ///
    /// 行列数必须为正，且方块总数不能溢出 `u32`
    pub fn new(rows: u32, cols: u32) -> Result<Self, GameError> {
        if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
            return Err(GameError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// 方块总数
    pub fn tile_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// 随机发牌
    pub fn deal<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Tile> {
        self.build(|_| TileKind::ALL[rng.gen_range(0..TileKind::COUNT)])
    }

    /// 按固定图案布局发牌
    ///
    /// `kinds` 按行优先顺序给出，长度必须等于 `rows * cols`
    pub fn from_kinds(&self, kinds: &[TileKind]) -> Result<Vec<Tile>, GameError> {
        if kinds.len() != self.tile_count() {
            return Err(GameError::LayoutMismatch {
                expected: self.tile_count(),
                actual: kinds.len(),
            });
        }
        Ok(self.build(|seq| kinds[seq]))
    }

    /// 默认 6×6 棋盘
    pub const fn standard() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }

    fn build<F>(&self, mut kind_at: F) -> Vec<Tile>
    where
        F: FnMut(usize) -> TileKind,
    {
        let mut tiles = Vec::with_capacity(self.tile_count());
        let mut seq = 0u32;
        for row in 0..self.rows {
            for col in 0..self.cols {
                let kind = kind_at(seq as usize);
                tiles.push(Tile::new(TileId::new(seq), kind, row, col));
                seq += 1;
            }
        }
        tiles
    }
}
