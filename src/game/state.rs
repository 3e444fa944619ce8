use std::collections::HashSet;

use smallvec::SmallVec;

use crate::engine::hint;
use crate::game::constants::{MATCH_SIZE, POINTS_PER_MATCH};
use crate::game::game_engine::GameError;
use crate::tile::{Dealer, Tile, TileId, TileKind};

/// 选中列表（最多 3 个，按选中顺序）
pub type Selection = SmallVec<[TileId; MATCH_SIZE]>;

/// 对局状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// 进行中
    InProgress,
    /// 棋盘清空，获胜
    Won,
    /// 剩余方块中已无可消除的三元组
    Lost,
}

/// 游戏状态
///
/// 每次状态转换都返回新的 `GameState`，调用方持有最新的值并整体替换。
/// 方块列表按行优先顺序创建，整局内既不重排也不删除，只标记消除。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub(crate) tiles: Vec<Tile>,
    pub(crate) selected_tiles: Selection,
    pub(crate) score: u32,
    pub(crate) moves: u32,
    pub(crate) game_over: bool,
    pub(crate) won: bool,
    pub(crate) rows: u32,
    pub(crate) cols: u32,
}

impl GameState {
    /// 由已发好的方块创建初始状态
    pub(crate) fn from_tiles(dealer: &Dealer, tiles: Vec<Tile>) -> Self {
        Self {
            tiles,
            selected_tiles: Selection::new(),
            score: 0,
            moves: 0,
            game_over: false,
            won: false,
            rows: dealer.rows(),
            cols: dealer.cols(),
        }
    }

    /// 按固定图案布局创建状态（行优先顺序）
    ///
    /// 用于测试、复盘或由外部决定发牌结果的场景
    pub fn from_layout(rows: u32, cols: u32, kinds: &[TileKind]) -> Result<Self, GameError> {
        let dealer = Dealer::new(rows, cols)?;
        let tiles = dealer.from_kinds(kinds)?;
        Ok(Self::from_tiles(&dealer, tiles))
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn selected_tiles(&self) -> &[TileId] {
        &self.selected_tiles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// 按 ID 查找方块
    ///
    /// 发牌生成的 ID 序号即下标，先按下标直接取，不一致时退回线性查找
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        match self.tiles.get(id.seq() as usize) {
            Some(tile) if tile.id == id => Some(tile),
            _ => self.tiles.iter().find(|t| t.id == id),
        }
    }

    /// 按坐标查找方块
    pub fn tile_at(&self, row: u32, col: u32) -> Option<&Tile> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.tiles
            .get(row as usize * self.cols as usize + col as usize)
            .filter(|t| t.row == row && t.col == col)
    }

    /// 按 ID 查找方块下标
    pub(crate) fn position(&self, id: TileId) -> Option<usize> {
        match self.tiles.get(id.seq() as usize) {
            Some(tile) if tile.id == id => Some(id.seq() as usize),
            _ => self.tiles.iter().position(|t| t.id == id),
        }
    }

    /// 未消除的方块（保持原有顺序）
    pub fn remaining_tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter().filter(|t| t.is_active())
    }

    /// 未消除的方块数
    pub fn remaining_count(&self) -> usize {
        self.remaining_tiles().count()
    }

    /// 是否已选中
    pub fn is_selected(&self, id: TileId) -> bool {
        self.selected_tiles.contains(&id)
    }

    /// 当前对局状态
    pub fn status(&self) -> GameStatus {
        match (self.game_over, self.won) {
            (true, true) => GameStatus::Won,
            (true, false) => GameStatus::Lost,
            _ => GameStatus::InProgress,
        }
    }

    /// 检查状态不变量，返回第一个违反项
    ///
    /// - 方块数 == rows * cols，ID 唯一
    /// - 选中列表不超过 3 个、无重复、不含已消除方块
    /// - won ⇒ gameOver，且 won ⇔ 全部方块已消除
    /// - 失败（gameOver 且未获胜）时不存在可消除组合
    /// - 每步消除 3 个方块：已消除数 == 3 * moves
    /// - score == 30 * moves
    pub fn validate(&self) -> Result<(), GameError> {
        let expected = self.rows as usize * self.cols as usize;
        if self.tiles.len() != expected {
            return Err(GameError::InvariantViolation(format!(
                "tile count {} != rows * cols {}",
                self.tiles.len(),
                expected
            )));
        }

        let mut ids = HashSet::with_capacity(self.tiles.len());
        for tile in &self.tiles {
            if !ids.insert(tile.id) {
                return Err(GameError::InvariantViolation(format!("duplicate tile id {}", tile.id)));
            }
        }

        if self.selected_tiles.len() > MATCH_SIZE {
            return Err(GameError::InvariantViolation(format!(
                "{} tiles selected",
                self.selected_tiles.len()
            )));
        }
        for (i, id) in self.selected_tiles.iter().enumerate() {
            if self.selected_tiles[..i].contains(id) {
                return Err(GameError::InvariantViolation(format!("{} selected twice", id)));
            }
            if self.tile(*id).map_or(false, |t| t.removed) {
                return Err(GameError::InvariantViolation(format!("removed tile {} is selected", id)));
            }
        }

        if self.won && !self.game_over {
            return Err(GameError::InvariantViolation("won without game over".to_string()));
        }
        let cleared = self.tiles.iter().all(|t| t.removed);
        if self.won != cleared {
            return Err(GameError::InvariantViolation(format!(
                "won = {} but board cleared = {}",
                self.won, cleared
            )));
        }

        if self.game_over && !self.won && hint::has_available_move(self) {
            return Err(GameError::InvariantViolation(
                "lost while a matching triple remains".to_string(),
            ));
        }

        let removed = self.tiles.iter().filter(|t| t.removed).count();
        if Some(removed) != (self.moves as usize).checked_mul(MATCH_SIZE) {
            return Err(GameError::InvariantViolation(format!(
                "{} tiles removed in {} moves",
                removed, self.moves
            )));
        }

        match self.moves.checked_mul(POINTS_PER_MATCH) {
            Some(expected) if expected == self.score => {}
            _ => {
                return Err(GameError::InvariantViolation(format!(
                    "score {} != {} * moves {}",
                    self.score, POINTS_PER_MATCH, self.moves
                )))
            }
        }

        Ok(())
    }

    /// 序列化为表现层使用的 JSON
    pub fn to_json(&self) -> Result<String, GameError> {
        serde_json::to_string(self).map_err(|e| GameError::Snapshot(e.to_string()))
    }

    /// 从 JSON 恢复状态，并校验不变量
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let state: Self = serde_json::from_str(json).map_err(|e| GameError::Snapshot(e.to_string()))?;
        state.validate()?;
        Ok(state)
    }
}
