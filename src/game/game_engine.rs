use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::hint;
use crate::game::config::GameConfig;
use crate::game::constants::{MATCH_SIZE, POINTS_PER_MATCH};
use crate::game::rules;
use crate::game::state::{GameState, Selection};
use crate::tile::{Dealer, TileId};

/// 游戏引擎错误
///
/// 只有构造和解析会失败；选中、消除和查询都是全函数
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// 棋盘尺寸为 0 或方块总数溢出
    #[error("invalid board dimensions {rows}x{cols}")]
    InvalidDimensions { rows: u32, cols: u32 },
    /// 固定布局的图案数量与棋盘大小不符
    #[error("layout has {actual} tiles, board needs {expected}")]
    LayoutMismatch { expected: usize, actual: usize },
    /// 无法解析的方块 ID
    #[error("invalid tile id: {0:?}")]
    InvalidTileId(String),
    /// 未知的图案名称
    #[error("unknown tile kind: {0:?}")]
    UnknownTileKind(String),
    /// 状态不变量被破坏
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
    /// 配置加载失败
    #[error("config error: {0}")]
    Config(String),
    /// 状态快照（JSON）编解码失败
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

/// 一次选中操作的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// 没有任何变化（对局已结束、选中已满或方块已消除）
    Ignored,
    /// 加入选中列表
    Selected,
    /// 再次点击，取消选中
    Deselected,
    /// 三个图案互不相同，已消除
    Matched { ids: [TileId; MATCH_SIZE] },
    /// 凑满三个但有重复图案，清空选中
    Mismatched { ids: [TileId; MATCH_SIZE] },
}

impl SelectOutcome {
    /// 棋盘（方块、分数、步数）是否发生变化
    pub fn is_match(&self) -> bool {
        matches!(self, SelectOutcome::Matched { .. })
    }
}

/// 棋盘引擎
///
/// 持有配置和随机数源；状态本身由调用方持有，每次转换都返回新的状态
#[derive(Debug, Clone)]
pub struct BoardEngine<R: Rng = StdRng> {
    config: GameConfig,
    dealer: Dealer,
    rng: R,
}

impl BoardEngine<StdRng> {
    /// 使用默认配置（6×6，系统熵源）创建引擎
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            dealer: Dealer::standard(),
            rng: StdRng::from_entropy(),
        }
    }

    /// 按配置创建引擎；配置了种子时发牌结果可复现
    pub fn with_config(config: GameConfig) -> Result<Self, GameError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// 使用固定种子、默认尺寸创建引擎
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: GameConfig::default().with_seed(seed),
            dealer: Dealer::standard(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for BoardEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> BoardEngine<R> {
    /// 使用外部注入的随机数源创建引擎
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, GameError> {
        config.validate()?;
        let dealer = Dealer::new(config.rows, config.cols)?;
        Ok(Self { config, dealer, rng })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// 按配置的尺寸发一局新牌
    pub fn deal(&mut self) -> GameState {
        deal_with(&self.dealer, &mut self.rng)
    }

    /// 按指定尺寸发一局新牌
    pub fn initialize(&mut self, rows: u32, cols: u32) -> Result<GameState, GameError> {
        initialize_with_rng(rows, cols, &mut self.rng)
    }

    /// 重置：总是发一局 6×6 的新牌，与配置的尺寸无关
    pub fn reset(&mut self) -> GameState {
        deal_with(&Dealer::standard(), &mut self.rng)
    }

    /// 选中一个方块
    ///
    /// 开启 `auto_game_over` 时，转换后若已无可消除组合，直接写入 gameOver
    pub fn select_tile(&self, state: &GameState, tile_id: TileId) -> GameState {
        self.select_tile_with_outcome(state, tile_id).0
    }

    /// 选中一个方块，同时返回本次操作的结果
    pub fn select_tile_with_outcome(&self, state: &GameState, tile_id: TileId) -> (GameState, SelectOutcome) {
        let (mut next, outcome) = select_tile_with_outcome(state, tile_id);
        if self.config.auto_game_over && !state.game_over && !next.game_over && !hint::has_available_move(&next) {
            info!("no matching triple left after {} moves, game lost", next.moves);
            next.game_over = true;
        }
        (next, outcome)
    }
}

fn deal_with<R: Rng + ?Sized>(dealer: &Dealer, rng: &mut R) -> GameState {
    let tiles = dealer.deal(rng);
    info!("dealt {}x{} board", dealer.rows(), dealer.cols());
    GameState::from_tiles(dealer, tiles)
}

/// 初始化游戏（系统随机数源）
pub fn initialize(rows: u32, cols: u32) -> Result<GameState, GameError> {
    initialize_with_rng(rows, cols, &mut rand::thread_rng())
}

/// 初始化游戏（注入随机数源，便于复现）
///
/// 每个方块的图案独立均匀抽样；不保证棋盘可解
pub fn initialize_with_rng<R: Rng + ?Sized>(rows: u32, cols: u32, rng: &mut R) -> Result<GameState, GameError> {
    let dealer = Dealer::new(rows, cols)?;
    Ok(deal_with(&dealer, rng))
}

/// 重置游戏：发一局 6×6 的新牌
pub fn reset() -> GameState {
    deal_with(&Dealer::standard(), &mut rand::thread_rng())
}

/// 选中一个方块
///
/// 按优先级：
/// 1. 对局已结束：原样返回
/// 2. 已在选中列表中：取消选中
/// 3. 已选满 3 个：原样返回
/// 4. 已消除的方块：原样返回
/// 5. 加入选中列表；凑满 3 个时按消除规则消除或清空
///
/// 不存在的 ID 也会占用一个选中位置，但它参与的三元组不会被消除
pub fn select_tile(state: &GameState, tile_id: TileId) -> GameState {
    select_tile_with_outcome(state, tile_id).0
}

/// 选中一个方块，同时返回本次操作的结果
pub fn select_tile_with_outcome(state: &GameState, tile_id: TileId) -> (GameState, SelectOutcome) {
    if state.game_over {
        return (state.clone(), SelectOutcome::Ignored);
    }

    if state.is_selected(tile_id) {
        let mut next = state.clone();
        next.selected_tiles.retain(|id| *id != tile_id);
        debug!("deselect {}", tile_id);
        return (next, SelectOutcome::Deselected);
    }

    if state.selected_tiles.len() >= MATCH_SIZE {
        debug!("selection full, ignore {}", tile_id);
        return (state.clone(), SelectOutcome::Ignored);
    }

    if state.tile(tile_id).map_or(false, |t| t.removed) {
        debug!("{} already removed, ignore", tile_id);
        return (state.clone(), SelectOutcome::Ignored);
    }

    let mut selection: Selection = state.selected_tiles.clone();
    selection.push(tile_id);

    if selection.len() < MATCH_SIZE {
        let mut next = state.clone();
        next.selected_tiles = selection;
        debug!("select {} ({} selected)", tile_id, next.selected_tiles.len());
        return (next, SelectOutcome::Selected);
    }

    let ids = [selection[0], selection[1], selection[2]];
    if rules::can_remove(state, &ids) {
        debug!("match {} {} {}", ids[0], ids[1], ids[2]);
        (remove_tiles(state, &ids), SelectOutcome::Matched { ids })
    } else {
        let mut next = state.clone();
        next.selected_tiles.clear();
        debug!("mismatch {} {} {}", ids[0], ids[1], ids[2]);
        (next, SelectOutcome::Mismatched { ids })
    }
}

/// 消除方块
///
/// 将给定 ID 对应的方块标记为已消除，清空选中，加 30 分、步数加 1；
/// 剩余方块为 0 时同时置 won 和 gameOver。
/// 不检查消除条件，只在 `select_tile` 判定匹配后调用。
pub(crate) fn remove_tiles(state: &GameState, tile_ids: &[TileId]) -> GameState {
    let mut next = state.clone();

    for id in tile_ids {
        if let Some(pos) = next.position(*id) {
            next.tiles[pos].removed = true;
        }
    }

    next.selected_tiles.clear();
    next.score += POINTS_PER_MATCH;
    next.moves += 1;

    if next.remaining_count() == 0 {
        next.won = true;
        next.game_over = true;
        info!("board cleared in {} moves, score {}", next.moves, next.score);
    }

    next
}

/// 把 `check_game_over` 的结果写回状态
///
/// 已结束的对局保持不变
pub fn apply_game_over(state: &GameState) -> GameState {
    let mut next = state.clone();
    if !next.game_over && hint::check_game_over(&next) {
        info!("no matching triple left after {} moves, game lost", next.moves);
        next.game_over = true;
    }
    next
}
