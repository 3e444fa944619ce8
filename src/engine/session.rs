use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;
use rand::rngs::StdRng;

use crate::engine::hint::{self, Move};
use crate::game::config::GameConfig;
use crate::game::game_engine::{apply_game_over, BoardEngine, GameError, SelectOutcome};
use crate::game::state::GameState;
use crate::tile::TileId;

struct Inner {
    engine: BoardEngine<StdRng>,
    state: GameState,
}

/// 对局会话
///
/// 状态转换函数本身不加锁，假定独占输入快照；会话用一把互斥锁把同一局的
/// 所有调用串行化，每次转换后整体替换持有的状态。可在线程间共享（`Arc<GameSession>`）。
pub struct GameSession {
    inner: Mutex<Inner>,
}

impl GameSession {
    /// 按配置创建会话并发牌
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let mut engine = BoardEngine::with_config(config)?;
        let state = engine.deal();
        Ok(Self {
            inner: Mutex::new(Inner { engine, state }),
        })
    }

    /// 从已有状态恢复会话
    pub fn resume(config: GameConfig, state: GameState) -> Result<Self, GameError> {
        state.validate()?;
        let engine = BoardEngine::with_config(config)?;
        Ok(Self {
            inner: Mutex::new(Inner { engine, state }),
        })
    }

    // 状态每次都整体替换，锁中毒时内部值仍是完整的某个版本
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 当前状态的副本
    pub fn snapshot(&self) -> GameState {
        self.lock().state.clone()
    }

    /// 选中一个方块
    pub fn select(&self, tile_id: TileId) -> (GameState, SelectOutcome) {
        let mut inner = self.lock();
        let (next, outcome) = inner.engine.select_tile_with_outcome(&inner.state, tile_id);
        debug!("session select {} -> {:?}", tile_id, outcome);
        inner.state = next.clone();
        (next, outcome)
    }

    /// 按字符串 ID（如 `tile-3`）选中方块
    pub fn select_str(&self, tile_id: &str) -> Result<(GameState, SelectOutcome), GameError> {
        let id: TileId = tile_id.parse()?;
        Ok(self.select(id))
    }

    /// 提示一组可消除的方块
    pub fn hint(&self) -> Option<Move> {
        hint::first_move(&self.lock().state)
    }

    /// 查询是否已无可消除组合，并把结果写回状态
    ///
    /// 返回写回后的 gameOver
    pub fn refresh_game_over(&self) -> bool {
        let mut inner = self.lock();
        inner.state = apply_game_over(&inner.state);
        inner.state.is_game_over()
    }

    /// 按配置的尺寸重新发牌
    pub fn new_game(&self) -> GameState {
        let mut inner = self.lock();
        inner.state = inner.engine.deal();
        inner.state.clone()
    }

    /// 重置为 6×6 新局
    pub fn reset(&self) -> GameState {
        let mut inner = self.lock();
        inner.state = inner.engine.reset();
        inner.state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::GameStatus;
    use crate::tile::TileKind;

    fn id(seq: u32) -> TileId {
        TileId::new(seq)
    }

    #[test]
    fn test_session_select_updates_state() {
        let state = GameState::from_layout(1, 3, &[TileKind::Star, TileKind::Circle, TileKind::Square]).unwrap();
        let session = GameSession::resume(GameConfig::default(), state).unwrap();

        session.select(id(0));
        assert_eq!(session.snapshot().selected_tiles(), &[id(0)]);

        session.select_str("tile-1").unwrap();
        let (state, outcome) = session.select_str("tile-2").unwrap();
        assert!(outcome.is_match());
        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(session.snapshot(), state);
    }

    #[test]
    fn test_session_rejects_bad_id() {
        let session = GameSession::new(GameConfig::default().with_seed(3)).unwrap();
        assert!(matches!(session.select_str("3"), Err(GameError::InvalidTileId(_))));
    }

    #[test]
    fn test_session_refresh_game_over() {
        let state = GameState::from_layout(1, 2, &[TileKind::Star, TileKind::Star]).unwrap();
        let session = GameSession::resume(GameConfig::default(), state).unwrap();
        assert!(!session.snapshot().is_game_over());
        assert!(session.hint().is_none());
        assert!(session.refresh_game_over());
        assert_eq!(session.snapshot().status(), GameStatus::Lost);
    }

    #[test]
    fn test_session_reset_and_new_game() {
        let session = GameSession::new(GameConfig::default().with_size(2, 3).with_seed(9)).unwrap();
        assert_eq!(session.snapshot().tiles().len(), 6);
        assert_eq!(session.new_game().tiles().len(), 6);
        assert_eq!(session.reset().tiles().len(), 36);
    }

    #[test]
    fn test_resume_rejects_invalid_state() {
        let state = GameState::from_layout(1, 3, &[TileKind::Star, TileKind::Circle, TileKind::Square]).unwrap();
        let mut json: serde_json::Value = serde_json::from_str(&state.to_json().unwrap()).unwrap();
        json["score"] = serde_json::json!(60);
        let broken: GameState = serde_json::from_value(json).unwrap();
        assert!(GameSession::resume(GameConfig::default(), broken).is_err());
    }
}
