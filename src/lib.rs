/// 三异连连看棋盘引擎
///
/// 规则：选中三个图案互不相同的方块即可消去。
/// 引擎是纯粹的状态转换：每次操作接收一个状态、返回新的状态，渲染和输入由表现层负责。

pub mod tile;
pub mod utils;
pub mod game;
pub mod engine;

// 重新导出常用类型
pub use tile::{Dealer, Tile, TileId, TileKind};
pub use utils::KindMask;
pub use game::config::GameConfig;
pub use game::constants::{DEFAULT_COLS, DEFAULT_ROWS, MATCH_SIZE, POINTS_PER_MATCH};
pub use game::state::{GameState, GameStatus};
pub use game::rules::can_remove;
pub use game::game_engine::{
    apply_game_over, initialize, initialize_with_rng, reset, select_tile,
    select_tile_with_outcome, BoardEngine, GameError, SelectOutcome,
};
pub use engine::hint::{available_moves, check_game_over, first_move, has_available_move, Move};
pub use engine::session::GameSession;

// Python 绑定模块
#[cfg(feature = "python")]
pub mod python;
