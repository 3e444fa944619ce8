/// 查询与会话模块
///
/// 包含提示搜索（可消除组合枚举、失败判定）和按对局串行化调用的会话

pub mod hint;
pub mod session;

pub use hint::{available_moves, check_game_over, first_move, has_available_move, Move};
pub use session::GameSession;
