/// 游戏逻辑模块
///
/// 包含游戏状态、消除规则、配置和状态转换

pub mod constants;
pub mod state;
pub mod rules;
pub mod config;
pub mod game_engine;
