/// 游戏常量定义
///
/// 集中管理所有魔法数字

/// 默认行数（重置游戏时使用）
pub const DEFAULT_ROWS: u32 = 6;

/// 默认列数（重置游戏时使用）
pub const DEFAULT_COLS: u32 = 6;

/// 一次消除需要选中的方块数
pub const MATCH_SIZE: usize = 3;

/// 每消除一组得分
pub const POINTS_PER_MATCH: u32 = 30;
