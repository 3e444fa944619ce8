use std::path::Path;

use crate::game::constants::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::game::game_engine::GameError;

/// 引擎配置
///
/// 所有字段都有默认值，TOML 中可以只写需要覆盖的部分：
///
/// ```toml
/// rows = 4
/// cols = 9
/// seed = 2024
/// auto_game_over = true
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// 棋盘行数
    pub rows: u32,
    /// 棋盘列数
    pub cols: u32,
    /// 固定随机种子；为空时使用系统熵源
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// 选中后是否由引擎自行判定"无可消除组合"并写入 gameOver
    ///
    /// 默认关闭：此时只有清空棋盘会结束对局，失败判定由调用方通过
    /// `check_game_over` 查询后自行写回
    pub auto_game_over: bool,
}

impl GameConfig {
    /// 从 TOML 文件加载配置
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| GameError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&contents)
    }

    /// 从 TOML 字符串解析配置
    pub fn from_toml_str(contents: &str) -> Result<Self, GameError> {
        let cfg: Self = toml::from_str(contents).map_err(|e| GameError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// 校验棋盘尺寸
    pub fn validate(&self) -> Result<(), GameError> {
        if self.rows == 0 || self.cols == 0 || self.rows.checked_mul(self.cols).is_none() {
            return Err(GameError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_size(mut self, rows: u32, cols: u32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_auto_game_over(mut self, enabled: bool) -> Self {
        self.auto_game_over = enabled;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: None,
            auto_game_over: false,
        }
    }
}
