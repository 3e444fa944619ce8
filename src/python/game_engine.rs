use pyo3::prelude::*;

use crate::game::config::GameConfig;
use crate::game::game_engine::BoardEngine;
use crate::python::game_state::{to_py_err, PyGameState};
use crate::tile::TileId;

/// Python 绑定的棋盘引擎
#[pyclass]
pub struct PyBoardEngine {
    inner: BoardEngine,
}

#[pymethods]
impl PyBoardEngine {
    /// 创建引擎
    ///
    /// # 参数
    ///
    /// - `rows`, `cols`: 棋盘尺寸（默认 6×6）
    /// - `seed`: 随机种子（可选，用于复现发牌）
    /// - `auto_game_over`: 是否在选中后自动判定失败
    #[new]
    #[pyo3(signature = (rows=6, cols=6, seed=None, auto_game_over=false))]
    pub fn new(rows: u32, cols: u32, seed: Option<u64>, auto_game_over: bool) -> PyResult<Self> {
        let config = GameConfig {
            rows,
            cols,
            seed,
            auto_game_over,
        };
        let inner = BoardEngine::with_config(config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// 按配置尺寸发牌
    pub fn deal(&mut self) -> PyGameState {
        PyGameState {
            inner: self.inner.deal(),
        }
    }

    /// 重置为 6×6 新局
    pub fn reset(&mut self) -> PyGameState {
        PyGameState {
            inner: self.inner.reset(),
        }
    }

    /// 选中一个方块（受 auto_game_over 配置影响）
    pub fn select_tile(&self, state: &PyGameState, tile_id: &str) -> PyResult<PyGameState> {
        let id = tile_id.parse::<TileId>().map_err(to_py_err)?;
        Ok(PyGameState {
            inner: self.inner.select_tile(&state.inner, id),
        })
    }
}
