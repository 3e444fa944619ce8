use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::engine::hint;
use crate::game::game_engine::{self, GameError};
use crate::game::state::GameState;
use crate::tile::{TileId, TileKind};

pub(crate) fn to_py_err(err: GameError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

fn parse_tile_id(tile_id: &str) -> PyResult<TileId> {
    tile_id.parse::<TileId>().map_err(to_py_err)
}

/// Python 绑定的游戏状态
///
/// 状态转换返回新的对象，原对象保持不变
#[allow(non_local_definitions)] // PyO3 宏生成的 impl 定义
#[pyclass]
#[derive(Clone)]
pub struct PyGameState {
    pub(crate) inner: GameState,
}

#[pymethods]
impl PyGameState {
    /// 按固定图案布局创建状态
    ///
    /// # 参数
    ///
    /// - `rows`, `cols`: 棋盘尺寸
    /// - `kinds`: 行优先顺序的图案名称列表（如 "star"、"moon"）
    #[staticmethod]
    fn from_layout(rows: u32, cols: u32, kinds: Vec<String>) -> PyResult<Self> {
        let kinds = kinds
            .iter()
            .map(|name| name.parse::<TileKind>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(to_py_err)?;
        let inner = GameState::from_layout(rows, cols, &kinds).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// 从 JSON 恢复状态
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let inner = GameState::from_json(json).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn score(&self) -> u32 {
        self.inner.score()
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.inner.moves()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    #[getter]
    fn won(&self) -> bool {
        self.inner.is_won()
    }

    #[getter]
    fn rows(&self) -> u32 {
        self.inner.rows()
    }

    #[getter]
    fn cols(&self) -> u32 {
        self.inner.cols()
    }

    /// 选中的方块 ID 列表
    #[getter]
    fn selected_tiles(&self) -> Vec<String> {
        self.inner.selected_tiles().iter().map(|id| id.to_string()).collect()
    }

    /// 全部方块（字典列表：id, type, row, col, isRemoved）
    #[getter]
    fn tiles(&self, py: Python) -> PyResult<PyObject> {
        let list = PyList::empty(py);
        for tile in self.inner.tiles() {
            let dict = PyDict::new(py);
            dict.set_item("id", tile.id.to_string())?;
            dict.set_item("type", tile.kind.name())?;
            dict.set_item("row", tile.row)?;
            dict.set_item("col", tile.col)?;
            dict.set_item("isRemoved", tile.removed)?;
            list.append(dict)?;
        }
        Ok(list.into())
    }

    /// 选中一个方块，返回新的状态
    fn select_tile(&self, tile_id: &str) -> PyResult<Self> {
        let id = parse_tile_id(tile_id)?;
        Ok(Self {
            inner: game_engine::select_tile(&self.inner, id),
        })
    }

    /// 所有可消除的组合
    fn available_moves(&self) -> Vec<Vec<String>> {
        hint::available_moves(&self.inner)
            .iter()
            .map(|m| m.iter().map(|id| id.to_string()).collect())
            .collect()
    }

    /// 是否已无可消除组合（只查询，不写回）
    fn check_game_over(&self) -> bool {
        hint::check_game_over(&self.inner)
    }

    /// 写回失败判定后的新状态
    fn apply_game_over(&self) -> Self {
        Self {
            inner: game_engine::apply_game_over(&self.inner),
        }
    }

    fn to_json(&self) -> PyResult<String> {
        self.inner.to_json().map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        format!(
            "GameState(rows={}, cols={}, remaining={}, score={}, moves={}, status={:?})",
            self.inner.rows(),
            self.inner.cols(),
            self.inner.remaining_count(),
            self.inner.score(),
            self.inner.moves(),
            self.inner.status()
        )
    }
}
