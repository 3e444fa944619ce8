//! Python 绑定模块
//!
//! 提供 PyO3 接口，把棋盘引擎暴露给 Python 表现层

// 允许 PyO3 宏生成的 non-local impl 定义（这是 PyO3 的正常行为）
#![allow(non_local_definitions)]

#[cfg(feature = "python")]
pub mod game_state;
#[cfg(feature = "python")]
pub mod game_engine;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
use crate::python::game_state::{to_py_err, PyGameState};

/// 初始化游戏
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(signature = (rows=6, cols=6, seed=None))]
fn initialize_game(rows: u32, cols: u32, seed: Option<u64>) -> PyResult<PyGameState> {
    use rand::SeedableRng;

    let inner = match seed {
        Some(seed) => {
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            crate::game::game_engine::initialize_with_rng(rows, cols, &mut rng)
        }
        None => crate::game::game_engine::initialize(rows, cols),
    }
    .map_err(to_py_err)?;
    Ok(PyGameState { inner })
}

/// 重置游戏（6×6）
#[cfg(feature = "python")]
#[pyfunction]
fn reset_game() -> PyGameState {
    PyGameState {
        inner: crate::game::game_engine::reset(),
    }
}

/// Python 模块初始化
#[cfg(feature = "python")]
#[pymodule]
fn sanyi_engine(_py: Python, m: &PyModule) -> PyResult<()> {
    use game_engine::PyBoardEngine;

    m.add_class::<PyGameState>()?;
    m.add_class::<PyBoardEngine>()?;
    m.add_function(pyo3::wrap_pyfunction!(initialize_game, m)?)?;
    m.add_function(pyo3::wrap_pyfunction!(reset_game, m)?)?;
    Ok(())
}
