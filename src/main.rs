//! 可执行文件入口（用于测试和调试）
//!
//! 用法：`sanyi-engine [config.toml]`，按提示自动对局直到结束

use env_logger::Env;
use log::info;

use sanyi_engine::{apply_game_over, first_move, BoardEngine, GameConfig, GameError, GameState, GameStatus};

fn render(state: &GameState) -> String {
    let mut out = String::new();
    for row in 0..state.rows() {
        for col in 0..state.cols() {
            let cell = match state.tile_at(row, col) {
                Some(tile) if tile.is_active() => &tile.kind.name()[..2],
                _ => "..",
            };
            out.push_str(cell);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<(), GameError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::from_toml(path)?,
        None => GameConfig::default(),
    };
    info!("config: {:?}", config);

    let mut engine = BoardEngine::with_config(config)?;
    let mut state = apply_game_over(&engine.deal());
    println!("{}", render(&state));

    while !state.is_game_over() {
        let Some(ids) = first_move(&state) else {
            break;
        };
        for id in ids {
            state = engine.select_tile(&state, id);
        }
        state = apply_game_over(&state);
    }

    println!("{}", render(&state));
    match state.status() {
        GameStatus::Won => println!("清空棋盘！步数 {}，得分 {}", state.moves(), state.score()),
        GameStatus::Lost => println!(
            "无可消除组合，剩余 {} 个方块，步数 {}，得分 {}",
            state.remaining_count(),
            state.moves(),
            state.score()
        ),
        GameStatus::InProgress => println!("对局未结束"),
    }
    Ok(())
}
