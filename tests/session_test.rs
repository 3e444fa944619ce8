use std::sync::Arc;
use std::thread;

use sanyi_engine::{GameConfig, GameSession, GameState, GameStatus, TileId, TileKind, POINTS_PER_MATCH};

/// 多线程同时点击同一局：调用被串行化，状态始终满足不变量
#[test]
fn test_concurrent_clicks_serialized() {
    let session = Arc::new(GameSession::new(GameConfig::default().with_seed(17)).unwrap());
    let mut handles = vec![];

    for t in 0..4u32 {
        let session = Arc::clone(&session);
        handles.push(thread::spawn(move || {
            for i in 0..100u32 {
                let (state, _) = session.select(TileId::new((t * 7 + i * 5) % 36));
                state.validate().unwrap();
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let state = session.snapshot();
    state.validate().unwrap();
    assert_eq!(state.tiles().len(), 36);
    assert_eq!(state.score(), POINTS_PER_MATCH * state.moves());
}

/// 会话按提示对局，每步后写回失败判定
#[test]
fn test_session_hint_loop() {
    let session = GameSession::new(GameConfig::default().with_size(3, 6).with_seed(8)).unwrap();
    while !session.refresh_game_over() {
        let ids = session.hint().unwrap();
        for id in ids {
            session.select(id);
        }
    }
    assert_ne!(session.snapshot().status(), GameStatus::InProgress);
}

/// 恢复的会话沿用原有状态
#[test]
fn test_session_resume() {
    let state = GameState::from_layout(1, 6, &[
        TileKind::Star,
        TileKind::Circle,
        TileKind::Square,
        TileKind::Moon,
        TileKind::Moon,
        TileKind::Moon,
    ])
    .unwrap();
    let session = GameSession::resume(GameConfig::default(), state.clone()).unwrap();
    assert_eq!(session.snapshot(), state);

    session.select_str("tile-0").unwrap();
    session.select_str("tile-1").unwrap();
    session.select_str("tile-5").unwrap();
    let after = session.snapshot();
    assert_eq!(after.moves(), 1);
    assert!(!after.is_game_over());
    assert!(session.refresh_game_over());
}
