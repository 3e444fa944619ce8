use sanyi_engine::{select_tile, select_tile_with_outcome, GameState, SelectOutcome, TileId, TileKind};

fn id(seq: u32) -> TileId {
    TileId::new(seq)
}

fn board() -> GameState {
    GameState::from_layout(
        2,
        3,
        &[
            TileKind::Star,
            TileKind::Star,
            TileKind::Circle,
            TileKind::Square,
            TileKind::Moon,
            TileKind::Heart,
        ],
    )
    .unwrap()
}

/// 连续两次选中同一个方块，选中列表恢复原样
#[test]
fn test_toggle_law() {
    let start = board();
    let one = select_tile(&start, id(0));

    for seq in 1..6 {
        let selected = select_tile(&one, id(seq));
        let toggled = select_tile(&selected, id(seq));
        assert_eq!(toggled.selected_tiles(), one.selected_tiles());
        assert_eq!(toggled, one);
    }

    let back = select_tile(&one, id(0));
    assert_eq!(back, start);
}

/// 取消选中保持其余选中顺序
#[test]
fn test_deselect_keeps_order() {
    let s = select_tile(&board(), id(3));
    let s = select_tile(&s, id(0));
    let s = select_tile(&s, id(3));
    assert_eq!(s.selected_tiles(), &[id(0)]);
}

/// 选中顺序即点击顺序
#[test]
fn test_selection_order() {
    let s = select_tile(&board(), id(4));
    let s = select_tile(&s, id(1));
    assert_eq!(s.selected_tiles(), &[id(4), id(1)]);
}

/// 已选满 3 个时再选第 4 个，不发生任何变化
#[test]
fn test_full_selection_ignores_fourth() {
    let mut json: serde_json::Value = serde_json::from_str(&board().to_json().unwrap()).unwrap();
    json["selectedTiles"] = serde_json::json!(["tile-0", "tile-1", "tile-2"]);
    let full = GameState::from_json(&json.to_string()).unwrap();

    let (next, outcome) = select_tile_with_outcome(&full, id(5));
    assert_eq!(outcome, SelectOutcome::Ignored);
    assert_eq!(next.selected_tiles(), full.selected_tiles());
    assert_eq!(next, full);

    // 已选中的方块仍可以取消
    let (next, outcome) = select_tile_with_outcome(&full, id(1));
    assert_eq!(outcome, SelectOutcome::Deselected);
    assert_eq!(next.selected_tiles(), &[id(0), id(2)]);
}

/// 不存在的 ID 不会报错，它参与的三元组不会被消除
#[test]
fn test_unknown_id_poisons_triple() {
    let s = select_tile(&board(), id(2));
    let s = select_tile(&s, id(3));
    let (s, outcome) = select_tile_with_outcome(&s, id(999));
    assert_eq!(outcome, SelectOutcome::Mismatched { ids: [id(2), id(3), id(999)] });
    assert!(s.selected_tiles().is_empty());
    assert_eq!(s.moves(), 0);
    assert_eq!(s.remaining_count(), 6);
}

/// 选中操作不修改输入状态
#[test]
fn test_selection_never_mutates_input() {
    let start = board();
    let before = start.clone();
    let s = select_tile(&start, id(2));
    let s = select_tile(&s, id(3));
    let after_match = select_tile(&s, id(4));

    assert_eq!(start, before);
    assert_eq!(s.selected_tiles(), &[id(2), id(3)]);
    assert_eq!(after_match.moves(), 1);
}
