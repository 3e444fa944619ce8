use crate::game::constants::MATCH_SIZE;
use crate::game::rules::kinds_pairwise_distinct;
use crate::game::state::GameState;
use crate::tile::{Tile, TileId};
use crate::utils::KindMask;

/// 一组可消除的方块 ID
pub type Move = [TileId; MATCH_SIZE];

/// 获取所有可消除的方块组合（用于提示功能）
///
/// 在未消除的方块序列上枚举所有 i < j < k 的三元组，保留图案两两不同的组合，
/// 顺序即标准组合顺序。复杂度 O(n³)，只适用于几百个方块以内的棋盘。
pub fn available_moves(state: &GameState) -> Vec<Move> {
    let active: Vec<&Tile> = state.remaining_tiles().collect();
    let mut moves = Vec::new();
    for_each_move(&active, |m| {
        moves.push(m);
        true
    });
    moves
}

/// 第一组可消除的方块（与 `available_moves` 的首个元素相同），找到即停止
pub fn first_move(state: &GameState) -> Option<Move> {
    let active: Vec<&Tile> = state.remaining_tiles().collect();
    let mut found = None;
    for_each_move(&active, |m| {
        found = Some(m);
        false
    });
    found
}

/// 是否还有可消除的组合
///
/// 按图案计数：至少 3 种图案各剩一个以上即可，O(n)，
/// 结果与 `!available_moves(state).is_empty()` 一致
pub fn has_available_move(state: &GameState) -> bool {
    KindMask::from_tiles(state.tiles()).can_form_match()
}

/// 检查游戏是否无法继续
///
/// 没有可消除组合且尚未获胜时返回 `true`。棋盘清空时 won 已为 true，
/// 不算失败。只做查询，不修改 gameOver。
pub fn check_game_over(state: &GameState) -> bool {
    !state.is_won() && !has_available_move(state)
}

/// 按组合顺序遍历所有可消除三元组，回调返回 false 时提前结束
fn for_each_move<F>(active: &[&Tile], mut visit: F)
where
    F: FnMut(Move) -> bool,
{
    let n = active.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if active[i].kind == active[j].kind {
                continue;
            }
            for k in (j + 1)..n {
                if kinds_pairwise_distinct(active[i].kind, active[j].kind, active[k].kind)
                    && !visit([active[i].id, active[j].id, active[k].id])
                {
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::game_engine::remove_tiles;
    use crate::tile::TileKind;

    fn id(seq: u32) -> TileId {
        TileId::new(seq)
    }

    fn layout(kinds: &[TileKind]) -> GameState {
        GameState::from_layout(1, kinds.len() as u32, kinds).unwrap()
    }

    #[test]
    fn test_moves_in_combination_order() {
        let state = layout(&[TileKind::Star, TileKind::Circle, TileKind::Square, TileKind::Star]);
        let moves = available_moves(&state);
        assert_eq!(
            moves,
            vec![[id(0), id(1), id(2)], [id(1), id(2), id(3)]]
        );
        assert_eq!(first_move(&state), Some([id(0), id(1), id(2)]));
    }

    #[test]
    fn test_moves_skip_removed() {
        let state = layout(&[
            TileKind::Star,
            TileKind::Circle,
            TileKind::Square,
            TileKind::Moon,
            TileKind::Moon,
            TileKind::Heart,
        ]);
        let state = remove_tiles(&state, &[id(0), id(1), id(2)]);
        assert!(available_moves(&state).is_empty());
        assert_eq!(first_move(&state), None);
        assert!(!has_available_move(&state));
        assert!(check_game_over(&state));
    }

    #[test]
    fn test_fewer_than_three_tiles() {
        let state = layout(&[TileKind::Star, TileKind::Circle]);
        assert!(available_moves(&state).is_empty());
        assert!(check_game_over(&state));
    }

    #[test]
    fn test_full_distinct_board_count() {
        // 8 种图案各一个：C(8,3) = 56 组
        let state = layout(&TileKind::ALL);
        assert_eq!(available_moves(&state).len(), 56);
        assert!(has_available_move(&state));
        assert!(!check_game_over(&state));
    }

    #[test]
    fn test_won_is_not_game_over() {
        let state = layout(&[TileKind::Star, TileKind::Circle, TileKind::Square]);
        let won = remove_tiles(&state, &[id(0), id(1), id(2)]);
        assert!(won.is_won());
        assert!(available_moves(&won).is_empty());
        assert!(!check_game_over(&won));
    }
}
