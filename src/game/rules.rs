use crate::game::constants::MATCH_SIZE;
use crate::game::state::GameState;
use crate::tile::{TileId, TileKind};

/// 检查三个图案是否两两不同
pub fn kinds_pairwise_distinct(a: TileKind, b: TileKind, c: TileKind) -> bool {
    a != b && b != c && a != c
}

/// 检查是否满足消除条件
///
/// # 参数
///
/// - `state`: 游戏状态
/// - `ids`: 选中的方块 ID
///
/// # 返回
///
/// 恰好 3 个 ID、都能对应到未消除的方块，且三个图案互不相同时返回 `true`。
/// 找不到的 ID 没有图案，它参与的三元组永远不能消除。
pub fn can_remove(state: &GameState, ids: &[TileId]) -> bool {
    if ids.len() != MATCH_SIZE {
        return false;
    }

    let mut kinds = [TileKind::Star; MATCH_SIZE];
    for (slot, id) in kinds.iter_mut().zip(ids) {
        match state.tile(*id) {
            Some(tile) if tile.is_active() => *slot = tile.kind,
            _ => return false,
        }
    }

    kinds_pairwise_distinct(kinds[0], kinds[1], kinds[2])
}
