/// 方块相关模块
///
/// 包含方块（Tile）、图案（TileKind）、方块 ID 和发牌器（Dealer）

pub mod tile;
pub mod deal;

pub use tile::{Tile, TileId, TileKind};
pub use deal::Dealer;
