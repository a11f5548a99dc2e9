mod chip_vm;
mod tile_vm;
mod type_style;

pub use chip_vm::{TypeChipVm, map_type_chips};
pub use tile_vm::{SEARCH_BASE_URL, TileVm, build_tile, map_tiles, search_url};
pub use type_style::{UNKNOWN_TYPE_COLOR, type_background, type_color, type_icon_url};
