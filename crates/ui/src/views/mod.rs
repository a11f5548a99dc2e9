mod components;
mod finder;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use components::{Controls, LoadingScreen, TileGrid, TypeChips};
pub use finder::FinderView;
