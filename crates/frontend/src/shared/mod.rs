pub mod api_utils;
pub mod format;
pub mod gateway;
pub mod icons;
pub mod navigation;
pub mod state;
pub mod theme;
pub mod toast;

#[cfg(test)]
pub mod testing;
