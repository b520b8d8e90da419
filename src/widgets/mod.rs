pub mod avatar;
pub mod counter;
pub mod effects;
pub mod matrix;
pub mod menu;
pub mod navigation;
pub mod preview;
pub mod scroll_lock;
pub mod terminal;
