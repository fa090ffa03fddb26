pub mod menu;
pub mod misc;
pub mod notes;

pub use menu::run_menu;
pub use misc::handle_completions;
pub use notes::{handle_add, handle_edit, handle_list, handle_remove, handle_show};
