pub mod config_dirs;
pub mod keybinds;
pub mod settings;

// Re-export commonly used types/functions for convenience
pub use config_dirs::{ensure_dirs_exist, project_config_dir, settings_path, user_cache_dir};
pub use keybinds::{Action, KeyBindings, KeySpec};
pub use settings::{load_settings, load_settings_from, save_settings, save_settings_to, Settings};
