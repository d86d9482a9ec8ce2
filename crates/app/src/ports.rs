//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod settings_page;
pub mod settings_sink;
pub mod timer;
pub mod trigger_control;

pub use settings_page::SettingsPage;
pub use settings_sink::SettingsSink;
pub use timer::Timer;
pub use trigger_control::TriggerControl;
