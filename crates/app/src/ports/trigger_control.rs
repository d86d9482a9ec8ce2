//! Trigger control port — the button that starts a save.

/// The user-facing control that triggers a save.
///
/// Methods take `&self`: UI handles such as DOM elements are mutated through
/// shared references.
pub trait TriggerControl {
    /// Enable or disable user interaction.
    fn set_enabled(&self, enabled: bool);

    /// Replace the visible label.
    fn set_label(&self, label: &str);
}

impl<T: TriggerControl> TriggerControl for &T {
    fn set_enabled(&self, enabled: bool) {
        (**self).set_enabled(enabled);
    }

    fn set_label(&self, label: &str) {
        (**self).set_label(label);
    }
}
