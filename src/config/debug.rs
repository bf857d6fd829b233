//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so the
//! log stays quiet. Every use site is further gated by `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit UI interaction logs (tab switches, input edits, button presses).
    pub print_ui_interactions: bool,
    /// Emit every label returned by the models for single-sample predictions.
    pub print_predictions: bool,
    /// Emit per-upload details (headers, row counts, label counts).
    pub print_uploads: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: false,
    print_predictions: false,
    print_uploads: false,
    print_state_serde: false,
    print_shutdown: false,
};
