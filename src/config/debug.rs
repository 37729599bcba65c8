//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep noisy ones `false` by default.
//! Every flag is further gated by `cfg(debug_assertions)` at the call site.

pub struct DebugFlags {
    /// Emit UI interaction logs (navigation, button clicks, slider moves).
    pub print_ui_interactions: bool,
    /// Emit per-platform results of every budget redistribution.
    pub print_budget_allocation: bool,
    /// Emit details of key/value reads and writes.
    pub print_state_serde: bool,
    /// Emit activation state transitions.
    pub print_activation: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_budget_allocation: false,
    print_state_serde: false,
    print_activation: true,
    print_shutdown: false,
};
