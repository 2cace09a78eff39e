/// Presentation-only collection target for a jar.
///
/// The schema has no per-jar goal column yet; every jar is displayed against
/// this fixed target until a configurable goal lands. Known simplification,
/// not a bug.
pub const DEFAULT_TARGET_AMOUNT: f64 = 100.0;

/// Storage key for the stashed recipient form draft.
pub const RECIPIENT_DRAFT_KEY: &str = "coinjar_recipient_form_data";
