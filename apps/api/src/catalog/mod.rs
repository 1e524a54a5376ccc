// Static reference data: per-model prompting guidance and per-tone
// style modifiers. Both catalogs are built once at startup and injected
// via AppState — no ambient globals, lookups never fail.

pub mod guidance;
pub mod tone;

pub use guidance::GuidanceCatalog;
pub use tone::ToneCatalog;
