pub mod path_validator;

pub use path_validator::PathValidator;

/// Set by `--verbose`; gated `[VERBOSE]` lines go to stderr while it is present.
pub const VERBOSE_ENV: &str = "TAURI_BUMP_VERBOSE";

pub fn verbose_enabled() -> bool {
    std::env::var_os(VERBOSE_ENV).is_some()
}
