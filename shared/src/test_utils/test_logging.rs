use env_logger::Builder;
use log::LevelFilter;
use std::sync::Once;

static INIT: Once = Once::new();

/// Verbosity used when LOG_LEVEL is unset or unrecognized
pub const DEFAULT_TEST_LEVEL: LevelFilter = LevelFilter::Error;

/// Initialize test logging once per test binary.
///
/// Output stays at error level unless LOG_LEVEL asks for more, e.g.
/// `LOG_LEVEL=debug cargo test`.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let level = level_from(std::env::var("LOG_LEVEL").ok().as_deref());
        Builder::from_default_env()
            .filter_level(level)
            .is_test(true)
            .init();
    });
}

pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(DEFAULT_TEST_LEVEL)
}
