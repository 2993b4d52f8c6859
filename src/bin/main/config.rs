use log::LevelFilter;
use reel_core::messages::OriginAllowList;

/// Comma-separated origins allowed to drive the hero over `postMessage`.
const ALLOWED_ORIGINS: Option<&str> = option_env!("REEL_ALLOWED_ORIGINS");
/// Origin the landing page posts to. Defaults to the page's own origin.
pub(super) const FRAME_TARGET_ORIGIN: Option<&str> = option_env!("REEL_FRAME_TARGET_ORIGIN");
const LOG_DEBUG: Option<&str> = option_env!("REEL_LOG_DEBUG");

pub(super) fn log_level() -> LevelFilter {
    match LOG_DEBUG {
        Some(value) if !value.is_empty() && value != "0" => LevelFilter::Debug,
        _ => LevelFilter::Info,
    }
}

pub(super) fn allowed_origins() -> OriginAllowList<'static> {
    ALLOWED_ORIGINS.map_or_else(OriginAllowList::new, OriginAllowList::from_csv)
}
