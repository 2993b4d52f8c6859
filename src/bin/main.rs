use log::{info, warn};
use reel_core::carousel::CarouselConfig;
use reel_web::{
    page::{carousel, contact, frame, projects, reveal},
    platform::{dom, logger},
};

#[path = "main/config.rs"]
mod config;
#[path = "main/mount.rs"]
mod mount;

fn main() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    if logger::init_logger(config::log_level()).is_err() {
        warn!("boot: logger already installed");
    }
    info!("boot: reel starting");

    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            warn!("boot: no document: {:?}", err);
            return;
        }
    };

    let mut mounted = 0u8;
    mounted += u8::from(mount::keep(
        "hero",
        carousel::mount_hero(&document, CarouselConfig::hero(), config::allowed_origins()),
    ));
    mounted += u8::from(mount::keep("season", carousel::mount_season(&document)));
    mounted += u8::from(mount::keep(
        "frame gate",
        frame::mount_frame_gate(&document, config::FRAME_TARGET_ORIGIN),
    ));
    mounted += u8::from(mount::keep(
        "reveals",
        reveal::mount_reveals(&document).map(Some),
    ));
    mounted += u8::from(mount::keep("contact", contact::mount_contact(&document)));
    mounted += u8::from(mount::keep(
        "project details",
        projects::mount_project_details(&document),
    ));

    frame::fill_footer_year(&document);
    info!("boot: {} features mounted", mounted);
}
