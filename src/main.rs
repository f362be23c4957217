//! Browser entry point: installs logging and mounts the root component.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Debug).is_err() {
            leptos::logging::warn!("console logger already installed");
        }
        log::info!("nuber eats web client starting");
        leptos::mount::mount_to_body(nuber_eats_web::app::App);
    }
}
