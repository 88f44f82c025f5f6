use portfolio_ui::app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("mounting portfolio ui");
    leptos::mount::mount_to_body(App);
}
