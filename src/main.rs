use leptos::prelude::*;

use gametracker::app::App;
use gametracker::config::GatewayConfig;

fn main() {
    console_error_panic_hook::set_once();

    // Missing gateway settings are a fatal startup condition.
    let config = match GatewayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::error!("startup aborted: {e}");
            panic!("startup aborted: {e}");
        }
    };

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
