use leptos::*;
use wasm_bindgen::JsCast;

use accomap_frontend::{load_config, MapWidget};

const MOUNT_ELEMENT_ID: &str = "map-widget";

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("Start accommodation map widget");
    let mount: web_sys::HtmlElement = document()
        .get_element_by_id(MOUNT_ELEMENT_ID)
        .expect("map widget mount element")
        .dyn_into()
        .expect("HtmlElement");
    let config = match load_config(&mount) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Invalid widget configuration: {err}");
            return;
        }
    };
    mount_to(mount, move || view! { <MapWidget config /> });
}
