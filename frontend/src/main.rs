mod analyze;
mod connection;
mod env_variable_utils;
mod router;

use crate::env_variable_utils::{get_app_name, is_debug_mode, ENDPOINTS};
use crate::router::{switch, Route};
use konten_analysis::log_level;
use web_sys::console;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log_level(is_debug_mode())));
    yew::Renderer::<App>::new().render();

    console::log_1(
        &format!(
            "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
            get_app_name(),
            ENDPOINTS.base(),
            is_debug_mode()
        )
        .into(),
    );
}
