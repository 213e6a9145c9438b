use crate::analyze::api::check_connection;
use crate::env_variable_utils::ENDPOINTS;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(ConnectionCheckPage)]
pub fn connection_check_page() -> Html {
    let result = use_state(|| None::<Result<u16, String>>);
    let checking = use_state(|| false);

    let start_check = {
        let result = result.clone();
        let checking = checking.clone();
        move || {
            let result = result.clone();
            let checking = checking.clone();
            checking.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = check_connection().await;
                if let Err(e) = &outcome {
                    log::warn!("connection check failed: {e}");
                }
                result.set(Some(outcome));
                checking.set(false);
            });
        }
    };

    // Check once on mount
    {
        let start_check = start_check.clone();
        use_effect_with((), move |_| {
            start_check();
            || ()
        });
    }

    let on_retry = Callback::from(move |_: MouseEvent| start_check());

    let status = match (*checking, &*result) {
        (true, _) | (false, None) => html! {
            <p class="text-gray-600">{"Memeriksa koneksi..."}</p>
        },
        (false, Some(Ok(status))) => html! {
            <p class="text-green-700 font-medium">{ format!("Backend terhubung (HTTP {status})") }</p>
        },
        (false, Some(Err(e))) => html! {
            <p class="text-red-600 font-medium">{ format!("Backend tidak dapat dihubungi: {e}") }</p>
        },
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-sky-50 via-indigo-50 to-fuchsia-50 p-4">
            <div class="bg-white p-8 rounded-xl shadow max-w-md w-full space-y-4">
                <h1 class="text-2xl font-bold text-gray-800">{"Cek Koneksi Backend"}</h1>
                <p class="text-sm text-gray-500 break-all">{ ENDPOINTS.connection_check() }</p>
                { status }
                <button
                    onclick={on_retry}
                    disabled={*checking}
                    class="rounded-md bg-indigo-600 hover:bg-indigo-700 text-white font-semibold px-4 py-2 disabled:opacity-60"
                >
                    {"Periksa lagi"}
                </button>
                <div>
                    <Link<Route> to={Route::Home} classes="text-sm text-gray-500 hover:text-gray-700">
                        {"← Kembali ke analisa"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
