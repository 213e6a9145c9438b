use crate::analyze::api::{handle_error, request_analysis};
use crate::analyze::components::{AnalyzerForm, ReportPanel};
use crate::connection::ConnectionCheckPage;
use crate::env_variable_utils::get_app_name;
use konten_analysis::{FormInput, Resolution, Workflow};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/test")]
    ConnectionCheck,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <AnalyzerApp /> },
        Route::ConnectionCheck => html! { <ConnectionCheckPage /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-700">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Halaman tidak ditemukan"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Kembali ke analisa"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

#[function_component(AnalyzerApp)]
pub fn analyzer_app() -> Html {
    let form = use_state(FormInput::default);
    // Lives outside use_state so async tasks always see the latest request id
    let workflow = use_mut_ref(Workflow::new);
    let rerender = use_force_update();

    let on_change = {
        let form = form.clone();
        Callback::from(move |next: FormInput| form.set(next))
    };

    let on_submit = {
        let form = form.clone();
        let workflow = workflow.clone();
        let rerender = rerender.clone();

        Callback::from(move |_: ()| {
            if workflow.borrow().is_submitting() {
                return;
            }

            let request = form.to_request();
            let id = workflow.borrow_mut().begin();
            rerender.force_update();

            let workflow = workflow.clone();
            let rerender = rerender.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = request_analysis(&request).await;
                if let Err(e) = &outcome {
                    handle_error(e);
                }
                if workflow.borrow_mut().resolve(id, outcome) == Resolution::Applied {
                    rerender.force_update();
                }
            });
        })
    };

    let (loading, report, error) = {
        let workflow = workflow.borrow();
        (
            workflow.is_submitting(),
            workflow.report().cloned(),
            workflow.error().map(str::to_string),
        )
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-sky-50 via-indigo-50 to-fuchsia-50 py-12">
            <div class="max-w-6xl mx-auto px-4">
                <header class="text-center mb-10">
                    <h1 class="text-3xl md:text-4xl font-bold text-gray-800">{ get_app_name() }</h1>
                    <p class="text-gray-600 mt-2">
                        {"Dapatkan judul ramah SEO, hook kuat, angle eksekusi, CTA, deskripsi, hashtag, jam posting, dan skor kelayakan otomatis."}
                    </p>
                </header>

                <div class="grid md:grid-cols-2 gap-6">
                    <div class="space-y-2">
                        <AnalyzerForm
                            form={(*form).clone()}
                            loading={loading}
                            error={error}
                            on_change={on_change}
                            on_submit={on_submit}
                        />
                        <Link<Route> to={Route::ConnectionCheck} classes="inline-block text-sm text-gray-500 hover:text-gray-700">
                            {"Cek koneksi backend"}
                        </Link<Route>>
                    </div>
                    <ReportPanel report={report} />
                </div>
            </div>
        </div>
    }
}
