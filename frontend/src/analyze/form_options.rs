use js_sys::Reflect;
use konten_analysis::{Platform, Region};
use wasm_bindgen::JsValue;
use web_sys::Event;
use yew::{function_component, html, Callback, Html, Properties};

// Helper to read "value" from any event target without HtmlSelectElement.
fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    let js_value = Reflect::get(target.as_ref(), &JsValue::from_str("value")).ok()?;
    js_value.as_string()
}

const SELECT_CLASS: &str =
    "w-full rounded-md border-gray-300 focus:border-indigo-500 focus:ring-indigo-500";

#[derive(Properties, PartialEq)]
pub struct PlatformSelectProps {
    /// Raw value; normalization happens when the request is built.
    pub platform: String,
    pub disabled: bool,
    pub on_change: Callback<String>,
}

#[function_component(PlatformSelect)]
pub fn platform_select(props: &PlatformSelectProps) -> Html {
    let on_change_cb = props.on_change.clone();
    let on_change = Callback::from(move |e: Event| {
        if let Some(value) = event_value(&e) {
            on_change_cb.emit(value);
        }
    });

    html! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-1">{"Platform"}</label>
            <select class={SELECT_CLASS} onchange={on_change} disabled={props.disabled}>
                {
                    for Platform::all_variants().into_iter().map(|platform| html! {
                        <option value={platform.key()} selected={platform.key() == props.platform}>
                            { platform.display_name() }
                        </option>
                    })
                }
            </select>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RegionSelectProps {
    pub region: Region,
    pub disabled: bool,
    pub on_change: Callback<Region>,
}

#[function_component(RegionSelect)]
pub fn region_select(props: &RegionSelectProps) -> Html {
    let on_change_cb = props.on_change.clone();
    let on_change = Callback::from(move |e: Event| {
        if let Some(region) = event_value(&e).as_deref().and_then(Region::from_key) {
            on_change_cb.emit(region);
        }
    });

    html! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-1">{"Zona Waktu"}</label>
            <select class={SELECT_CLASS} onchange={on_change} disabled={props.disabled}>
                {
                    for Region::all_variants().into_iter().map(|region| html! {
                        <option value={region.key()} selected={region == props.region}>
                            { region.key() }
                        </option>
                    })
                }
            </select>
        </div>
    }
}
