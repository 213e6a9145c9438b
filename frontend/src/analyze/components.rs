use crate::analyze::form_options::{PlatformSelect, RegionSelect};
use konten_analysis::{AnalysisReport, CriteriaSet, Criterion, FormInput, Region};
use web_sys::HtmlInputElement;
use yew::prelude::*;

const INPUT_CLASS: &str =
    "w-full rounded-md border-gray-300 focus:border-indigo-500 focus:ring-indigo-500";

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub label: String,
    pub placeholder: String,
    pub value: String,
    pub disabled: bool,
    pub on_input: Callback<String>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let on_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            on_input.emit(input_value);
        })
    };

    html! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-1">{ &props.label }</label>
            <input
                type="text"
                class={INPUT_CLASS}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                oninput={on_input}
                disabled={props.disabled}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub error_message: Option<String>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    if let Some(msg) = &props.error_message {
        html! {
            <p class="text-red-600 text-sm">{ msg }</p>
        }
    } else {
        html! {}
    }
}

#[derive(Properties, PartialEq)]
pub struct AnalyzerFormProps {
    pub form: FormInput,
    pub loading: bool,
    pub error: Option<String>,
    pub on_change: Callback<FormInput>,
    pub on_submit: Callback<()>,
}

// Emits a copy of the form with one field replaced.
fn field_callback(
    props: &AnalyzerFormProps,
    apply: fn(&mut FormInput, String),
) -> Callback<String> {
    let form = props.form.clone();
    let on_change = props.on_change.clone();
    Callback::from(move |value: String| {
        let mut next = form.clone();
        apply(&mut next, value);
        on_change.emit(next);
    })
}

#[function_component(AnalyzerForm)]
pub fn analyzer_form(props: &AnalyzerFormProps) -> Html {
    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_region_change = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |region: Region| {
            on_change.emit(FormInput {
                region,
                ..form.clone()
            });
        })
    };

    html! {
        <form onsubmit={on_submit} class="bg-white/80 backdrop-blur rounded-xl shadow p-6 space-y-4 border border-white">
            <TextField
                label="Topik/Ide Video"
                placeholder="contoh: Cara riset kata kunci YouTube"
                value={props.form.topic.clone()}
                disabled={props.loading}
                on_input={field_callback(props, |f, v| f.topic = v)}
            />
            <TextField
                label="Kata Kunci (pisahkan dengan koma)"
                placeholder="contoh: riset keyword, youtube seo, tools gratis"
                value={props.form.keywords.clone()}
                disabled={props.loading}
                on_input={field_callback(props, |f, v| f.keywords = v)}
            />

            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <TextField
                    label="Niche"
                    placeholder="misal: edukasi, gaming, finance"
                    value={props.form.niche.clone()}
                    disabled={props.loading}
                    on_input={field_callback(props, |f, v| f.niche = v)}
                />
                <TextField
                    label="Audiens Target"
                    placeholder="misal: pemula, UMKM, pro"
                    value={props.form.audience.clone()}
                    disabled={props.loading}
                    on_input={field_callback(props, |f, v| f.audience = v)}
                />
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <PlatformSelect
                    platform={props.form.platform.clone()}
                    disabled={props.loading}
                    on_change={field_callback(props, |f, v| f.platform = v)}
                />
                <RegionSelect
                    region={props.form.region}
                    disabled={props.loading}
                    on_change={on_region_change}
                />
            </div>

            <button
                type="submit"
                disabled={props.loading}
                class="w-full inline-flex items-center justify-center gap-2 rounded-md bg-indigo-600 hover:bg-indigo-700 text-white font-semibold py-2.5 shadow disabled:opacity-60"
            >
                { if props.loading { "Menganalisa..." } else { "Analisa Sekarang" } }
            </button>
            <ErrorMessage error_message={props.error.clone()} />
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub ok: bool,
    pub label: String,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    let (box_class, dot_class) = if props.ok {
        ("bg-green-50 text-green-700 border-green-200", "bg-green-500")
    } else {
        ("bg-red-50 text-red-700 border-red-200", "bg-red-500")
    };

    html! {
        <div class={format!("flex items-center gap-2 px-3 py-2 rounded-md text-sm border {box_class}")}>
            <span class={format!("inline-flex h-2.5 w-2.5 rounded-full {dot_class}")} />
            { &props.label }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CriteriaGridProps {
    pub criteria: CriteriaSet,
}

#[function_component(CriteriaGrid)]
pub fn criteria_grid(props: &CriteriaGridProps) -> Html {
    html! {
        <div>
            <div class="flex items-center justify-between mb-2">
                <h3 class="text-sm uppercase tracking-wide text-gray-500">{"Kriteria Kelayakan"}</h3>
                <span class="text-sm text-gray-600">
                    { format!("{}/{} terpenuhi", props.criteria.passed(), Criterion::ALL.len()) }
                </span>
            </div>
            <div class="grid sm:grid-cols-2 gap-2">
                { for props.criteria.iter().map(|(criterion, ok)| html! {
                    <Badge ok={ok} label={criterion.label()} />
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ReportFieldProps {
    title: String,
    value: String,
    #[prop_or(true)]
    emphasized: bool,
}

#[function_component(ReportField)]
fn report_field(props: &ReportFieldProps) -> Html {
    let text_class = if props.emphasized {
        "text-gray-900 font-medium"
    } else {
        "text-gray-700"
    };

    html! {
        <div>
            <h3 class="text-sm uppercase tracking-wide text-gray-500">{ &props.title }</h3>
            <p class={text_class}>{ &props.value }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ReportPanelProps {
    pub report: Option<AnalysisReport>,
}

#[function_component(ReportPanel)]
pub fn report_panel(props: &ReportPanelProps) -> Html {
    let Some(report) = &props.report else {
        return html! {
            <div class="bg-white/80 backdrop-blur rounded-xl shadow p-6 border border-white">
                <div class="h-full flex items-center justify-center text-gray-500 text-center p-8">
                    {"Hasil akan tampil di sini setelah dianalisa."}
                </div>
            </div>
        };
    };

    let score = report.display_score();

    html! {
        <div class="bg-white/80 backdrop-blur rounded-xl shadow p-6 border border-white">
            <div class="space-y-6">
                <div>
                    <div class="flex items-center justify-between">
                        <h2 class="text-xl font-semibold text-gray-800">{"Ringkasan"}</h2>
                        <div class="text-sm text-gray-600">
                            {"Skor Kelayakan: "}
                            <span class="font-bold text-indigo-700">{ format!("{score}%") }</span>
                        </div>
                    </div>
                    <div class="w-full bg-gray-100 rounded-full h-2 mt-2">
                        <div class="bg-indigo-600 h-2 rounded-full" style={format!("width: {score}%")} />
                    </div>
                </div>

                <div class="grid md:grid-cols-2 gap-4">
                    <div class="space-y-3">
                        <ReportField title="Hook" value={report.hook.clone()} />
                        <ReportField title="Judul SEO" value={report.seo_title.clone()} />
                        <ReportField title="Angle/Format" value={report.angle.clone()} />
                        <ReportField title="CTA" value={report.cta.clone()} />
                    </div>
                    <div class="space-y-3">
                        <ReportField title="Deskripsi" value={report.description.clone()} emphasized={false} />
                        <div>
                            <h3 class="text-sm uppercase tracking-wide text-gray-500">{"Hashtag"}</h3>
                            <div class="flex flex-wrap gap-2 mt-1">
                                { for report.hashtags.iter().map(|hashtag| html! {
                                    <span class="px-2 py-1 bg-indigo-50 text-indigo-700 rounded text-sm">{ hashtag }</span>
                                })}
                            </div>
                        </div>
                        <ReportField title="Rekomendasi Jam Posting" value={report.post_time.clone()} />
                    </div>
                </div>

                <CriteriaGrid criteria={report.criteria} />

                <div class="bg-amber-50 text-amber-800 border border-amber-200 p-4 rounded-md text-sm">
                    {"Tips: Uji 3 variasi hook dan 2 judul. Simpan judul dengan kata kunci terdepan, jaga deskripsi tetap ringkas dan fokus manfaat."}
                </div>
            </div>
        </div>
    }
}
