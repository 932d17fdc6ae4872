use leptos::prelude::*;

use crate::app::use_site;

#[component]
pub fn Logo() -> impl IntoView {
    let site = use_site();

    view! {
        <a href="/" class="flex items-center gap-3 hover:opacity-90 transition">
            <div
                class="w-12 h-12 rounded-2xl flex items-center justify-center text-white font-extrabold"
                style=site.theme.primary_fill()
            >
                {site.owner.monogram.as_str()}
            </div>
            <div>
                <div class="font-bold text-lg text-gray-800">{site.owner.name.as_str()}</div>
                <div class="text-xs text-gray-500">{site.owner.tagline.as_str()}</div>
            </div>
        </a>
    }
}
