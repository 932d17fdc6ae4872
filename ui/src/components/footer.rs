use chrono::Datelike;
use leptos::prelude::*;

use crate::app::use_site;

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site();
    let year = chrono::Local::now().year();

    view! {
        <footer class="text-center p-6 text-sm text-gray-500">
            {format!("© {year} {}", site.footer.credit)}
        </footer>
    }
}
