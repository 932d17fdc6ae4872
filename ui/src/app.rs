use leptos::prelude::*;
use leptos_meta::Title;
use leptos_meta::provide_meta_context;
use leptos_router::components::Router;

use crate::components::{footer::Footer, logo::Logo, nav::Nav};
use crate::config::SiteConfig;
use crate::routes::ContentWrapper;

/// Site content provided by [`App`]. Panics outside of it.
pub fn use_site() -> &'static SiteConfig {
    expect_context::<&'static SiteConfig>()
}

#[component]
pub fn App(site: &'static SiteConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(site);

    let owner = site.owner.name.as_str();
    let css = site.theme.global_css();

    view! {
      <Title formatter=move |page: String| format!("{page} | {owner}")/>
      <Router>
        <div class="min-h-screen font-sans bg-[var(--neutral)] text-gray-800">
          <style>{css}</style>

          <header class="p-6 flex items-center justify-between sticky top-0 z-50 bg-white/70 backdrop-blur-md shadow-sm">
            <Logo/>
            <Nav/>
          </header>

          <main class="px-6 pb-20 min-h-[70vh]" style=site.theme.subtle_fill()>
            <ContentWrapper/>
          </main>

          <Footer/>
        </div>
      </Router>
    }
}

/// Mounted instead of [`App`] when the bundled site content fails to load.
#[component]
pub fn BootError(message: String) -> impl IntoView {
    view! {
      <div class="max-w-md mx-auto mt-24 bg-red-50 border border-red-200 rounded-lg p-6 shadow-sm text-red-800">
        <h2 class="text-xl font-semibold mb-2">"Site content failed to load"</h2>
        <pre class="whitespace-pre-wrap text-sm">{message}</pre>
      </div>
    }
}
