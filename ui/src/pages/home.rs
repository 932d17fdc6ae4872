use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::use_site;
use crate::routes::Page;

#[component]
pub fn Home() -> impl IntoView {
    let site = use_site();
    let home = &site.home;

    view! {
      <Title text=Page::Home.label()/>
      <section id="home" class="max-w-5xl mx-auto mt-12 grid md:grid-cols-2 gap-10 items-center">
        <div>
          <h1 class="text-5xl font-extrabold leading-tight text-[var(--warm1)]">
            {home.greeting.as_str()} " "
            <span class="text-[var(--accent)]">{site.owner.name.as_str()}</span>
          </h1>
          <p class="mt-4 text-lg text-gray-600 leading-relaxed">
            {home.intro.join("\n")}
          </p>

          <div class="mt-8 flex gap-4">
            <a href=Page::Projects.path() class="btn text-white" style=site.theme.primary_fill()>
              {home.primary_cta.as_str()}
            </a>
            <a href=Page::About.path() class="btn border border-[var(--accent)] text-[var(--accent)] bg-white">
              {home.secondary_cta.as_str()}
            </a>
          </div>
        </div>

        <div class="w-full h-80 card overflow-hidden relative transition-transform grow">
          <div class="absolute inset-0 bg-gradient-to-br from-[var(--accent)]/20 to-[var(--teal)]/20 wobble"></div>
          <div class="absolute inset-0 flex items-center justify-center text-4xl font-bold text-[var(--teal)]">
            {home.welcome.as_str()}
          </div>
        </div>
      </section>
    }
}
