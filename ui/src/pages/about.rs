use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::use_site;
use crate::config::AboutSection;
use crate::routes::Page;

#[component]
fn SectionCard(section: &'static AboutSection) -> impl IntoView {
    view! {
        <div class="card p-6 hover:shadow-lg transition-shadow">
            <h3 class="font-semibold text-[var(--warm1)] mb-2 text-lg">{section.title.as_str()}</h3>
            <p class="text-gray-700 text-base leading-relaxed">{section.body.join("\n")}</p>
        </div>
    }
}

#[component]
pub fn About() -> impl IntoView {
    let about = &use_site().about;

    view! {
      <Title text=Page::About.label()/>
      <section id="about" class="max-w-5xl mx-auto mt-12">
        <h2 class="text-4xl font-bold text-[var(--teal)] mb-6">{about.heading.as_str()}</h2>
        <div class="grid md:grid-cols-2 gap-8 items-start">
          {about.sections.iter().map(|section| view! { <SectionCard section/> }).collect_view()}

          <div class="md:col-span-2 card p-6 hover:shadow-lg transition-shadow">
            <h3 class="font-semibold text-[var(--warm1)] mb-3 text-lg">{about.skills_title.as_str()}</h3>
            <ul class="text-gray-700 grid sm:grid-cols-2 gap-1 text-sm">
              {about.skills.iter().map(|skill| view! { <li>"• " {skill.as_str()}</li> }).collect_view()}
            </ul>
          </div>
        </div>
      </section>
    }
}
