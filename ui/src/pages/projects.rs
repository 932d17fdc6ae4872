use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::use_site;
use crate::config::Project;
use crate::routes::Page;

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="p-5 card hover:shadow-xl transition lift">
            <h3 class="font-bold text-[var(--teal)]">{project.title.as_str()}</h3>
            <p class="mt-2 text-sm text-gray-600">{project.description.as_str()}</p>
        </article>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let projects = &use_site().projects;

    view! {
      <Title text=Page::Projects.label()/>
      <section id="projects" class="max-w-5xl mx-auto mt-12">
        <h2 class="text-3xl font-bold text-[var(--warm1)] mb-6">{projects.heading.as_str()}</h2>
        <div class="grid md:grid-cols-3 gap-6">
          <For
            each=move || projects.items.iter()
            key=|p| p.title.clone()
            children=|project| view! { <ProjectCard project/> }
          />
        </div>
      </section>
    }
}

#[cfg(test)]
mod tests {
    use crate::pages::render;
    use crate::routes::Page;

    #[test]
    fn renders_three_cards_in_order() {
        let html = render(|| Page::Projects.view());
        assert_eq!(html.matches("<article").count(), 3);

        let at = |title: &str| html.find(title).unwrap_or_else(|| panic!("missing {title}"));
        assert!(at("互動名片") < at("展示牆"));
        assert!(at("展示牆") < at("創意小工具"));
        for description in ["個性化、可點擊的動態介紹頁", "網頁式作品集，融合動畫與過場", "集合實用與趣味的微型專案"] {
            assert!(html.contains(description), "missing {description}");
        }
    }
}
