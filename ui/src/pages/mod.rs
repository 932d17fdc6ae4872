pub mod about;
pub mod contact;
pub mod home;
pub mod projects;

/// Renders one route view to HTML on the host, with the bundled site content
/// in context.
#[cfg(test)]
pub(crate) fn render(view: impl FnOnce() -> leptos::prelude::AnyView) -> String {
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;
    use leptos_meta::provide_meta_context;

    let owner = Owner::new();
    owner.with(|| {
        provide_meta_context();
        provide_context(crate::config::site().unwrap());
        view().to_html()
    })
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::routes::Page;

    fn section_ids(html: &str) -> Vec<&'static str> {
        ["home", "about", "projects", "contact"]
            .into_iter()
            .filter(|id| html.contains(&format!("id=\"{id}\"")))
            .collect()
    }

    #[test]
    fn each_page_renders_its_own_section_only() {
        let expected = [
            (Page::Home, "home"),
            (Page::About, "about"),
            (Page::Projects, "projects"),
            (Page::Contact, "contact"),
        ];
        for (page, id) in expected {
            let html = render(|| page.view());
            assert_eq!(section_ids(&html), [id], "{page:?}");
        }
    }

    #[test]
    fn home_links_to_projects_and_about() {
        let html = render(|| Page::Home.view());
        assert!(html.contains("href=\"/projects\""));
        assert!(html.contains("href=\"/about\""));
        assert!(html.contains("👋 歡迎光臨！"));
    }

    #[test]
    fn about_lists_sections_and_skills() {
        let html = render(|| Page::About.view());
        assert!(html.contains("我的背景"));
        assert!(html.contains("設計理念與目標"));
        assert_eq!(html.matches("<li").count(), 4);
    }
}
