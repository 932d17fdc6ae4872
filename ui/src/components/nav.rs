use leptos::prelude::*;

use crate::routes::Page;

/// Open/closed state of the narrow-viewport dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuToggle(bool);

impl MenuToggle {
    pub fn is_open(self) -> bool {
        self.0
    }

    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }

    pub fn button_label(self) -> &'static str {
        if self.0 { "關閉選單" } else { "開啟選單" }
    }
}

#[component]
pub fn NavLink(page: Page) -> impl IntoView {
    view! {
        <a href=page.path() class="relative group text-gray-700 font-medium">
            <span class="group-hover:text-[var(--teal)] transition-colors">{page.label()}</span>
            <span class="absolute left-0 -bottom-1 h-[2px] w-0 group-hover:w-full bg-[var(--teal)] transition-all duration-300"></span>
        </a>
    }
}

fn nav_links() -> impl IntoView {
    Page::ALL
        .into_iter()
        .map(|page| view! { <NavLink page/> })
        .collect_view()
}

#[component]
fn MenuIcon() -> impl IntoView {
    view! {
        <svg class="w-5 h-5" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" d="M4 6h16M4 12h16M4 18h16"/>
        </svg>
    }
}

#[component]
fn CloseIcon() -> impl IntoView {
    view! {
        <svg class="w-5 h-5" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" d="M18 6L6 18M6 6l12 12"/>
        </svg>
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    let menu = RwSignal::new(MenuToggle::default());

    view! {
        <nav>
            <div class="hidden md:flex gap-4 items-center">
                {nav_links()}
            </div>

            <div class="md:hidden">
                <button
                    class="p-2 rounded-xl border border-gray-300 bg-white shadow-sm"
                    aria-expanded=move || menu.get().is_open().to_string()
                    aria-label=move || menu.get().button_label()
                    on:click=move |_| menu.update(MenuToggle::toggle)
                >
                    {move || if menu.get().is_open() {
                        view! { <CloseIcon/> }.into_any()
                    } else {
                        view! { <MenuIcon/> }.into_any()
                    }}
                </button>
                <Show when=move || menu.get().is_open()>
                    <div class="absolute right-4 mt-3 p-4 w-48 card glass menu-enter">
                        <div class="flex flex-col gap-3">
                            {nav_links()}
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let menu = MenuToggle::default();
        assert!(!menu.is_open());
        assert_eq!(menu.button_label(), "開啟選單");
    }

    #[test]
    fn parity_of_toggles_decides_visibility() {
        let mut menu = MenuToggle::default();
        for n in 1..=7 {
            menu.toggle();
            assert_eq!(menu.is_open(), n % 2 == 1, "after {n} toggles");
        }
        menu.toggle();
        assert!(!menu.is_open());
        assert_eq!(menu.button_label(), "開啟選單");
    }

    #[test]
    fn renders_every_link_once_while_closed() {
        let html = crate::pages::render(|| view! { <Nav/> }.into_any());
        for page in Page::ALL {
            let href = format!("href=\"{}\"", page.path());
            assert_eq!(html.matches(&href).count(), 1, "{href}");
        }
        assert!(!html.contains("menu-enter"));
        assert!(html.contains("aria-expanded=\"false\""));
    }
}
