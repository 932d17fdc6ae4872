// ui/src/routes.rs
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::pages::{about::About, contact::Contact, home::Home, projects::Projects};
use crate::theme::Motion;
use crate::transition::{Cue, Transition};

/// Where unmatched paths are sent.
pub const FALLBACK: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Projects,
    Contact,
}

/// Outcome of matching a location path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    Page(Page),
    Redirect(&'static str),
}

impl Page {
    /// Nav order.
    pub const ALL: [Page; 4] = [Page::Home, Page::About, Page::Projects, Page::Contact];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Projects => "/projects",
            Page::Contact => "/contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "首頁",
            Page::About => "關於我",
            Page::Projects => "作品集",
            Page::Contact => "聯絡",
        }
    }

    pub fn view(self) -> AnyView {
        match self {
            Page::Home => view! { <Home/> }.into_any(),
            Page::About => view! { <About/> }.into_any(),
            Page::Projects => view! { <Projects/> }.into_any(),
            Page::Contact => view! { <Contact/> }.into_any(),
        }
    }
}

/// Matches the four known paths, ignoring ASCII case and one trailing slash;
/// everything else goes home.
pub fn resolve(path: &str) -> Resolved {
    let path = match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    };
    Page::ALL
        .into_iter()
        .find(|page| page.path().eq_ignore_ascii_case(path))
        .map_or(Resolved::Redirect(FALLBACK), Resolved::Page)
}

/// Reacts to a new location: unmatched paths are replaced in history with
/// the fallback, matched ones are handed to `show`.
pub fn follow_path<N>(path: &str, navigate: &N, show: impl FnOnce(Page))
where
    N: Fn(&str, NavigateOptions),
{
    match resolve(path) {
        Resolved::Redirect(to) => {
            log::debug!("no view for {path:?}, redirecting to {to}");
            navigate(
                to,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
        Resolved::Page(page) => show(page),
    }
}

/// Waits out `cue`, settles the stage and keeps going while settling starts
/// another timed phase.
fn schedule(stage: RwSignal<Transition<Page>>, cue: Option<Cue>) {
    let Some(cue) = cue else { return };
    Timeout::new(cue.after_ms, move || {
        // stage is gone once the wrapper unmounts
        let next = stage.try_update(|s| s.settle(cue.epoch)).flatten();
        schedule(stage, next);
    })
    .forget();
}

/// Picks the view for the current location and sequences exit/enter between
/// consecutive views.
#[component]
pub fn ContentWrapper() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let stage = RwSignal::new(Transition::<Page>::new(
        Motion::PAGE_ENTER.duration_ms,
        Motion::PAGE_EXIT.duration_ms,
    ));

    Effect::new(move |_| {
        let path = location.pathname.get();
        follow_path(&path, &navigate, |page| {
            let cue = stage.try_update(|s| s.request(page)).flatten();
            schedule(stage, cue);
        });
    });

    // only changes on a swap, so phase updates don't rebuild the view
    let shown = Memo::new(move |_| stage.with(|s| s.current()));
    let class = move || stage.with(|s| s.phase().class());

    Effect::new(move |prev: Option<Option<Page>>| {
        let now = shown.get();
        if let (Some(Some(_)), Some(page)) = (prev, now) {
            log::debug!("showing {page:?}");
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
        now
    });

    view! {
        <div class=class>
            { move || shown.get().map(Page::view) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn known_paths_resolve_to_their_page() {
        assert_eq!(resolve("/"), Resolved::Page(Page::Home));
        assert_eq!(resolve("/about"), Resolved::Page(Page::About));
        assert_eq!(resolve("/projects"), Resolved::Page(Page::Projects));
        assert_eq!(resolve("/contact"), Resolved::Page(Page::Contact));
    }

    #[test]
    fn every_page_path_round_trips() {
        for page in Page::ALL {
            assert_eq!(resolve(page.path()), Resolved::Page(page));
        }
    }

    #[test]
    fn trailing_slash_and_case_are_ignored() {
        assert_eq!(resolve("/about/"), Resolved::Page(Page::About));
        assert_eq!(resolve("/About"), Resolved::Page(Page::About));
        assert_eq!(resolve("/projects/"), Resolved::Page(Page::Projects));
        assert_eq!(resolve("/CONTACT"), Resolved::Page(Page::Contact));
        assert_eq!(resolve("/Contact/"), Resolved::Page(Page::Contact));
    }

    #[test]
    fn unknown_paths_redirect_home() {
        for path in [
            "/unknown",
            "",
            "/about//",
            "/projects/1",
            "/contact?x=1",
            "/home",
        ] {
            assert_eq!(resolve(path), Resolved::Redirect("/"), "{path:?}");
        }
    }

    fn follow(path: &str) -> (Vec<(String, bool)>, Vec<Page>) {
        let navigations = RefCell::new(Vec::new());
        let mut shown = Vec::new();
        let navigate = |to: &str, opts: NavigateOptions| {
            navigations.borrow_mut().push((to.to_owned(), opts.replace));
        };
        follow_path(path, &navigate, |page| shown.push(page));
        (navigations.into_inner(), shown)
    }

    #[test]
    fn unknown_path_is_replaced_with_home() {
        let (navigations, shown) = follow("/unknown");
        assert_eq!(navigations, [("/".to_owned(), true)]);
        assert!(shown.is_empty());
    }

    #[test]
    fn known_path_is_shown_without_navigating() {
        let (navigations, shown) = follow("/projects");
        assert!(navigations.is_empty());
        assert_eq!(shown, [Page::Projects]);
    }

    #[test]
    fn nav_order_and_labels() {
        let labels: Vec<_> = Page::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, ["首頁", "關於我", "作品集", "聯絡"]);
    }
}
