use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::use_site;
use crate::config::ContactCopy;
use crate::routes::Page;

const FIELD_CLASS: &str =
    "p-3 rounded-md border border-gray-300 focus:outline-none focus:ring-2 focus:ring-[var(--teal)]";

/// Inputs on the contact form, top to bottom. Values are never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn placeholder(self, copy: &ContactCopy) -> &str {
        match self {
            ContactField::Name => &copy.name,
            ContactField::Email => &copy.email,
            ContactField::Message => &copy.message,
        }
    }

    /// `Some(rows)` for the multi-line field.
    pub fn rows(self) -> Option<u32> {
        match self {
            ContactField::Message => Some(4),
            ContactField::Name | ContactField::Email => None,
        }
    }

    fn view(self, copy: &'static ContactCopy) -> AnyView {
        let placeholder = self.placeholder(copy);
        match self.rows() {
            Some(rows) => view! { <textarea placeholder=placeholder rows=rows.to_string() class=FIELD_CLASS></textarea> }.into_any(),
            None => view! { <input placeholder=placeholder class=FIELD_CLASS/> }.into_any(),
        }
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let site = use_site();
    let copy = &site.contact;

    view! {
      <Title text=Page::Contact.label()/>
      <section id="contact" class="max-w-3xl mx-auto mt-12 p-6 card">
        <h2 class="text-2xl font-bold text-[var(--accent)]">{copy.heading.as_str()}</h2>
        <p class="mt-2 text-sm text-gray-600">{copy.blurb.as_str()}</p>

        // TODO: wire a submit handler once there is somewhere to send messages
        <form class="mt-6 grid gap-4" on:submit=|ev| ev.prevent_default()>
          {ContactField::ALL.into_iter().map(|field| field.view(copy)).collect_view()}
          <button type="button" class="btn text-white" style=site.theme.primary_fill()>
            {copy.submit.as_str()}
          </button>
        </form>
      </section>
    }
}
