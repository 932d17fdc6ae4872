//! Palette, gradients and motion tokens, plus the global stylesheet built from them.
//!
//! Everything here is computed once when the site config loads and then shared
//! by reference. Components only ever read `var(--name)` custom properties or the
//! precomputed gradient strings.

use std::fmt::Write;

use serde::Deserialize;

/// The five named colors, each a `#RRGGBB` string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Palette {
    pub warm1: String,
    pub warm2: String,
    pub neutral: String,
    pub accent: String,
    pub teal: String,
}

impl Palette {
    /// `(custom property name, value)` in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("warm1", self.warm1.as_str()),
            ("warm2", self.warm2.as_str()),
            ("neutral", self.neutral.as_str()),
            ("accent", self.accent.as_str()),
            ("teal", self.teal.as_str()),
        ]
    }
}

pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradients {
    /// Buttons, the logo tile, call-to-action links.
    pub primary: String,
    pub subtle: String,
}

impl Gradients {
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            primary: format!("linear-gradient(135deg, {}, {})", p.warm1, p.accent),
            subtle: format!("linear-gradient(180deg, {}, #fff)", p.neutral),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub palette: Palette,
    pub gradients: Gradients,
}

impl Theme {
    pub fn new(palette: Palette) -> Self {
        let gradients = Gradients::from_palette(&palette);
        Self { palette, gradients }
    }

    /// Inline style for anything painted with the primary gradient.
    pub fn primary_fill(&self) -> String {
        format!("background: {};", self.gradients.primary)
    }

    /// Inline style for the page body behind the route views.
    pub fn subtle_fill(&self) -> String {
        format!("background: {};", self.gradients.subtle)
    }

    /// The document-wide stylesheet: custom properties, the reusable
    /// `glass` / `btn` / `card` classes and the animation keyframes.
    pub fn global_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.palette.entries() {
            let _ = writeln!(css, "  --{name}: {value};");
        }
        css.push_str("}\n");

        css.push_str(
            ".glass { backdrop-filter: blur(12px); background: rgba(255,255,255,0.5); }\n\
             .btn { padding: 0.6rem 1rem; border-radius: 14px; font-weight: 600; transition: all 0.3s ease; }\n\
             .btn:hover { transform: translateY(-2px) scale(1.02); box-shadow: 0 6px 12px rgba(0,0,0,0.1); }\n\
             .card { border-radius: 20px; box-shadow: 0 8px 24px rgba(0,0,0,0.06); background: #fff; }\n",
        );

        Motion::PAGE_ENTER.write_fade_in(&mut css, "page-in", "page-enter");
        Motion::PAGE_EXIT.write_fade_out(&mut css, "page-out", "page-exit");
        Motion::MENU_ENTER.write_fade_in(&mut css, "menu-in", "menu-enter");

        css.push_str(
            "@keyframes wobble { 0%, 100% { transform: rotate(0deg); } 33% { transform: rotate(2deg); } 66% { transform: rotate(-2deg); } }\n\
             .wobble { animation: wobble 6s ease-in-out infinite; }\n\
             .lift:hover { transform: translateY(-6px); }\n\
             .grow:hover { transform: scale(1.03); }\n\
             @media (prefers-reduced-motion: reduce) {\n  \
               .page-enter, .page-exit, .menu-enter, .wobble { animation: none; }\n\
             }\n",
        );

        css
    }
}

/// One eased fade with a vertical offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    pub duration_ms: u32,
    pub easing: &'static str,
    /// Where the fade-in starts, or where the fade-out ends.
    pub offset_px: i32,
}

impl Motion {
    pub const PAGE_ENTER: Motion = Motion {
        duration_ms: 600,
        easing: "ease-in-out",
        offset_px: 20,
    };

    pub const PAGE_EXIT: Motion = Motion {
        duration_ms: 600,
        easing: "ease-in-out",
        offset_px: -20,
    };

    /// Mobile dropdown reveal.
    pub const MENU_ENTER: Motion = Motion {
        duration_ms: 300,
        easing: "ease-out",
        offset_px: -10,
    };

    pub fn seconds(&self) -> f32 {
        self.duration_ms as f32 / 1000.0
    }

    fn write_fade_in(&self, css: &mut String, keyframes: &str, class: &str) {
        let _ = writeln!(
            css,
            "@keyframes {keyframes} {{ from {{ opacity: 0; transform: translateY({}px); }} to {{ opacity: 1; transform: translateY(0); }} }}",
            self.offset_px
        );
        self.write_class(css, keyframes, class);
    }

    fn write_fade_out(&self, css: &mut String, keyframes: &str, class: &str) {
        let _ = writeln!(
            css,
            "@keyframes {keyframes} {{ from {{ opacity: 1; transform: translateY(0); }} to {{ opacity: 0; transform: translateY({}px); }} }}",
            self.offset_px
        );
        self.write_class(css, keyframes, class);
    }

    fn write_class(&self, css: &mut String, keyframes: &str, class: &str) {
        let _ = writeln!(
            css,
            ".{class} {{ animation: {keyframes} {}s {} both; }}",
            self.seconds(),
            self.easing
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette {
            warm1: "#D68A7A".into(),
            warm2: "#E7BE8E".into(),
            neutral: "#F9F8F4".into(),
            accent: "#BFA8E1".into(),
            teal: "#64979C".into(),
        }
    }

    #[test]
    fn hex_colors() {
        assert!(is_hex_color("#64979C"));
        assert!(is_hex_color("#abcdef"));
        assert!(!is_hex_color("64979C"));
        assert!(!is_hex_color("#6497"));
        assert!(!is_hex_color("#64979G"));
        assert!(!is_hex_color("#64979C0"));
    }

    #[test]
    fn gradients_follow_palette() {
        let theme = Theme::new(palette());
        assert_eq!(
            theme.gradients.primary,
            "linear-gradient(135deg, #D68A7A, #BFA8E1)"
        );
        assert_eq!(theme.gradients.subtle, "linear-gradient(180deg, #F9F8F4, #fff)");
        assert_eq!(
            theme.primary_fill(),
            "background: linear-gradient(135deg, #D68A7A, #BFA8E1);"
        );
        assert_eq!(
            theme.subtle_fill(),
            "background: linear-gradient(180deg, #F9F8F4, #fff);"
        );
    }

    #[test]
    fn stylesheet_declares_every_custom_property() {
        let css = Theme::new(palette()).global_css();
        for line in [
            "--warm1: #D68A7A;",
            "--warm2: #E7BE8E;",
            "--neutral: #F9F8F4;",
            "--accent: #BFA8E1;",
            "--teal: #64979C;",
        ] {
            assert!(css.contains(line), "missing {line}");
        }
        for class in [".glass {", ".btn {", ".btn:hover {", ".card {"] {
            assert!(css.contains(class), "missing {class}");
        }
    }

    #[test]
    fn page_keyframes_use_page_motion() {
        let css = Theme::new(palette()).global_css();
        assert!(css.contains(".page-enter { animation: page-in 0.6s ease-in-out both; }"));
        assert!(css.contains(".page-exit { animation: page-out 0.6s ease-in-out both; }"));
        assert!(css.contains("translateY(20px)"));
        assert!(css.contains("translateY(-20px)"));
        assert!(css.contains("prefers-reduced-motion"));
    }

    #[test]
    fn menu_drops_in_from_above() {
        let css = Theme::new(palette()).global_css();
        assert!(css.contains(
            "@keyframes menu-in { from { opacity: 0; transform: translateY(-10px); }"
        ));
        assert!(css.contains(".menu-enter { animation: menu-in 0.3s ease-out both; }"));
    }
}
