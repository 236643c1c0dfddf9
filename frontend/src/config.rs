use crate::components::button::{FontSize, StyleOverride};
use crate::content::{Author, Section, AUTHOR, DONATE_URL, SUPPORT_SECTIONS};
use crate::reveal::RevealPolicy;

/// Enter/leave animation durations for the reveal wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub enter_ms: u32,
    pub leave_ms: u32,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            enter_ms: 800,
            leave_ms: 200,
        }
    }
}

/// Colour tokens for the page background and headings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub gradient_from: &'static str,
    pub gradient_via: &'static str,
    pub gradient_to: &'static str,
    pub heading_from: &'static str,
    pub heading_to: &'static str,
}

impl Theme {
    pub const SKY: Theme = Theme {
        gradient_from: "#60a5fa",
        gradient_via: "#3b82f6",
        gradient_to: "#facc15",
        heading_from: "#ffffff",
        heading_to: "#bfdbfe",
    };

    pub const DUSK: Theme = Theme {
        gradient_from: "#1e3a8a",
        gradient_via: "#1d4ed8",
        gradient_to: "#ca8a04",
        heading_from: "#fef9c3",
        heading_to: "#93c5fd",
    };

    pub fn background(&self) -> String {
        format!(
            "linear-gradient(to right, {}, {}, {})",
            self.gradient_from, self.gradient_via, self.gradient_to
        )
    }

    pub fn heading(&self) -> String {
        format!(
            "linear-gradient(to bottom right, {}, {})",
            self.heading_from, self.heading_to
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub reveal: RevealPolicy,
    pub transition: Transition,
    pub theme: Theme,
    pub sections: &'static [Section],
    pub donate_url: &'static str,
    pub donate_button: StyleOverride,
    pub author: Author,
}

impl PageConfig {
    /// Card appears as soon as the page mounts.
    pub fn on_mount() -> Self {
        Self {
            reveal: RevealPolicy::OnMount,
            transition: Transition::default(),
            theme: Theme::SKY,
            sections: SUPPORT_SECTIONS,
            donate_url: DONATE_URL,
            donate_button: StyleOverride::default(),
            author: AUTHOR,
        }
    }

    /// Card appears half a second after mount.
    pub fn delayed() -> Self {
        Self {
            reveal: RevealPolicy::After(500),
            theme: Theme::DUSK,
            donate_button: StyleOverride {
                font_size: Some(FontSize::Lg),
            },
            ..Self::on_mount()
        }
    }
}

#[cfg(not(feature = "delayed-reveal"))]
pub fn active_page() -> PageConfig {
    PageConfig::on_mount()
}

#[cfg(feature = "delayed-reveal")]
pub fn active_page() -> PageConfig {
    PageConfig::delayed()
}
