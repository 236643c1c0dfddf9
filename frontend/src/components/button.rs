use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FontSize {
    #[default]
    Md,
    Lg,
    Xl,
}

impl FontSize {
    pub fn css(&self) -> &'static str {
        match self {
            FontSize::Md => "1rem",
            FontSize::Lg => "1.125rem",
            FontSize::Xl => "1.25rem",
        }
    }
}

/// Per-field adjustments to a button's default style. Unset fields keep the default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct StyleOverride {
    pub font_size: Option<FontSize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ButtonStyle {
    pub font_size: FontSize,
}

impl ButtonStyle {
    pub fn apply(self, overrides: &StyleOverride) -> Self {
        Self {
            font_size: overrides.font_size.unwrap_or(self.font_size),
        }
    }

    pub fn css(&self) -> String {
        format!("font-size: {};", self.font_size.css())
    }
}

pub fn button_style(overrides: Option<&StyleOverride>) -> String {
    let style = ButtonStyle::default();
    match overrides {
        Some(overrides) => style.apply(overrides).css(),
        None => style.css(),
    }
}

#[derive(Properties, PartialEq)]
pub struct GrayButtonProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub overrides: Option<StyleOverride>,
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

/// Translucent dark button; the click effect is entirely up to the caller.
#[function_component(GrayButton)]
pub fn gray_button(props: &GrayButtonProps) -> Html {
    html! {
        <button
            class={classes!("gray-button", props.class.clone())}
            style={button_style(props.overrides.as_ref())}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
