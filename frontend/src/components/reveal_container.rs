use yew::prelude::*;

use crate::config::Transition;
use crate::reveal::RevealState;

/// Where the wrapped content sits in its entrance animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub displayed: bool,
    pub scale: f32,
    pub rotate_deg: f32,
    pub opacity: f32,
}

impl Pose {
    pub const ENTRY: Pose = Pose {
        displayed: false,
        scale: 0.5,
        rotate_deg: -10.0,
        opacity: 0.0,
    };

    pub const SHOWN: Pose = Pose {
        displayed: true,
        scale: 1.0,
        rotate_deg: 0.0,
        opacity: 1.0,
    };

    pub fn for_state(state: RevealState) -> Pose {
        match state {
            RevealState::Hidden => Pose::ENTRY,
            RevealState::Visible => Pose::SHOWN,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "visibility: {}; opacity: {}; transform: rotate({}deg) scale({});",
            if self.displayed { "visible" } else { "hidden" },
            self.opacity,
            self.rotate_deg,
            self.scale
        )
    }
}

/// Inline style for the wrapper in `state`.
pub fn reveal_style(state: RevealState, transition: &Transition) -> String {
    let timing = match state {
        RevealState::Visible => format!(
            "transition: transform {ms}ms, opacity {ms}ms;",
            ms = transition.enter_ms
        ),
        RevealState::Hidden => format!(
            "transition: transform {ms}ms ease-in-out, opacity {ms}ms ease-in-out;",
            ms = transition.leave_ms
        ),
    };
    format!("{} {}", Pose::for_state(state).css(), timing)
}

#[derive(Properties, PartialEq)]
pub struct RevealContainerProps {
    pub state: RevealState,
    #[prop_or_default]
    pub transition: Transition,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RevealContainer)]
pub fn reveal_container(props: &RevealContainerProps) -> Html {
    let hidden = props.state == RevealState::Hidden;
    let class = classes!(
        "reveal",
        if hidden { "reveal-hidden" } else { "reveal-visible" }
    );

    html! {
        <div
            class={class}
            aria-hidden={hidden.to_string()}
            style={reveal_style(props.state, &props.transition)}
        >
            { for props.children.iter() }
        </div>
    }
}
