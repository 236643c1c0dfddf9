use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{Block, Section};

/// Open/closed flag per section, indexed like the section slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionFlags(Vec<bool>);

pub enum SectionAction {
    Toggle(usize),
}

impl SectionFlags {
    pub fn from_sections(sections: &[Section]) -> Self {
        Self(sections.iter().map(|s| s.expanded).collect())
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }
}

impl Reducible for SectionFlags {
    type Action = SectionAction;

    fn reduce(self: Rc<Self>, action: SectionAction) -> Rc<Self> {
        match action {
            SectionAction::Toggle(index) if index < self.0.len() => {
                let mut flags = self.0.clone();
                flags[index] = !flags[index];
                Rc::new(Self(flags))
            }
            SectionAction::Toggle(_) => self,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DisclosureProps {
    pub title: String,
    pub open: bool,
    pub on_toggle: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Disclosure)]
pub fn disclosure(props: &DisclosureProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("disclosure", props.open.then(|| "open"))}>
            <button class="disclosure-button" aria-expanded={props.open.to_string()} onclick={onclick}>
                <span>{&props.title}</span>
                <span class={classes!("chevron", props.open.then(|| "chevron-open"))}>{"⌃"}</span>
            </button>
            {
                if props.open {
                    html! {
                        <div class="disclosure-panel">
                            { for props.children.iter() }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn render_block(block: &Block) -> Html {
    match *block {
        Block::Paragraph(text) => html! { <p class="section-text">{text}</p> },
        Block::Link { href, lead, text } => html! {
            <a href={href} class="section-link">
                <div><b>{lead}</b>{" - "}{text}</div>
            </a>
        },
        Block::HeadingLink { href, text } => html! {
            <h4><a href={href} class="section-link">{text}</a></h4>
        },
        Block::Contact { label, email } => html! {
            <p class="section-text">
                {label}
                <a href={format!("mailto:{}", email)} class="section-link">{email}</a>
            </p>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionListProps {
    pub sections: &'static [Section],
}

/// Every section toggles on its own; nothing is persisted across reloads.
#[function_component(SectionList)]
pub fn section_list(props: &SectionListProps) -> Html {
    let sections = props.sections;
    let flags = use_reducer(|| SectionFlags::from_sections(sections));

    html! {
        <div class="section-list">
            { for sections.iter().enumerate().map(|(index, section)| {
                let on_toggle = {
                    let flags = flags.dispatcher();
                    Callback::from(move |_| flags.dispatch(SectionAction::Toggle(index)))
                };
                html! {
                    <Disclosure
                        key={section.title}
                        title={section.title}
                        open={flags.is_open(index)}
                        on_toggle={on_toggle}
                    >
                        { for section.body.iter().map(render_block) }
                    </Disclosure>
                }
            }) }
        </div>
    }
}
