/// One static piece of a section body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    Paragraph(&'static str),
    /// Link whose leading words are emphasised, e.g. "<b>Name</b> - blurb".
    Link {
        href: &'static str,
        lead: &'static str,
        text: &'static str,
    },
    HeadingLink {
        href: &'static str,
        text: &'static str,
    },
    /// Paragraph ending in a mailto link.
    Contact {
        label: &'static str,
        email: &'static str,
    },
}

/// A collapsible block on the page. Fixed at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub expanded: bool,
    pub body: &'static [Block],
}

impl Section {
    pub const fn new(title: &'static str, body: &'static [Block]) -> Self {
        Self {
            title,
            expanded: true,
            body,
        }
    }
}

pub const DONATE_URL: &str = "https://www.comebackalive.in.ua/donate";

pub const SUPPORT_SECTIONS: &[Section] = &[
    Section::new(
        "Donate!",
        &[Block::Link {
            href: DONATE_URL,
            lead: "🤍 COME BACK ALIVE",
            text: "\"Since its birth in 2014, Come Back Alive has become the largest foundation providing support to the Ukrainian Armed Forces.\"",
        }],
    ),
    Section::new(
        "Support Ukrainian Developers",
        &[
            Block::Link {
                href: "https://github.com/chernivtsijs/made-in-ukraine",
                lead: "Made in Ukraine",
                text: "A collection of the best projects that were made and mainly contributed by Ukrainian developers",
            },
            Block::Paragraph("Some of examples are:"),
            Block::HeadingLink {
                href: "https://github.com/trekhleb/javascript-algorithms",
                text: "JavaScript Algorithms and Data Structures by Oleksii Trekhleb 📝",
            },
            Block::HeadingLink {
                href: "https://github.com/ansible/ansible",
                text: "Ansible co-maintained by Sviatoslav Sydorenko / Red Hat Ansible",
            },
            Block::HeadingLink {
                href: "https://github.com/Leaflet/Leaflet",
                text: "Leaflet 🍃 by Vladimir Agafonkin - JavaScript library for mobile-friendly interactive maps",
            },
        ],
    ),
    Section::new(
        "👷 Work In Progress",
        &[
            Block::Paragraph(
                "This page is a work in progress and I will be adding more content through the week!.",
            ),
            Block::Paragraph(
                "If you're interested you can help me by sending me links with useful content that can help in supporting the Ukrainian people.",
            ),
            Block::Contact {
                label: "Contact-me on: ",
                email: "juniormateusknd@gmail.com",
            },
        ],
    ),
];

/// Footer card linking to whoever maintains the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Author {
    pub href: &'static str,
    pub greeting: &'static str,
    pub intro: &'static str,
}

pub const AUTHOR: Author = Author {
    href: "https://matj.dev/",
    greeting: "Hi There! 👋",
    intro: "I am Mateus, a brazilian developer who loves doing cool stuff!",
};
