use std::collections::BTreeSet;

use dioxus::prelude::*;

use flight_co2_common::content::Displayable;

/// A citation rendered under an open section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionLink {
    pub title: String,
    pub href: String,
}

/// Render-ready form of one accordion item.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub links: Vec<SectionLink>,
}

impl Section {
    pub fn from_item<T: Displayable + ?Sized>(item: &T) -> Self {
        Self {
            title: item.title().to_string(),
            paragraphs: item.paragraphs().into_iter().map(String::from).collect(),
            links: item
                .links()
                .unwrap_or_default()
                .iter()
                .map(|link| SectionLink {
                    title: link.title.to_string(),
                    href: link.link.to_string(),
                })
                .collect(),
        }
    }
}

/// Convert a list of displayable items, preserving order.
pub fn sections_from<T: Displayable>(items: &[T]) -> Vec<Section> {
    items.iter().map(Section::from_item).collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToggleMode {
    /// Every section opens and closes on its own.
    #[default]
    Independent,
    /// Opening a section closes the others.
    Exclusive,
}

/// Which sections of one accordion are open. Everything starts collapsed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpenSections {
    mode: ToggleMode,
    open: BTreeSet<usize>,
}

impl OpenSections {
    pub fn new(mode: ToggleMode) -> Self {
        Self {
            mode,
            open: BTreeSet::new(),
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    #[cfg(test)]
    pub(crate) fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Switch toggle mode. Already open sections stay open until the next toggle.
    pub fn set_mode(&mut self, mode: ToggleMode) {
        self.mode = mode;
    }

    /// Flip section `index` out of `len` sections. Returns whether it is now open.
    /// Indices past the end are ignored.
    pub fn toggle(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }
        if self.open.remove(&index) {
            return false;
        }
        if self.mode == ToggleMode::Exclusive {
            self.open.clear();
        }
        self.open.insert(index);
        true
    }
}

/// Stateless accordion: renders `sections` according to `open` and reports clicks.
#[component]
pub fn AccordionView(
    sections: Vec<Section>,
    open: OpenSections,
    ontoggle: EventHandler<usize>,
) -> Element {
    rsx! {
        div { class: "accordion",
            for (i, section) in sections.into_iter().enumerate() {
                AccordionSection {
                    key: "{i}",
                    index: i,
                    is_open: open.is_open(i),
                    section,
                    ontoggle,
                }
            }
        }
    }
}

#[component]
fn AccordionSection(
    index: usize,
    section: Section,
    is_open: bool,
    ontoggle: EventHandler<usize>,
) -> Element {
    let chevron = if is_open { "▾" } else { "▸" };

    rsx! {
        div { class: "accordion-section",
            button {
                class: "accordion-header",
                r#type: "button",
                "aria-expanded": "{is_open}",
                onclick: move |_| ontoggle.call(index),
                span { class: "accordion-chevron", "{chevron}" }
                "{section.title}"
            }
            if is_open {
                div { class: "accordion-body",
                    for paragraph in section.paragraphs.iter() {
                        p { "{paragraph}" }
                    }
                    if !section.links.is_empty() {
                        div { class: "accordion-links",
                            span { class: "accordion-links-label", "Links:" }
                            ul {
                                for link in section.links.iter() {
                                    li {
                                        a {
                                            href: "{link.href}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            "{link.title}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Accordion that keeps its own open/closed state.
///
/// `exclusive` is read on every render, so a parent can switch modes at any time.
#[component]
pub fn Accordion(sections: Vec<Section>, #[props(default)] exclusive: bool) -> Element {
    let mode = if exclusive {
        ToggleMode::Exclusive
    } else {
        ToggleMode::Independent
    };
    let mut open = use_signal(|| OpenSections::new(mode));
    let count = sections.len();
    let current = open.read().clone();

    rsx! {
        AccordionView {
            sections,
            open: current,
            ontoggle: move |index: usize| {
                let mut state = open.write();
                state.set_mode(mode);
                let now_open = state.toggle(index, count);
                tracing::debug!("Accordion section {index} open: {now_open}");
            },
        }
    }
}
