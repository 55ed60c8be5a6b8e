use std::rc::Rc;

use yew::prelude::*;

use crate::config::{FALLBACK_HEADER_HEIGHT, HEADER_SCROLLED_THRESHOLD, SCROLL_TARGET_GAP};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnchorTarget {
    Top,
    Section(String),
}

/// Where a click on an in-page anchor should scroll to. Links that leave the
/// page yield `None` and keep their default behavior.
pub fn anchor_target(href: &str) -> Option<AnchorTarget> {
    match href.strip_prefix('#')? {
        "" => Some(AnchorTarget::Top),
        id => Some(AnchorTarget::Section(id.to_string())),
    }
}

/// Scroll offset that lands a section just below the fixed header.
pub fn section_scroll_offset(section_top: f64, header_height: Option<f64>) -> f64 {
    section_top - header_height.unwrap_or(FALLBACK_HEADER_HEIGHT) - SCROLL_TARGET_GAP
}

pub fn header_is_scrolled(scroll_top: f64) -> bool {
    scroll_top > HEADER_SCROLLED_THRESHOLD
}

/// Keys that activate the focused logo like a click.
pub fn activates_logo(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

pub fn logo_transform(hovered: bool) -> &'static str {
    if hovered {
        "scale(1.05)"
    } else {
        "scale(1)"
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    LinkClicked,
    ClickedOutside,
    Escape,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: MenuAction) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::LinkClicked | MenuAction::ClickedOutside | MenuAction::Escape => false,
        };
        if open == self.open {
            self
        } else {
            Rc::new(MenuState { open })
        }
    }
}
