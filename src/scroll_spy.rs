use log::debug;

use crate::config::SCROLL_SPY_LOOKAHEAD;

/// Layout box of a tracked section, read from the live document.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Picks the section under `scroll_y` plus the lookahead bias.
///
/// When bounds overlap, the matching section whose top is closest above the
/// probe wins; equal tops go to the earlier section in document order.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&SectionBounds> {
    let probe = scroll_y + SCROLL_SPY_LOOKAHEAD;
    sections
        .iter()
        .filter(|section| section.contains(probe))
        .fold(None, |best: Option<&SectionBounds>, section| match best {
            Some(current) if current.top >= section.top => Some(current),
            _ => Some(section),
        })
}

/// Section id a same-page nav link points at, if any.
pub fn link_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollSpy {
    active: Option<String>,
}

impl ScrollSpy {
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Returns whether the active section changed.
    pub fn recompute(&mut self, scroll_y: f64, sections: &[SectionBounds]) -> bool {
        let next = active_section(scroll_y, sections).map(|section| section.id.clone());
        if next == self.active {
            return false;
        }
        debug!("Active section: {:?} -> {:?}", self.active, next);
        self.active = next;
        true
    }

    pub fn is_link_active(&self, href: &str) -> bool {
        match (self.active(), link_target(href)) {
            (Some(active), Some(target)) => active == target,
            _ => false,
        }
    }
}
