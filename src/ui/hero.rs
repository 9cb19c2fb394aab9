use serde::Serialize;

/// Viewports narrower than this get the compact hero.
pub const HERO_BREAKPOINT_PX: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroLayout {
    Compact,
    Wide,
}

impl HeroLayout {
    pub fn for_viewport(width_px: u32) -> Self {
        if width_px < HERO_BREAKPOINT_PX {
            HeroLayout::Compact
        } else {
            HeroLayout::Wide
        }
    }
}

/// Tracks the hero layout across resize events.
#[derive(Debug, Clone)]
pub struct HeroSelector {
    current: HeroLayout,
}

impl HeroSelector {
    pub fn new(initial_width_px: u32) -> Self {
        Self {
            current: HeroLayout::for_viewport(initial_width_px),
        }
    }

    pub fn current(&self) -> HeroLayout {
        self.current
    }

    /// Returns the new layout only when the resize crossed the breakpoint.
    pub fn on_resize(&mut self, width_px: u32) -> Option<HeroLayout> {
        let next = HeroLayout::for_viewport(width_px);
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }
}
