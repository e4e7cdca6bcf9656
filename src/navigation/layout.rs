use crate::domain::Section;

/// Vertical geometry of the four sections inside the scroll container.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout {
    tops: [f64; Section::COUNT],
    heights: [f64; Section::COUNT],
    tracks_viewport: bool,
}

impl SectionLayout {
    /// Sections stacked edge to edge, each exactly one viewport tall. The
    /// layout follows viewport height changes.
    pub fn full_viewport(viewport_height: f64) -> Self {
        let h = viewport_height.max(0.0);
        let mut tops = [0.0; Section::COUNT];
        for (i, top) in tops.iter_mut().enumerate() {
            *top = i as f64 * h;
        }
        Self {
            tops,
            heights: [h; Section::COUNT],
            tracks_viewport: true,
        }
    }

    /// Geometry measured by the presentation layer. Kept as-is on resize.
    pub fn measured(tops: [f64; Section::COUNT], heights: [f64; Section::COUNT]) -> Self {
        Self {
            tops,
            heights,
            tracks_viewport: false,
        }
    }

    pub fn tracks_viewport(&self) -> bool {
        self.tracks_viewport
    }

    pub fn offset_of(&self, section: Section) -> f64 {
        self.tops[section.index()]
    }

    /// Refreshes a viewport-tracking layout; measured layouts are left alone.
    pub fn fit_viewport(&mut self, viewport_height: f64) {
        if self.tracks_viewport && self.heights[0] != viewport_height {
            *self = Self::full_viewport(viewport_height);
        }
    }

    pub fn visible_amount(&self, section: Section, scroll_offset: f64, viewport_height: f64) -> f64 {
        let top = self.tops[section.index()];
        let bottom = top + self.heights[section.index()];
        let visible_top = top.max(scroll_offset);
        let visible_bottom = bottom.min(scroll_offset + viewport_height);
        (visible_bottom - visible_top).max(0.0)
    }

    /// Section covering the most of the viewport. Ties go to the lower index;
    /// if nothing is visible the answer is `Intro`.
    pub fn most_visible(&self, scroll_offset: f64, viewport_height: f64) -> Section {
        let mut best = Section::Intro;
        let mut best_amount = 0.0;
        for section in Section::ALL {
            let amount = self.visible_amount(section, scroll_offset, viewport_height);
            if amount > best_amount {
                best_amount = amount;
                best = section;
            }
        }
        best
    }
}
