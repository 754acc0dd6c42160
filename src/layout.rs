/// Viewport-relative rectangle of a section, as reported by the page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height,
            left,
            right: left + width,
            width,
            height,
        }
    }
}

/// Live geometry of the stacked sections.
pub trait SectionLayout {
    fn section_count(&self) -> usize;

    /// Offset of section `index` from the wrapper's content origin.
    fn offset_top(&self, index: usize) -> f64;

    fn rect(&self, index: usize) -> Rect;

    fn viewport_height(&self) -> f64;
}
