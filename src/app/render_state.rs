use crate::app::mode::AppMode;
use crate::theme::ThemeId;
use unicode_segmentation::UnicodeSegmentation;

/// Render state for UI components
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub display: String,
    pub overflow: bool,
    pub wide: bool,
    pub expression: String,
    pub theme: ThemeId,
    /// Graphemes hidden on the right of a wide display
    pub scroll_offset: usize,
    pub status: Option<String>,
}

impl RenderState {
    /// The part of the display that fits in `width` columns.
    ///
    /// Narrow values are returned whole. Wide values show their tail, moved
    /// left by `scroll_offset` graphemes.
    pub fn visible_display(&self, width: usize) -> String {
        let graphemes: Vec<&str> = self.display.graphemes(true).collect();
        if !self.wide || graphemes.len() <= width {
            return self.display.clone();
        }

        let offset = self.scroll_offset.min(graphemes.len() - width);
        let end = graphemes.len() - offset;
        graphemes[end - width..end].concat()
    }

    /// Whether more of the display is hidden to the left / right
    pub fn scroll_hints(&self, width: usize) -> (bool, bool) {
        let len = self.display.graphemes(true).count();
        if !self.wide || len <= width {
            return (false, false);
        }
        let offset = self.scroll_offset.min(len - width);
        (offset < len - width, offset > 0)
    }
}
