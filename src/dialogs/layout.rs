//! Dialog layout engine
//!
//! Deterministic rectangle arithmetic for a dialog's children: message label
//! on top, caller-supplied content in the middle, button row at the bottom,
//! background covering everything. Derived on demand from current content;
//! nothing here is persisted.
//!
//! All math saturates: a dialog squeezed below its minimum size collapses
//! regions to zero rather than wrapping around.

use ratatui::layout::Rect;

/// Margins driving dialog layout, read from theme constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    /// Margin around the dialog's content.
    pub margin: u16,
    /// Minimum gap between buttons in the row.
    pub button_margin: u16,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            margin: 1,
            button_margin: 1,
        }
    }
}

/// Rectangles assigned to a dialog's children, relative to the dialog origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildRects {
    /// Full dialog area; the background panel always covers it.
    pub background: Rect,
    /// Top strip for the message label. Zero height when the text is empty.
    pub label: Rect,
    /// Shared rectangle for every content control.
    pub content: Rect,
    /// Button row directly below the content.
    pub button_row: Rect,
}

/// Arrange children inside a dialog of `dialog_size`.
///
/// `label_min` must already be zeroed for an empty label; the engine places
/// whatever it is told to place.
pub fn recompute_layout(
    dialog_size: (u16, u16),
    margin: u16,
    button_row_min: (u16, u16),
    label_min: (u16, u16),
) -> ChildRects {
    let (width, height) = dialog_size;
    let label_height = label_min.1;
    let row_height = button_row_min.1;

    let content_width = width.saturating_sub(margin * 2);
    let content_height = height
        .saturating_sub(margin * 3)
        .saturating_sub(row_height)
        .saturating_sub(label_height);

    let label = Rect::new(margin, margin, content_width, label_height);
    let content = Rect::new(
        margin,
        margin + label_height,
        content_width,
        content_height,
    );
    let button_row = Rect::new(
        margin,
        content.y + content_height + margin,
        content_width,
        row_height,
    );

    ChildRects {
        background: Rect::new(0, 0, width, height),
        label,
        content,
        button_row,
    }
}

/// Smallest dialog size that fits the label, every content control and the
/// button row, floored at the host-imposed window minimum.
pub fn compute_minimum_size(
    label_min: (u16, u16),
    content_mins: &[(u16, u16)],
    button_row_min: (u16, u16),
    margin: u16,
    host_min: (u16, u16),
) -> (u16, u16) {
    let mut width = label_min.0;
    let mut height = label_min.1;
    for &(w, h) in content_mins {
        width = width.max(w);
        height = height.max(h);
    }
    width = width.max(button_row_min.0).saturating_add(margin * 2);
    // One extra margin separates the content area from the button row
    height = height
        .saturating_add(button_row_min.1)
        .saturating_add(margin * 3);
    (width.max(host_min.0), height.max(host_min.1))
}

/// Translate a dialog-relative rect into screen space.
pub fn offset(rect: Rect, origin: (u16, u16)) -> Rect {
    Rect::new(
        origin.0.saturating_add(rect.x),
        origin.1.saturating_add(rect.y),
        rect.width,
        rect.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_tile_the_dialog_vertically() {
        let rects = recompute_layout((40, 12), 1, (10, 3), (20, 2));

        assert_eq!(rects.background, Rect::new(0, 0, 40, 12));
        assert_eq!(rects.label, Rect::new(1, 1, 38, 2));
        assert_eq!(rects.content, Rect::new(1, 3, 38, 4));
        assert_eq!(rects.button_row, Rect::new(1, 8, 38, 3));
        // Bottom margin below the row closes the dialog
        assert_eq!(rects.button_row.y + rects.button_row.height + 1, 12);
    }

    #[test]
    fn test_empty_label_gives_content_the_top() {
        let rects = recompute_layout((40, 12), 1, (10, 3), (0, 0));
        assert_eq!(rects.label.height, 0);
        assert_eq!(rects.content.y, 1);
        assert_eq!(rects.content.height, 5);
    }

    #[test]
    fn test_undersized_dialog_saturates() {
        let rects = recompute_layout((4, 3), 1, (10, 3), (5, 1));
        assert_eq!(rects.content.height, 0);
        assert_eq!(rects.content.width, 2);
    }

    #[test]
    fn test_minimum_size_label_and_row_only() {
        // Empty label, no content children: the row and margins alone
        // drive the result.
        let (width, height) = compute_minimum_size((0, 0), &[], (8, 3), 1, (0, 0));
        assert_eq!(height, 3 + 3);
        assert_eq!(width, 8 + 2);
    }

    #[test]
    fn test_minimum_size_takes_widest_child() {
        let min = compute_minimum_size((10, 1), &[(25, 2), (5, 6)], (8, 3), 1, (0, 0));
        assert_eq!(min, (25 + 2, 6 + 3 + 3));
    }

    #[test]
    fn test_minimum_size_monotone_in_content() {
        let small = compute_minimum_size((10, 1), &[(12, 2)], (8, 3), 1, (0, 0));
        let grown = compute_minimum_size((10, 1), &[(12, 2), (30, 9)], (8, 3), 1, (0, 0));
        assert!(grown.0 >= small.0);
        assert!(grown.1 >= small.1);
    }

    #[test]
    fn test_minimum_size_floors_at_host_minimum() {
        let min = compute_minimum_size((0, 0), &[], (8, 3), 1, (40, 20));
        assert_eq!(min, (40, 20));
    }
}
