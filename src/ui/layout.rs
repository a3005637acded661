use ratatui::layout::Rect;

/// How the body arranges the image surface and the info card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Image above, info below. Portrait proportions.
    Stacked,
    /// Image left, info right. Landscape proportions.
    SideBySide,
}

impl LayoutMode {
    pub fn from_landscape(is_landscape: bool) -> Self {
        if is_landscape {
            LayoutMode::SideBySide
        } else {
            LayoutMode::Stacked
        }
    }

    pub fn for_area(area: Rect) -> Self {
        Self::from_landscape(is_landscape(area.width, area.height))
    }
}

/// Terminal cells are roughly twice as tall as they are wide, so a region
/// only reads as landscape once its width exceeds two heights.
pub fn is_landscape(width: u16, height: u16) -> bool {
    width > height.saturating_mul(2)
}

/// Split the screen into header, body, and footer bands.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(2);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Rect of the given size centered inside `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_selects_side_by_side() {
        assert_eq!(LayoutMode::from_landscape(true), LayoutMode::SideBySide);
        assert_eq!(LayoutMode::from_landscape(false), LayoutMode::Stacked);
    }

    #[test]
    fn derivation_is_deterministic() {
        for flag in [true, false] {
            assert_eq!(
                LayoutMode::from_landscape(flag),
                LayoutMode::from_landscape(flag)
            );
        }
    }

    #[test]
    fn wide_terminal_is_landscape() {
        assert!(is_landscape(120, 30));
        assert!(!is_landscape(80, 50));
        // Exactly twice as wide still counts as portrait.
        assert!(!is_landscape(60, 30));
    }

    #[test]
    fn for_area_follows_proportions() {
        let wide = Rect::new(0, 0, 200, 40);
        let tall = Rect::new(0, 0, 60, 60);
        assert_eq!(LayoutMode::for_area(wide), LayoutMode::SideBySide);
        assert_eq!(LayoutMode::for_area(tall), LayoutMode::Stacked);
    }

    #[test]
    fn regions_tile_the_area() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height + body.height + footer.height, area.height);
        assert_eq!(body.y, header.y + header.height);
        assert_eq!(footer.y, body.y + body.height);
    }

    #[test]
    fn regions_survive_tiny_areas() {
        let area = Rect::new(0, 0, 10, 1);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height, 1);
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 0);
    }

    #[test]
    fn centered_rect_is_clamped_and_centered() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = centered_rect(area, 40, 10);
        assert_eq!(popup, Rect::new(20, 7, 40, 10));

        let oversized = centered_rect(area, 200, 100);
        assert_eq!(oversized, area);
    }
}
