// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing and sizes shared by every wizard screen. Styles and views
read these constants instead of hard-coding values.

- **Palette**: slate grays and the studio blue
- **Opacity**: scrims and translucent surfaces
- **Spacing**: 4px-based scale
- **Sizing**: upload cards, category tiles, shutter, toasts
- **Typography**, **Border**, **Radius**, **Shadow**

```
use virtual_studio::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::GRAY_900
};
let gap = spacing::MD;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Slate grays
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153); // Page background
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216); // Panels, drop zones
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318); // Borders, hover
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686); // Muted text
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);

    // Studio blue
    pub const PRIMARY_400: Color = Color::from_rgb(0.376, 0.647, 0.980); // Title gradient start
    pub const PRIMARY_500: Color = Color::from_rgb(0.231, 0.510, 0.965); // Focus ring
    pub const PRIMARY_600: Color = Color::from_rgb(0.145, 0.388, 0.922); // Primary action
    pub const PRIMARY_700: Color = Color::from_rgb(0.114, 0.306, 0.847); // Hovered action

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const WARNING_500: Color = Color::from_rgb(0.961, 0.620, 0.043);
    pub const SUCCESS_500: Color = Color::from_rgb(0.133, 0.773, 0.369);
    pub const INFO_500: Color = Color::from_rgb(0.231, 0.510, 0.965);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Toasts and floating panels.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon and glyph sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;
    pub const ICON_XXL: f32 = 64.0;

    /// Diameter of the camera shutter button.
    pub const SHUTTER: f32 = 64.0;

    pub const TOAST_WIDTH: f32 = 320.0;
    /// Upload card (square drop zone with the two capture buttons).
    pub const UPLOAD_CARD: f32 = 384.0;
    /// Category picker tile.
    pub const CATEGORY_TILE: f32 = 160.0;
    /// Widest step content (category grid, result panel).
    pub const CONTENT_MAX_WIDTH: f32 = 896.0;
    /// Minimum height of the result panel.
    pub const RESULT_MIN_HEIGHT: f32 = 360.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// App header.
    pub const DISPLAY: f32 = 44.0;
    /// Step headings.
    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 18.0;
    /// Tagline and button labels.
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Dashed-look drop zone outline, toast accents.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 25.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::CONTENT_MAX_WIDTH > sizing::UPLOAD_CARD);
    assert!(sizing::UPLOAD_CARD > sizing::CATEGORY_TILE);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY_SM > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    fn luminance(color: iced::Color) -> f32 {
        0.2126 * color.r + 0.7152 * color.g + 0.0722 * color.b
    }

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn four_category_tiles_fit_the_content_width() {
        let row = 4.0 * sizing::CATEGORY_TILE + 3.0 * spacing::LG;
        assert!(row <= sizing::CONTENT_MAX_WIDTH);
    }

    #[test]
    fn gray_scale_darkens_monotonically() {
        let grays = [
            palette::GRAY_100,
            palette::GRAY_200,
            palette::GRAY_400,
            palette::GRAY_700,
            palette::GRAY_800,
            palette::GRAY_900,
        ];
        for pair in grays.windows(2) {
            assert!(luminance(pair[0]) > luminance(pair[1]));
        }
    }

    #[test]
    fn white_text_reads_on_primary_action() {
        assert!(luminance(palette::WHITE) - luminance(palette::PRIMARY_600) > 0.5);
    }
}
