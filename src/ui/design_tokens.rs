// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants for the toast overlay.

## Organization

- **Palette**: Accent and neutral colors
- **Opacity**: Hover and pressed overlays
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Toast card and glyph sizes
- **Typography**: Font sizes
- **Border**, **Radius**, **Shadow**: Card chrome

## Examples

```
use iced_toasts::ui::design_tokens::{palette, spacing};

let accent = palette::SUCCESS_500;
let gap = spacing::XS; // 8px between stacked toasts
```
"#]

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Kind accents
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const SHADOW: f32 = 0.35;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Fixed width of a toast card.
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Font size of the kind glyph.
    pub const GLYPH: f32 = 18.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Toast message text.
    pub const BODY: f32 = 14.0;

    /// Close button label.
    pub const BODY_LG: f32 = 16.0;
}

// ============================================================================
// Border, Radius and Shadow
// ============================================================================

pub mod border {
    /// Accent border around a toast card.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(opacity::SHADOW > 0.0 && opacity::SHADOW < 1.0);

    assert!(typography::BODY_LG > typography::BODY);
    assert!(sizing::GLYPH > typography::BODY);
};
