//! 3D card showcase effects

use super::Transform;

/// Image filter applied when the `chip_index`-th colour swatch is picked
pub fn card_filter(chip_index: usize) -> String {
    let hue = chip_index * 60;
    let invert = u8::from(chip_index == 2);
    format!("hue-rotate({hue}deg) invert({invert})")
}

/// Lift and slightly enlarge the card under the pointer
pub fn hover_transform(hovered: bool) -> Transform {
    if hovered {
        Transform::translate(0.0, -10.0).with_scale(1.02)
    } else {
        Transform::default().with_scale(1.0)
    }
}

/// Layered shadow that gives the cards their embossed look
pub const CARD_SHADOW: &str = "-8px -8px 24px 0 hsl(var(--background) / 0.8), \
    1px 1px 3px 0px hsl(var(--foreground) / 0.1), \
    12px 42px 24px -8px hsl(var(--foreground) / 0.05), \
    10px 24px 42px 0 hsl(var(--foreground) / 0.05), \
    1px 4px 12px 0 hsl(var(--foreground) / 0.1)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_filter() {
        assert_eq!(card_filter(0), "hue-rotate(0deg) invert(0)");
        assert_eq!(card_filter(1), "hue-rotate(60deg) invert(0)");
        assert_eq!(card_filter(2), "hue-rotate(120deg) invert(1)");
    }

    #[test]
    fn test_hover_transform() {
        let up = hover_transform(true);
        assert_eq!(up.translate_y, -10.0);
        assert_eq!(up.scale, Some(1.02));

        let rest = hover_transform(false);
        assert_eq!(rest.translate_y, 0.0);
        assert_eq!(rest.to_css(), "rotateZ(0.000deg) scale(1.000)");
    }
}
