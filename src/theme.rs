use crate::model::UnitId;
use egui::{Color32, Context, Visuals};

/// Per-unit accent palette. Presentation only; the quiz logic never
/// looks at it.
#[derive(Clone, Copy)]
pub struct Theme {
    pub accent: Color32,      // buttons, progress bar
    pub accent_dark: Color32, // headings, headwords
    pub accent_soft: Color32, // card borders, morph tags
    pub card_fill: Color32,
    pub tag_text: Color32,
}

impl Theme {
    pub fn for_unit(id: UnitId) -> Self {
        match id {
            // 知性深紫色
            UnitId::Unit33 => Self {
                accent: Color32::from_rgb(0x8e, 0x24, 0xaa),
                accent_dark: Color32::from_rgb(0x6a, 0x1b, 0x9a),
                accent_soft: Color32::from_rgb(0xe1, 0xbe, 0xe7),
                card_fill: Color32::from_rgb(0xf3, 0xe5, 0xf5),
                tag_text: Color32::from_rgb(0x4a, 0x14, 0x8c),
            },
            // 沉穩藍綠色
            UnitId::Unit34 => Self {
                accent: Color32::from_rgb(0x00, 0x89, 0x7b),
                accent_dark: Color32::from_rgb(0x00, 0x69, 0x5c),
                accent_soft: Color32::from_rgb(0xb2, 0xdf, 0xdb),
                card_fill: Color32::from_rgb(0xe0, 0xf2, 0xf1),
                tag_text: Color32::from_rgb(0x00, 0x4d, 0x40),
            },
        }
    }

    pub fn apply(&self, ctx: &Context) {
        let mut visuals = Visuals::light();
        visuals.selection.bg_fill = self.accent;
        visuals.hyperlink_color = self.accent_dark;
        ctx.set_visuals(visuals);
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::for_unit(UnitId::Unit33)
    }
}
