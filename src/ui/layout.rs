use crate::app::UnitApp;
use crate::model::{SentenceEntry, Tab, VocabEntry};
use crate::theme::Theme;
use egui::{
    CentralPanel, Color32, Context, CornerRadius, Frame, Margin, RichText, ScrollArea,
    TopBottomPanel, Ui,
};

/// Unit header: title, subtitle and the two tabs.
pub fn top_panel(app: &mut UnitApp, ctx: &Context) {
    TopBottomPanel::top("unit_header").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.heading(
                RichText::new(&app.unit.title)
                    .color(app.theme.accent_dark)
                    .strong(),
            );
            ui.label(RichText::new(&app.unit.subtitle).weak());
            ui.add_space(6.0);

            let mut tab = app.tab;
            ui.horizontal(|ui| {
                let tabs_width = 260.0;
                ui.add_space((ui.available_width() - tabs_width).max(0.0) / 2.0);
                ui.selectable_value(&mut tab, Tab::Study, "📚 詞彙與句型");
                ui.selectable_value(&mut tab, Tab::Challenge, "🎲 隨機挑戰");
            });
            app.switch_tab(tab);
            ui.add_space(6.0);
        });
    });
}

/// Scrollable central panel with a capped content width, centered.
pub fn centered_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let w = ui.available_width().min(max_width);
                ui.set_max_width(w);
                inner(ui);
            });
        });
    });
}

/// One vocabulary card. Returns true when its play button was clicked.
pub fn word_card(ui: &mut Ui, theme: &Theme, entry: &VocabEntry) -> bool {
    let mut play = false;
    Frame::default()
        .fill(theme.card_fill)
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::symmetric(12, 12))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(&entry.icon).size(36.0));
                ui.label(
                    RichText::new(&entry.amis)
                        .size(20.0)
                        .strong()
                        .color(theme.accent_dark),
                );
                ui.label(RichText::new(&entry.gloss).color(Color32::from_gray(110)));
                ui.add_space(2.0);
                tag_label(ui, theme, &entry.morph);
                ui.label(
                    RichText::new(format!("src: {}", entry.source))
                        .small()
                        .weak()
                        .italics(),
                );
                ui.add_space(4.0);
                play = ui.button("🔊 聽發音").clicked();
            });
        });
    play
}

/// One sentence box. Returns true when its play button was clicked.
pub fn sentence_box(ui: &mut Ui, theme: &Theme, entry: &SentenceEntry) -> bool {
    let mut play = false;
    Frame::default()
        .fill(theme.card_fill)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::symmetric(14, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(format!("{} {}", entry.icon, entry.amis))
                    .size(18.0)
                    .strong()
                    .color(theme.accent_dark),
            );
            ui.label(RichText::new(&entry.gloss).color(Color32::from_gray(90)));
            ui.label(
                RichText::new(format!("src: {}", entry.source))
                    .small()
                    .weak()
                    .italics(),
            );
            play = ui.button("▶ 播放句型").clicked();
        });
    play
}

fn tag_label(ui: &mut Ui, theme: &Theme, text: &str) {
    Frame::default()
        .fill(theme.accent_soft)
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().strong().color(theme.tag_text));
        });
}

/// Shown wherever playback was attempted and the service failed.
pub fn muted_caption(ui: &mut Ui) {
    ui.label(RichText::new("🔇 (語音生成暫時無法使用)").small().weak());
}
