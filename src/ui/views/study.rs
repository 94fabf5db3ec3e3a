use crate::app::UnitApp;
use crate::ui::layout::{centered_panel, muted_caption, sentence_box, word_card};
use egui::Context;

pub fn ui_study(app: &mut UnitApp, ctx: &Context) {
    let mut play: Option<String> = None;
    let theme = app.theme;

    centered_panel(ctx, 720.0, |ui| {
        ui.add_space(10.0);
        ui.heading("📝 核心單字 (構詞分析)");
        ui.add_space(8.0);

        ui.columns(2, |cols| {
            for (i, entry) in app.unit.vocab.iter().enumerate() {
                let col = &mut cols[i % 2];
                if word_card(col, &theme, entry) {
                    play = Some(entry.amis.clone());
                }
                col.add_space(10.0);
            }
        });

        ui.separator();
        ui.add_space(6.0);
        ui.heading("🗣️ 實用句型 (Data-Driven)");
        ui.add_space(8.0);

        for entry in &app.unit.sentences {
            if sentence_box(ui, &theme, entry) {
                play = Some(entry.amis.clone());
            }
            ui.add_space(8.0);
        }

        if app.audio_failed {
            muted_caption(ui);
        }
        ui.add_space(12.0);
    });

    if let Some(text) = play {
        app.play_audio(&text);
    }
}
