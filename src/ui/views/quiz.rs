use crate::app::UnitApp;
use crate::session::QUESTIONS_PER_ROUND;
use crate::ui::layout::{centered_panel, muted_caption};
use egui::{Context, ProgressBar, RichText};

pub fn ui_quiz(app: &mut UnitApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);

    if app.is_celebrating(now) {
        let theme = app.theme;
        centered_panel(ctx, 600.0, |ui| {
            ui.add_space(100.0);
            ui.label(RichText::new("🎉").size(64.0));
            ui.heading(RichText::new("答對了！").color(theme.accent_dark).strong());
        });
        // keep repainting until the cue expires
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
        return;
    }

    // Snapshot the frame's data before the panel closures borrow `app`.
    let (progress, number, prompt, audio, options) = {
        let Some(session) = &app.session else {
            return;
        };
        let Some(question) = session.current_question() else {
            return;
        };
        (
            session.progress(),
            session.current_index() + 1,
            question.item.prompt.clone(),
            question.item.audio.clone(),
            question.shuffled_options.clone(),
        )
    };
    let selected = app.current_choice();
    let theme = app.theme;

    let mut clicked_option: Option<usize> = None;
    let mut play = false;
    let mut submit = false;

    centered_panel(ctx, 600.0, |ui| {
        ui.add_space(12.0);
        ui.heading("🎲 隨機評量");
        ui.add_space(8.0);

        ui.add(ProgressBar::new(progress).fill(theme.accent));
        ui.add_space(4.0);
        ui.strong(format!("Question {number} / {QUESTIONS_PER_ROUND}"));
        ui.add_space(10.0);

        ui.heading(RichText::new(&prompt).color(theme.accent_dark));
        if !audio.is_empty() {
            ui.add_space(4.0);
            play = ui.button("🎧 播放題目音檔").clicked();
            if app.audio_failed {
                muted_caption(ui);
            }
        }
        ui.add_space(10.0);

        ui.label("請選擇正確答案：");
        for (i, option) in options.iter().enumerate() {
            if ui.radio(selected == i, option).clicked() {
                clicked_option = Some(i);
            }
        }
        ui.add_space(10.0);

        submit = ui.button(RichText::new("送出答案").strong()).clicked();

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&app.message);
        }
        ui.add_space(12.0);
    });

    if let Some(i) = clicked_option {
        app.select_choice(i);
    }
    if play {
        app.play_audio(&audio);
    }
    if submit {
        app.submit_current(now);
    }
}
