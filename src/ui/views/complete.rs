use crate::app::UnitApp;
use crate::ui::layout::centered_panel;
use egui::{Context, CornerRadius, Frame, Margin, ProgressBar, RichText};

pub fn ui_complete(app: &mut UnitApp, ctx: &Context) {
    let score = app.session.as_ref().map(|s| s.score()).unwrap_or(0);
    let note = app.unit.completion_note.clone();
    let theme = app.theme;
    let mut restart = false;

    centered_panel(ctx, 600.0, |ui| {
        ui.add_space(24.0);
        ui.add(ProgressBar::new(1.0).fill(theme.accent));
        ui.add_space(20.0);

        Frame::default()
            .fill(theme.accent_soft)
            .corner_radius(CornerRadius::same(16))
            .inner_margin(Margin::symmetric(24, 24))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("🏆").size(64.0));
                    ui.heading(RichText::new("挑戰成功！").color(theme.accent_dark).strong());
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!("本次得分：{score}"))
                            .size(20.0)
                            .strong(),
                    );
                    ui.add_space(4.0);
                    ui.label(&note);
                    ui.add_space(14.0);
                    restart = ui.button("🔄 再來一局 (重新抽題)").clicked();
                });
            });
        ui.add_space(24.0);
    });

    if restart {
        app.start_session();
    }
}
