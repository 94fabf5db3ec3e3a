pub mod layout;
pub mod views;

use crate::app::{UnitApp, storage_key};
use crate::model::Tab;
use eframe::{App, Frame, set_value};
use egui::Context;

impl App for UnitApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = ctx.input(|i| i.time);
        self.theme.apply(ctx);
        self.tick_celebration(now);

        layout::top_panel(self, ctx);

        match self.tab {
            Tab::Study => views::study::ui_study(self, ctx),
            Tab::Challenge => {
                // The success cue for the final answer plays out before
                // the completion panel appears.
                if self.quiz_complete() && !self.is_celebrating(now) {
                    views::complete::ui_complete(self, ctx);
                } else {
                    views::quiz::ui_quiz(self, ctx);
                }
            }
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, &storage_key(self.unit_id), self);
    }
}
