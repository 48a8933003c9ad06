use crate::data::LoadError;
use crate::engine::Cursor;
use crate::models::ModuleKind;
use crate::session::SessionContext;

use super::{Feedback, Flow};

const MODULE: ModuleKind = ModuleKind::Mindfulness;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JourneyAction {
    PreviousDay,
    NextDay,
    Complete,
}

/// Day-by-day mindfulness activities.
#[derive(Debug, Clone)]
pub struct JourneyPage {
    /// Zero-based day; shown as `day + 1`.
    pub day: usize,
    pub days: usize,
    pub activity: String,
    pub reflection: String,
    pub feedback: Option<Feedback>,
}

impl JourneyPage {
    pub fn open(ctx: &mut SessionContext) -> Result<Self, LoadError> {
        let days = ctx.cache.get_or_load(MODULE)?.data.len();
        let mut page = Self {
            day: 0,
            days,
            activity: String::new(),
            reflection: String::new(),
            feedback: None,
        };
        if let Some(cursor) = ctx.ensure_cursor(MODULE, days) {
            page.show(ctx, cursor);
        }
        Ok(page)
    }

    pub fn update(&mut self, ctx: &mut SessionContext, action: JourneyAction) -> Flow {
        let Some(mut cursor) = ctx.cursor(MODULE) else {
            return Flow::Stay;
        };

        match action {
            JourneyAction::PreviousDay => {
                if cursor.previous() {
                    self.show(ctx, cursor);
                }
            }
            JourneyAction::NextDay => {
                if cursor.next(self.days) {
                    self.show(ctx, cursor);
                }
            }
            JourneyAction::Complete => {
                let points = MODULE.points();
                ctx.profile.award(points);
                self.feedback = Some(Feedback::Success(format!(
                    "Peace of mind earned! +{} Points",
                    points
                )));
            }
        }
        Flow::Stay
    }

    fn show(&mut self, ctx: &mut SessionContext, cursor: Cursor) {
        ctx.set_cursor(MODULE, cursor);
        self.day = cursor.index();
        self.feedback = None;

        let language = ctx.profile.language;
        if let Some(loaded) = ctx.cache.get(MODULE) {
            self.activity = loaded.text(self.day, "Activity", language).unwrap_or("").to_string();
            self.reflection = loaded
                .text(self.day, "Reflection", language)
                .unwrap_or("")
                .to_string();
        }
    }
}
