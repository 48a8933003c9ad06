use crate::data::LoadError;
use crate::models::ModuleKind;
use crate::session::SessionContext;

use super::{Feedback, Flow};

const MODULE: ModuleKind = ModuleKind::Trivia;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriviaAction {
    Reveal,
    /// The learner says they knew the answer. Only honoured once revealed.
    ClaimPoints,
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriviaCard {
    pub question: String,
    pub answer: String,
}

/// Free-recall trivia: the answer stays hidden until revealed.
#[derive(Debug, Clone)]
pub struct TriviaPage {
    pub card: Option<TriviaCard>,
    pub revealed: bool,
    pub feedback: Option<Feedback>,
    row_count: usize,
}

impl TriviaPage {
    pub fn open(ctx: &mut SessionContext) -> Result<Self, LoadError> {
        let row_count = ctx.cache.get_or_load(MODULE)?.data.len();
        let mut page = Self {
            card: None,
            revealed: false,
            feedback: None,
            row_count,
        };
        if let Some(cursor) = ctx.ensure_cursor(MODULE, row_count) {
            page.card = card_at(ctx, cursor.index());
        }
        Ok(page)
    }

    pub fn update(&mut self, ctx: &mut SessionContext, action: TriviaAction) -> Flow {
        if self.card.is_none() {
            return Flow::Stay;
        }

        match action {
            TriviaAction::Reveal => self.revealed = true,
            TriviaAction::ClaimPoints if self.revealed => {
                let points = MODULE.points();
                ctx.profile.award(points);
                self.feedback = Some(Feedback::Success(format!("Points Added! +{}", points)));
            }
            TriviaAction::ClaimPoints => {}
            TriviaAction::Next => {
                if let Some(mut cursor) = ctx.cursor(MODULE) {
                    cursor.reroll(self.row_count, &mut ctx.rng);
                    ctx.set_cursor(MODULE, cursor);
                    self.card = card_at(ctx, cursor.index());
                }
                self.revealed = false;
                self.feedback = None;
            }
        }
        Flow::Stay
    }
}

fn card_at(ctx: &SessionContext, row: usize) -> Option<TriviaCard> {
    let language = ctx.profile.language;
    let loaded = ctx.cache.get(MODULE)?;
    Some(TriviaCard {
        question: loaded.text(row, "Question", language)?.to_string(),
        answer: loaded.text(row, "Answer", language)?.to_string(),
    })
}
