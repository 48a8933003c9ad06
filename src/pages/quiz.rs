use crate::data::LoadError;
use crate::engine::{FALLBACK_SUBJECT, build_options, select_subject};
use crate::models::{ModuleKind, QuizItem};
use crate::session::SessionContext;

use super::{Feedback, Flow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceAction {
    SelectPrevious,
    SelectNext,
    Submit,
    Next,
}

/// Multiple-choice page shared by Ignite Spark and Idiom Quest.
#[derive(Debug, Clone)]
pub struct ChoicePage {
    pub module: ModuleKind,
    /// Effective subject, for subject-filtered modules.
    pub subject: Option<String>,
    /// Shown above the question, e.g. when the subject fell back.
    pub notice: Option<Feedback>,
    /// `None` when the view has no rows.
    pub item: Option<QuizItem>,
    pub selected: usize,
    pub feedback: Option<Feedback>,
    rows: Vec<usize>,
}

impl ChoicePage {
    pub fn open(ctx: &mut SessionContext, module: ModuleKind) -> Result<Self, LoadError> {
        let interest = ctx.profile.interest.clone();
        let loaded = ctx.cache.get_or_load(module)?;

        let (rows, subject, notice) = match module {
            ModuleKind::IgniteSpark => {
                let selection = select_subject(&loaded.data, &interest, Some(FALLBACK_SUBJECT));
                let notice = selection.fell_back.then(|| {
                    Feedback::Warning(format!(
                        "No questions found for {}. Showing all {} questions instead.",
                        interest, selection.subject
                    ))
                });
                (selection.rows, Some(selection.subject), notice)
            }
            _ => (loaded.data.all_rows(), None, None),
        };

        let mut page = Self {
            module,
            subject,
            notice,
            item: None,
            selected: 0,
            feedback: None,
            rows,
        };
        if let Some(cursor) = ctx.ensure_cursor(module, page.rows.len()) {
            page.item = page.build_item(ctx, cursor.index());
        }
        Ok(page)
    }

    pub fn update(&mut self, ctx: &mut SessionContext, action: ChoiceAction) -> Flow {
        let Some(item) = &self.item else {
            return Flow::Stay;
        };
        let count = item.options.len();

        match action {
            ChoiceAction::SelectPrevious => self.selected = (self.selected + count - 1) % count,
            ChoiceAction::SelectNext => self.selected = (self.selected + 1) % count,
            ChoiceAction::Submit => self.feedback = Some(self.submit(ctx)),
            ChoiceAction::Next => self.advance(ctx),
        }
        Flow::Stay
    }

    fn submit(&self, ctx: &mut SessionContext) -> Feedback {
        let Some(item) = &self.item else {
            return Feedback::Warning("Nothing to answer.".to_string());
        };
        let choice = item.options.get(self.selected).map(String::as_str).unwrap_or("");

        if item.is_correct(choice) {
            let points = self.module.points();
            ctx.profile.award(points);
            match self.module {
                ModuleKind::IdiomQuest => Feedback::Success("Correct!".to_string()),
                _ => Feedback::Success(format!("Correct! You've earned {} points!", points)),
            }
        } else {
            log::debug!("wrong answer '{}' in {}", choice, self.module.key());
            match self.module {
                ModuleKind::IdiomQuest => Feedback::Failure(format!(
                    "Not quite. The correct meaning is: {}",
                    item.correct_answer
                )),
                _ => Feedback::Failure(format!(
                    "Not quite. The correct answer was: {}",
                    item.correct_answer
                )),
            }
        }
    }

    fn advance(&mut self, ctx: &mut SessionContext) {
        let Some(mut cursor) = ctx.cursor(self.module) else {
            return;
        };
        cursor.reroll(self.rows.len(), &mut ctx.rng);
        ctx.set_cursor(self.module, cursor);

        self.item = self.build_item(ctx, cursor.index());
        self.selected = 0;
        self.feedback = None;
    }

    /// Derive the question for the `position`-th row of this page's view.
    fn build_item(&self, ctx: &mut SessionContext, position: usize) -> Option<QuizItem> {
        let (prompt_field, answer_field) = match self.module {
            ModuleKind::IdiomQuest => ("Idiom", "Meaning"),
            _ => ("Question", "Answer"),
        };
        let language = ctx.profile.language;
        let loaded = ctx.cache.get(self.module)?;
        let row = *self.rows.get(position)?;

        let prompt = loaded.text(row, prompt_field, language).unwrap_or("");
        let answer_column = loaded.schema.index(answer_field, language)?;
        let correct = loaded.data.cell(row, answer_column);
        let options = build_options(
            correct,
            loaded.data.column_values(&self.rows, answer_column),
            &mut ctx.rng,
        );

        Some(QuizItem {
            prompt: prompt.to_string(),
            correct_answer: correct.to_string(),
            options,
        })
    }
}
