use crate::data::LoadError;
use crate::engine::select_subject;
use crate::models::ModuleKind;
use crate::session::SessionContext;

use super::Flow;

const MODULE: ModuleKind = ModuleKind::Tutorials;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialAction {
    SelectPrevious,
    SelectNext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub title: String,
    pub link: String,
}

impl Lesson {
    /// The video URL, if the manifest holds a usable one.
    pub fn video_url(&self) -> Option<&str> {
        self.link.contains("http").then_some(self.link.as_str())
    }
}

/// Lesson list for the learner's interest. There is no fallback subject here:
/// an interest without lessons shows an empty list.
#[derive(Debug, Clone)]
pub struct TutorialPage {
    pub subject: String,
    pub lessons: Vec<Lesson>,
    pub selected: usize,
}

impl TutorialPage {
    pub fn open(ctx: &mut SessionContext) -> Result<Self, LoadError> {
        let language = ctx.profile.language;
        let interest = ctx.profile.interest.clone();
        let loaded = ctx.cache.get_or_load(MODULE)?;

        let selection = select_subject(&loaded.data, &interest, None);
        let lessons = selection
            .rows
            .iter()
            .map(|&row| Lesson {
                title: loaded.text(row, "Title", language).unwrap_or("").to_string(),
                link: loaded.text(row, "Link", language).unwrap_or("").trim().to_string(),
            })
            .collect();

        Ok(Self {
            subject: selection.subject,
            lessons,
            selected: 0,
        })
    }

    pub fn current(&self) -> Option<&Lesson> {
        self.lessons.get(self.selected)
    }

    pub fn update(&mut self, _ctx: &mut SessionContext, action: TutorialAction) -> Flow {
        let count = self.lessons.len();
        if count == 0 {
            return Flow::Stay;
        }
        match action {
            TutorialAction::SelectPrevious => self.selected = self.selected.saturating_sub(1),
            TutorialAction::SelectNext => self.selected = (self.selected + 1).min(count - 1),
        }
        Flow::Stay
    }
}
