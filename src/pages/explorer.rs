use crate::data::{LoadError, LoadedDataset};
use crate::engine::Cursor;
use crate::models::{Language, ModuleKind};
use crate::session::SessionContext;

use super::{Feedback, Flow};

const MODULE: ModuleKind = ModuleKind::SdgExplorer;
const DEFAULT_CHALLENGE: &str = "Ready for a STEAM challenge?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerAction {
    Previous,
    Next,
    CollectBadge,
    OpenTutorials,
}

/// One Sustainable Development Goal as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdgCard {
    pub number: String,
    pub title: String,
    pub overview: String,
    pub challenge: String,
    pub icon: &'static str,
}

impl SdgCard {
    fn from_row(loaded: &LoadedDataset, row: usize, language: Language) -> Self {
        let title = loaded.plain(row, "Goal").unwrap_or("").to_string();
        let number = loaded
            .plain(row, "Goal_Number")
            .map(str::to_string)
            .unwrap_or_else(|| (row + 1).to_string());
        let challenge = loaded
            .text(row, "Challenge", language)
            .unwrap_or(DEFAULT_CHALLENGE)
            .to_string();

        Self {
            number,
            icon: goal_icon(&title),
            overview: loaded.text(row, "Overview", language).unwrap_or("").to_string(),
            challenge,
            title,
        }
    }
}

pub fn goal_icon(title: &str) -> &'static str {
    if title.contains("Life") || title.contains("Green") {
        "🌱"
    } else if title.contains("Water") {
        "💧"
    } else {
        "☀️"
    }
}

/// Sequential browser over the goals, one card at a time.
#[derive(Debug, Clone)]
pub struct ExplorerPage {
    pub index: usize,
    pub total: usize,
    pub card: Option<SdgCard>,
    pub feedback: Option<Feedback>,
}

impl ExplorerPage {
    pub fn open(ctx: &mut SessionContext) -> Result<Self, LoadError> {
        let total = ctx.cache.get_or_load(MODULE)?.data.len();
        let cursor = ctx.ensure_cursor(MODULE, total);
        let mut page = Self {
            index: 0,
            total,
            card: None,
            feedback: None,
        };
        if let Some(cursor) = cursor {
            page.show(ctx, cursor);
        }
        Ok(page)
    }

    pub fn update(&mut self, ctx: &mut SessionContext, action: ExplorerAction) -> Flow {
        let Some(mut cursor) = ctx.cursor(MODULE) else {
            return Flow::Stay;
        };

        match action {
            ExplorerAction::Previous => {
                if cursor.previous() {
                    self.show(ctx, cursor);
                }
            }
            ExplorerAction::Next => {
                if cursor.next(self.total) {
                    self.show(ctx, cursor);
                }
            }
            ExplorerAction::CollectBadge => {
                if let Some(card) = &self.card {
                    ctx.profile.award(MODULE.points());
                    self.feedback = Some(Feedback::Success(format!(
                        "You earned the {} Badge!",
                        card.title
                    )));
                }
            }
            ExplorerAction::OpenTutorials => return Flow::Open(ModuleKind::Tutorials),
        }
        Flow::Stay
    }

    fn show(&mut self, ctx: &mut SessionContext, cursor: Cursor) {
        ctx.set_cursor(MODULE, cursor);
        let language = ctx.profile.language;
        self.index = cursor.index();
        self.card = ctx
            .cache
            .get(MODULE)
            .map(|loaded| SdgCard::from_row(loaded, self.index, language));
        self.feedback = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::fixtures::{session, table};

    fn goals() -> crate::data::Dataset {
        table(
            &["Goal_Number", "Goal", "Overview_EN", "Overview_HA", "Challenge_EN"],
            &[
                &["1", "No Poverty", "End poverty", "Kawar da talauci", "Design a budget app"],
                &["6", "Clean Water", "Water for all", "Ruwa", "Build a filter"],
                &["15", "Life on Land", "Protect forests", "Dazuzzuka", ""],
            ],
        )
    }

    #[test]
    fn test_opens_on_first_goal() {
        let mut ctx = session(vec![(MODULE, goals())]);
        let page = ExplorerPage::open(&mut ctx).unwrap();
        let card = page.card.unwrap();
        assert_eq!(page.index, 0);
        assert_eq!(card.number, "1");
        assert_eq!(card.title, "No Poverty");
        assert_eq!(card.challenge, "Design a budget app");
        assert_eq!(card.icon, "☀️");
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut ctx = session(vec![(MODULE, goals())]);
        let mut page = ExplorerPage::open(&mut ctx).unwrap();
        page.update(&mut ctx, ExplorerAction::Previous);
        assert_eq!(page.index, 0);
        for _ in 0..5 {
            page.update(&mut ctx, ExplorerAction::Next);
            assert!(page.index < page.total);
        }
        assert_eq!(page.index, 2);
        assert_eq!(page.card.as_ref().unwrap().icon, "🌱");
        page.update(&mut ctx, ExplorerAction::Previous);
        assert_eq!(page.card.as_ref().unwrap().icon, "💧");
    }

    #[test]
    fn test_localized_overview_and_default_challenge() {
        let mut ctx = session(vec![(MODULE, goals())]);
        ctx.profile.language = Language::Hausa;
        let page = ExplorerPage::open(&mut ctx).unwrap();
        let card = page.card.unwrap();
        assert_eq!(card.overview, "Kawar da talauci");
        assert_eq!(card.challenge, DEFAULT_CHALLENGE);
    }

    #[test]
    fn test_badge_awards_fifty() {
        let mut ctx = session(vec![(MODULE, goals())]);
        let mut page = ExplorerPage::open(&mut ctx).unwrap();
        page.update(&mut ctx, ExplorerAction::CollectBadge);
        assert_eq!(ctx.profile.score(), 50);
        assert_eq!(
            page.feedback,
            Some(Feedback::Success("You earned the No Poverty Badge!".to_string()))
        );
    }

    #[test]
    fn test_goal_number_defaults_to_position() {
        let data = table(&["Goal", "Overview_EN"], &[&["Zero Hunger", "Feed everyone"]]);
        let mut ctx = session(vec![(MODULE, data)]);
        let page = ExplorerPage::open(&mut ctx).unwrap();
        assert_eq!(page.card.unwrap().number, "1");
    }

    #[test]
    fn test_link_to_tutorials() {
        let mut ctx = session(vec![(MODULE, goals())]);
        let mut page = ExplorerPage::open(&mut ctx).unwrap();
        assert_eq!(
            page.update(&mut ctx, ExplorerAction::OpenTutorials),
            Flow::Open(ModuleKind::Tutorials)
        );
    }
}
