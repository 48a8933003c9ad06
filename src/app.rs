use crate::data::LoadError;
use crate::models::ModuleKind;
use crate::pages::{
    ChoiceAction, ChoicePage, ExplorerAction, ExplorerPage, Flow, HubAction, HubPage,
    JourneyAction, JourneyPage, TriviaAction, TriviaPage, TutorialAction, TutorialPage,
};
use crate::session::SessionContext;

/// What is on screen.
#[derive(Debug, Clone)]
pub enum Screen {
    Hub(HubPage),
    Quiz(ChoicePage),
    Trivia(TriviaPage),
    Explorer(ExplorerPage),
    Tutorials(TutorialPage),
    Journey(JourneyPage),
    /// The module's dataset could not be loaded.
    Unavailable { module: ModuleKind, message: String },
}

impl Screen {
    pub fn module(&self) -> Option<ModuleKind> {
        match self {
            Screen::Hub(_) => None,
            Screen::Quiz(page) => Some(page.module),
            Screen::Trivia(_) => Some(ModuleKind::Trivia),
            Screen::Explorer(_) => Some(ModuleKind::SdgExplorer),
            Screen::Tutorials(_) => Some(ModuleKind::Tutorials),
            Screen::Journey(_) => Some(ModuleKind::Mindfulness),
            Screen::Unavailable { module, .. } => Some(*module),
        }
    }
}

/// An action addressed to whichever page is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Hub(HubAction),
    Quiz(ChoiceAction),
    Trivia(TriviaAction),
    Explorer(ExplorerAction),
    Tutorials(TutorialAction),
    Journey(JourneyAction),
    BackToHub,
}

pub struct App {
    pub screen: Screen,
    pub ctx: SessionContext,
}

impl App {
    pub fn new(ctx: SessionContext) -> Self {
        Self {
            screen: Screen::Hub(HubPage::new()),
            ctx,
        }
    }

    pub fn on_hub(&self) -> bool {
        matches!(self.screen, Screen::Hub(_))
    }

    /// Apply `action` to the current page. Actions meant for another page are ignored.
    pub fn apply(&mut self, action: PageAction) {
        let ctx = &mut self.ctx;
        let flow = match (&mut self.screen, action) {
            (_, PageAction::BackToHub) => Flow::Hub,
            (Screen::Hub(page), PageAction::Hub(a)) => page.update(ctx, a),
            (Screen::Quiz(page), PageAction::Quiz(a)) => page.update(ctx, a),
            (Screen::Trivia(page), PageAction::Trivia(a)) => page.update(ctx, a),
            (Screen::Explorer(page), PageAction::Explorer(a)) => page.update(ctx, a),
            (Screen::Tutorials(page), PageAction::Tutorials(a)) => page.update(ctx, a),
            (Screen::Journey(page), PageAction::Journey(a)) => page.update(ctx, a),
            _ => Flow::Stay,
        };
        self.follow(flow);
    }

    fn follow(&mut self, flow: Flow) {
        match flow {
            Flow::Stay => {}
            Flow::Hub => {
                let hub = match self.screen.module() {
                    Some(module) => HubPage::focused_on(module),
                    None => return,
                };
                log::debug!("back to hub");
                self.screen = Screen::Hub(hub);
            }
            Flow::Open(module) => self.open(module),
        }
    }

    pub fn open(&mut self, module: ModuleKind) {
        log::debug!("opening {}", module.key());
        self.screen = match self.open_page(module) {
            Ok(screen) => screen,
            Err(err) => Screen::Unavailable {
                module,
                message: err.to_string(),
            },
        };
    }

    fn open_page(&mut self, module: ModuleKind) -> Result<Screen, LoadError> {
        let ctx = &mut self.ctx;
        Ok(match module {
            ModuleKind::IgniteSpark | ModuleKind::IdiomQuest => {
                Screen::Quiz(ChoicePage::open(ctx, module)?)
            }
            ModuleKind::Trivia => Screen::Trivia(TriviaPage::open(ctx)?),
            ModuleKind::SdgExplorer => Screen::Explorer(ExplorerPage::open(ctx)?),
            ModuleKind::Tutorials => Screen::Tutorials(TutorialPage::open(ctx)?),
            ModuleKind::Mindfulness => Screen::Journey(JourneyPage::open(ctx)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::fixtures::{session, table};

    fn goals() -> crate::data::Dataset {
        table(&["Goal", "Overview_EN"], &[&["Quality Education", "Learn"]])
    }

    fn tutorials() -> crate::data::Dataset {
        table(
            &["ID", "Subject", "Title_EN", "Link_EN"],
            &[&["1", "Science", "Cells", "https://video/cells"]],
        )
    }

    #[test]
    fn test_open_from_hub_and_back() {
        let mut app = App::new(session(vec![(ModuleKind::SdgExplorer, goals())]));
        app.apply(PageAction::Hub(HubAction::SelectNext));
        app.apply(PageAction::Hub(HubAction::Open));
        assert!(matches!(app.screen, Screen::Explorer(_)));

        app.apply(PageAction::BackToHub);
        match &app.screen {
            Screen::Hub(hub) => assert_eq!(hub.selected(), ModuleKind::SdgExplorer),
            other => panic!("expected hub, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_dataset_shows_unavailable() {
        let mut app = App::new(session(Vec::new()));
        app.open(ModuleKind::Trivia);
        match &app.screen {
            Screen::Unavailable { module, message } => {
                assert_eq!(*module, ModuleKind::Trivia);
                assert!(message.contains(ModuleKind::Trivia.default_file()));
            }
            other => panic!("expected unavailable screen, got {:?}", other),
        }
        app.apply(PageAction::BackToHub);
        assert!(app.on_hub());
    }

    #[test]
    fn test_explorer_links_to_tutorials() {
        let mut app = App::new(session(vec![
            (ModuleKind::SdgExplorer, goals()),
            (ModuleKind::Tutorials, tutorials()),
        ]));
        app.open(ModuleKind::SdgExplorer);
        app.apply(PageAction::Explorer(ExplorerAction::OpenTutorials));
        match &app.screen {
            Screen::Tutorials(page) => assert_eq!(page.lessons.len(), 1),
            other => panic!("expected tutorials, got {:?}", other),
        }
    }

    #[test]
    fn test_mismatched_action_is_ignored() {
        let mut app = App::new(session(vec![(ModuleKind::SdgExplorer, goals())]));
        app.apply(PageAction::Trivia(TriviaAction::Reveal));
        assert!(app.on_hub());
    }

    #[test]
    fn test_score_is_shared_across_pages() {
        let mut app = App::new(session(vec![(ModuleKind::SdgExplorer, goals())]));
        app.open(ModuleKind::SdgExplorer);
        app.apply(PageAction::Explorer(ExplorerAction::CollectBadge));
        app.apply(PageAction::BackToHub);
        app.apply(PageAction::Hub(HubAction::Open));
        assert_eq!(app.ctx.profile.score(), 50);
    }
}
