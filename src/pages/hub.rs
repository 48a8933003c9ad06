use crate::models::ModuleKind;
use crate::session::SessionContext;

use super::Flow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubAction {
    SelectPrevious,
    SelectNext,
    Open,
    CycleLanguage,
    CycleInterest,
}

/// Module menu plus the learner's profile settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HubPage {
    selected: usize,
}

impl HubPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hub with the cursor on `module`, used when coming back from it.
    pub fn focused_on(module: ModuleKind) -> Self {
        Self {
            selected: ModuleKind::ALL.iter().position(|m| *m == module).unwrap_or(0),
        }
    }

    pub fn selected(&self) -> ModuleKind {
        ModuleKind::ALL[self.selected]
    }

    pub fn update(&mut self, ctx: &mut SessionContext, action: HubAction) -> Flow {
        let count = ModuleKind::ALL.len();
        match action {
            HubAction::SelectPrevious => self.selected = (self.selected + count - 1) % count,
            HubAction::SelectNext => self.selected = (self.selected + 1) % count,
            HubAction::Open => return Flow::Open(self.selected()),
            HubAction::CycleLanguage => {
                ctx.profile.cycle_language();
                log::info!("language set to {}", ctx.profile.language);
            }
            HubAction::CycleInterest => {
                ctx.profile.cycle_interest();
                log::info!("interest set to {}", ctx.profile.interest);
            }
        }
        Flow::Stay
    }
}
