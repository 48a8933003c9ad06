use std::fmt;

/// One of the learning modules reachable from the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    IgniteSpark,
    SdgExplorer,
    IdiomQuest,
    Trivia,
    Tutorials,
    Mindfulness,
}

impl ModuleKind {
    /// Hub menu order.
    pub const ALL: [ModuleKind; 6] = [
        ModuleKind::IgniteSpark,
        ModuleKind::SdgExplorer,
        ModuleKind::IdiomQuest,
        ModuleKind::Trivia,
        ModuleKind::Tutorials,
        ModuleKind::Mindfulness,
    ];

    /// Key the module's dataset is cached and configured under.
    pub fn key(self) -> &'static str {
        match self {
            ModuleKind::IgniteSpark => "ignite",
            ModuleKind::SdgExplorer => "sdg",
            ModuleKind::IdiomQuest => "idiom",
            ModuleKind::Trivia => "trivia",
            ModuleKind::Tutorials => "tutorial",
            ModuleKind::Mindfulness => "mindful",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ModuleKind::IgniteSpark => "Ignite Spark",
            ModuleKind::SdgExplorer => "SDG Explorer",
            ModuleKind::IdiomQuest => "Idiom Quest",
            ModuleKind::Trivia => "STEAM Trivia",
            ModuleKind::Tutorials => "Tutorial Zone",
            ModuleKind::Mindfulness => "Mindfulness Journey",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            ModuleKind::IgniteSpark => "Multiple-choice questions on your subject",
            ModuleKind::SdgExplorer => "Browse the 17 Sustainable Development Goals",
            ModuleKind::IdiomQuest => "Guess what the idiom means",
            ModuleKind::Trivia => "Think of the answer, then reveal it",
            ModuleKind::Tutorials => "Video lessons for your subject",
            ModuleKind::Mindfulness => "A ten day journey of calm",
        }
    }

    /// File name looked up in the data directory unless overridden in config.
    pub fn default_file(self) -> &'static str {
        match self {
            ModuleKind::IgniteSpark => "STEAMspark_Ignite_Spark_50_Questions.csv",
            ModuleKind::SdgExplorer => "STEAMspark_SDG_Explorer_Reference.csv",
            ModuleKind::IdiomQuest => "STEAMspark_IdiomQuest_50_Questions.csv",
            ModuleKind::Trivia => "STEAMspark_RandomTrivia_50_Unique_Questions.csv",
            ModuleKind::Tutorials => "STEAMspark_TutorialZone_Manifest.csv",
            ModuleKind::Mindfulness => "STEAMspark_Mindfulness_10_Day_Journey.csv",
        }
    }

    /// Points awarded per rewarded action in this module.
    pub fn points(self) -> u32 {
        match self {
            ModuleKind::IgniteSpark => 25,
            ModuleKind::SdgExplorer => 50,
            ModuleKind::IdiomQuest => 20,
            ModuleKind::Trivia => 10,
            ModuleKind::Tutorials => 0,
            ModuleKind::Mindfulness => 10,
        }
    }

    /// Whether the cursor starts at a random row (true) or the first row.
    pub fn random_start(self) -> bool {
        matches!(
            self,
            ModuleKind::IgniteSpark | ModuleKind::IdiomQuest | ModuleKind::Trivia
        )
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
