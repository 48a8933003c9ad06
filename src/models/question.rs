/// A multiple-choice item derived from one dataset row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizItem {
    pub prompt: String,
    pub correct_answer: String,
    pub options: Vec<String>,
}

impl QuizItem {
    /// Exact string comparison against the correct answer.
    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.correct_answer
    }
}
