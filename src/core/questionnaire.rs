//! Questionnaire: the ordered question flow feeding the estimator
//!
//! Eleven questions, one at a time. Navigation never leaves the range
//! of the question list; answers survive moving back and forth.

use serde::Serialize;
use crate::core::EmissionsEstimator;
use crate::types::{
    RawAnswers, EmissionsBreakdown, InvalidInputError,
    CarType, HeatingSource, ClothingFrequency, Recycling,
};

/// How a question is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Free text that must parse as a number
    Number,
    /// One of a fixed set of labels
    Choice { choices: &'static [&'static str] },
    /// Integer slider
    Scale { min: u8, max: u8 },
}

/// A single question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Field key in `RawAnswers`
    pub key: &'static str,
    pub prompt: &'static str,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// All questions, in asking order
pub static QUESTIONS: [Question; 11] = [
    Question {
        key: "hours_driving",
        prompt: "How many hours do you drive per day?",
        kind: QuestionKind::Number,
    },
    Question {
        key: "public_transport_trips",
        prompt: "Number of public transport trips per week:",
        kind: QuestionKind::Number,
    },
    Question {
        key: "domestic_flights",
        prompt: "Number of domestic flights per year:",
        kind: QuestionKind::Number,
    },
    Question {
        key: "international_flights",
        prompt: "Number of international flights per year:",
        kind: QuestionKind::Number,
    },
    Question {
        key: "meat_meals_per_week",
        prompt: "Number of meat meals per week:",
        kind: QuestionKind::Number,
    },
    Question {
        key: "new_devices_per_year",
        prompt: "Number of new electronic devices purchased per year:",
        kind: QuestionKind::Number,
    },
    Question {
        key: "car_type",
        prompt: "Car type:",
        kind: QuestionKind::Choice { choices: CarType::LABELS },
    },
    Question {
        key: "heating_cooling_source",
        prompt: "Primary source of heating/cooling:",
        kind: QuestionKind::Choice { choices: HeatingSource::LABELS },
    },
    Question {
        key: "clothing_purchase_frequency",
        prompt: "How often do you purchase new clothing or household items?",
        kind: QuestionKind::Choice { choices: ClothingFrequency::LABELS },
    },
    Question {
        key: "energy_consciousness",
        prompt: "On a scale of 1-5, how conscious are you about energy usage?",
        kind: QuestionKind::Scale { min: 1, max: crate::ENERGY_CONSCIOUSNESS_MAX },
    },
    Question {
        key: "recycling",
        prompt: "Do you actively recycle?",
        kind: QuestionKind::Choice { choices: Recycling::LABELS },
    },
];

/// Position in the question flow plus the answers given so far
#[derive(Debug, Clone)]
pub struct Questionnaire {
    index: usize,
    answers: RawAnswers,
    estimator: EmissionsEstimator,
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::new()
    }
}

impl Questionnaire {
    /// Start at the first question with default answers
    pub fn new() -> Self {
        Self {
            index: 0,
            answers: RawAnswers::default(),
            estimator: EmissionsEstimator::new(),
        }
    }

    pub fn current(&self) -> &'static Question {
        &QUESTIONS[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// (1-based position, question count)
    pub fn progress(&self) -> (usize, usize) {
        (self.index + 1, QUESTIONS.len())
    }

    pub fn is_last(&self) -> bool {
        self.index == QUESTIONS.len() - 1
    }

    /// Current stored answer text
    pub fn current_answer(&self) -> &str {
        self.answers.field(self.current().key).unwrap_or_default()
    }

    /// Record text for the current question
    pub fn answer(&mut self, text: &str) {
        if let Some(field) = self.answers.field_mut(self.current().key) {
            *field = text.trim().to_string();
        }
    }

    /// Advance; false when already at the last question
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Go back; false when already at the first question
    pub fn previous(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Jump back to the first question, keeping answers
    pub fn restart(&mut self) {
        self.index = 0;
    }

    pub fn raw_answers(&self) -> &RawAnswers {
        &self.answers
    }

    /// Estimate from the answers collected so far
    pub fn calculate(&self) -> Result<EmissionsBreakdown, InvalidInputError> {
        self.estimator.estimate_raw(&self.answers)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_question_maps_to_a_field() {
        let raw = RawAnswers::default();
        for q in QUESTIONS.iter() {
            assert!(raw.field(q.key).is_some(), "no field for {}", q.key);
        }
    }

    #[test]
    fn test_navigation_bounds() {
        let mut q = Questionnaire::new();
        assert_eq!(q.progress(), (1, 11));
        assert!(!q.previous());
        assert_eq!(q.index(), 0);

        let mut steps = 0;
        while q.next() {
            steps += 1;
        }
        assert_eq!(steps, 10);
        assert!(q.is_last());
        assert_eq!(q.progress(), (11, 11));
        assert!(!q.next());

        assert!(q.previous());
        assert_eq!(q.index(), 9);
    }

    #[test]
    fn test_answers_survive_navigation() {
        let mut q = Questionnaire::new();
        q.answer(" 2 ");
        q.next();
        q.previous();
        assert_eq!(q.current_answer(), "2");
        assert_eq!(q.raw_answers().hours_driving, "2");
    }

    #[test]
    fn test_calculate_full_run() {
        let mut q = Questionnaire::new();
        let answers = ["1", "0", "0", "0", "0", "0", "Electric", "None", "", "0", "No"];
        for (i, text) in answers.iter().enumerate() {
            q.answer(text);
            if i + 1 < answers.len() {
                assert!(q.next());
            }
        }
        let b = q.calculate().unwrap();
        assert!((b.total - (4562.5 + 1800.0)).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_unanswered_is_invalid() {
        let q = Questionnaire::new();
        assert_eq!(q.calculate(), Err(InvalidInputError));
    }

    #[test]
    fn test_restart_keeps_answers() {
        let mut q = Questionnaire::new();
        q.answer("3");
        q.next();
        q.next();
        q.restart();
        assert_eq!(q.index(), 0);
        assert_eq!(q.current_answer(), "3");
    }
}
