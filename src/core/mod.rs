//! Core modules for Footprint

pub mod estimator;
pub mod questionnaire;
pub mod chart;
pub mod api;

pub use estimator::EmissionsEstimator;
pub use questionnaire::{Questionnaire, Question, QuestionKind, QUESTIONS};
pub use chart::{render_chart, headline, ChartStyle};
pub use api::{create_router, run_server};
