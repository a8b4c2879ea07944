#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod import_service;
pub mod quiz;
pub mod share_service;

pub use globetrotter_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, ImportError, QuizError};
pub use import_service::{DatasetImportService, ImportReport};
pub use quiz::{AnswerEffects, NoEffects, QuizController, QuizDeck, QuizLoopService};
pub use share_service::ShareService;
