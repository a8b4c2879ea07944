mod quiz_vm;

pub use quiz_vm::{BoardVm, FeedbackVm, OptionState, OptionVm, QuestionVm, QuizVm};
