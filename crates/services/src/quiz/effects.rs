/// Visual reaction to an answer (celebration or cross overlay).
///
/// Implemented by the presentation layer; the controller invokes it once per
/// accepted answer.
pub trait AnswerEffects {
    fn play(&self, is_correct: bool);
}

/// Effects sink that does nothing. Used when no presentation layer is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEffects;

impl AnswerEffects for NoEffects {
    fn play(&self, _is_correct: bool) {}
}

impl<F: Fn(bool)> AnswerEffects for F {
    fn play(&self, is_correct: bool) {
        self(is_correct);
    }
}
