use std::sync::Arc;

use crate::scoring::Evaluator;
use crate::tagger::Tagger;

/// Shared handler state: the orchestrator and its read-only collaborators,
/// initialized once before the first request is served.
pub struct HandlerState<T: Tagger + 'static> {
    pub evaluator: Arc<Evaluator<T>>,
}

impl<T: Tagger + 'static> Clone for HandlerState<T> {
    fn clone(&self) -> Self {
        Self {
            evaluator: Arc::clone(&self.evaluator),
        }
    }
}

impl<T: Tagger + 'static> HandlerState<T> {
    pub fn new(evaluator: Arc<Evaluator<T>>) -> Self {
        Self { evaluator }
    }
}
