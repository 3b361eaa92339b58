use crate::core::http::{
    Action,
    Completion,
};

#[derive(Debug, Clone)]
pub enum TaskResult {
    Analyzed(Completion),
    Retrained(Completion),
}

impl TaskResult {
    pub fn new(action: Action, completion: Completion) -> Self {
        match action {
            Action::Analyze => TaskResult::Analyzed(completion),
            Action::Retrain => TaskResult::Retrained(completion),
        }
    }

    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::Analyzed(_) => "analyze",
            TaskResult::Retrained(_) => "retrain",
        }
    }

    pub fn into_completion(self) -> Completion {
        match self {
            TaskResult::Analyzed(completion) | TaskResult::Retrained(completion) => completion,
        }
    }
}
