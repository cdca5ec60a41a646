use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Outcome of one handler invocation.
///
/// Handlers report intent through this type rather than a distinguished
/// panic or error subtype: `ExitRequested` asks the surrounding pipeline to
/// stop without marking the job failed, `Failed` reports a genuine failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    Success,
    ExitRequested(String),
    Failed(String),
}

/// Handler invoked when the host executes a job. Receives the host-supplied
/// arguments and runs synchronously within that RPC call.
pub type JobHandler = Arc<dyn Fn(HashMap<String, String>) -> ExecutionOutcome + Send + Sync>;

/// A job as supplied by the plugin author. Immutable once handed to the
/// registry.
#[derive(Clone)]
pub struct JobDefinition {
    pub title: String,
    pub description: String,
    pub priority: i64,
    pub handler: JobHandler,
}

impl JobDefinition {
    pub fn new(
        title: impl Into<String>,
        handler: impl Fn(HashMap<String, String>) -> ExecutionOutcome + Send + Sync + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            priority: 0,
            handler: Arc::new(handler),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }
}

impl fmt::Debug for JobDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobDefinition")
            .field("title", &self.title)
            .field("description", &self.description)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}
