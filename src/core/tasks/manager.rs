use std::{
    future::Future,
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::core::{
    http::{
        Action,
        ApiClient,
        Completion,
    },
    models::{
        ApiResponse,
        CropData,
    },
    AgriError,
};

type Notifier = Arc<dyn Fn() + Send + Sync>;

/// Runs requests off the UI thread and hands their results back through a channel.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    client: ApiClient,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    notifier: Option<Notifier>,
}

impl TaskManager {
    pub fn new(client: ApiClient) -> Result<Self, AgriError> {
        let runtime = Runtime::new().map_err(|e| AgriError::Runtime(e.to_string()))?;
        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime: Arc::new(runtime), client, receiver, sender, notifier: None })
    }

    /// Called after every result is sent, e.g. to wake the UI.
    pub fn set_notifier(&mut self, notifier: impl Fn() + Send + Sync + 'static) {
        self.notifier = Some(Arc::new(notifier));
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    pub fn analyze(&self, data: CropData) {
        self.spawn(Action::Analyze, move |client| async move { client.analyze(&data).await });
    }

    pub fn retrain(&self) {
        self.spawn(Action::Retrain, |client| async move { client.retrain().await });
    }

    fn spawn<F, Fut>(&self, action: Action, request: F)
    where
        F: FnOnce(ApiClient) -> Fut + Send + 'static,
        Fut: Future<Output = Result<ApiResponse, AgriError>>,
    {
        let sender = self.sender.clone();
        let runtime = self.runtime.clone();
        let client = self.client.clone();
        let notifier = self.notifier.clone();

        thread::spawn(move || {
            let result = runtime.block_on(request(client));

            match &result {
                Ok(_) => tracing::info!(action = action.name(), "Request completed"),
                Err(e) => tracing::error!(action = action.name(), error = %e, "Request failed"),
            }

            let completion = Completion::from_result(result, action);
            let _ = sender.send(TaskResult::new(action, completion));

            if let Some(notify) = notifier {
                notify();
            }
        });
    }
}
