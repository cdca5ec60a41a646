use std::pin::Pin;
use std::sync::Arc;

use tokio_stream::wrappers::ReceiverStream;
use tonic::{Request, Response, Status};

use crate::job::ExecutionOutcome;
use crate::proto::plugin_server::Plugin;
use crate::proto::{Empty, Job, JobResult};
use crate::registry::{JobRegistry, RegisteredJob};

/// gRPC service dispatching host requests against the job registry.
pub struct PluginService {
    registry: Arc<JobRegistry>,
}

impl PluginService {
    pub fn new(registry: Arc<JobRegistry>) -> Self {
        Self { registry }
    }
}

fn job_to_proto(job: &RegisteredJob) -> Job {
    Job {
        unique_id: job.id,
        title: job.title.clone(),
        description: job.description.clone(),
        priority: job.priority,
        args: Default::default(),
    }
}

type JobStream = Pin<Box<dyn tokio_stream::Stream<Item = Result<Job, Status>> + Send>>;

#[tonic::async_trait]
impl Plugin for PluginService {
    type GetJobsStream = JobStream;

    async fn get_jobs(
        &self,
        _request: Request<Empty>,
    ) -> Result<Response<Self::GetJobsStream>, Status> {
        let jobs: Vec<Job> = self.registry.iter().map(job_to_proto).collect();

        let (tx, rx) = tokio::sync::mpsc::channel(32);
        tokio::spawn(async move {
            for job in jobs {
                if tx.send(Ok(job)).await.is_err() {
                    // Host disconnected
                    break;
                }
            }
        });

        let stream = ReceiverStream::new(rx);
        Ok(Response::new(Box::pin(stream) as Self::GetJobsStream))
    }

    async fn execute_job(&self, request: Request<Job>) -> Result<Response<JobResult>, Status> {
        let req = request.into_inner();

        // Only an unidentifiable job is an RPC-level error. Handler outcomes
        // below are carried in the payload so one misbehaving job cannot
        // fail the server or sibling calls.
        let job = self
            .registry
            .get(req.unique_id)
            .ok_or_else(|| Status::not_found("job not found in plugin"))?;

        tracing::debug!(id = job.id, title = %job.title, "Executing job");

        let handler = job.handler.clone();
        let outcome = tokio::task::spawn_blocking(move || handler(req.args))
            .await
            .map_err(|e| Status::internal(format!("job handler panicked: {}", e)))?;

        let result = match outcome {
            ExecutionOutcome::Success => JobResult {
                unique_id: job.id,
                message: String::new(),
                failed: false,
                exit_pipeline: false,
            },
            ExecutionOutcome::ExitRequested(message) => {
                tracing::info!(id = job.id, title = %job.title, "Job requested pipeline exit");
                JobResult {
                    unique_id: job.id,
                    message,
                    failed: false,
                    exit_pipeline: true,
                }
            }
            ExecutionOutcome::Failed(message) => {
                tracing::warn!(id = job.id, title = %job.title, error = %message, "Job handler failed");
                JobResult {
                    unique_id: job.id,
                    message,
                    failed: true,
                    exit_pipeline: true,
                }
            }
        };

        Ok(Response::new(result))
    }
}
