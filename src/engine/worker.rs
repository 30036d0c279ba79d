use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

// Only import thread on non-WASM targets
#[cfg(not(target_arch = "wasm32"))]
use {std::thread, tokio::runtime::Runtime};

use super::messages::{JobRequest, JobResult};

#[cfg(debug_assertions)]
use crate::config::DF;
use crate::data::ResultsClient;
use crate::utils::AppInstant;

/// Runs results requests off the UI thread and hands the outcomes back through a channel
/// drained once per frame.
pub struct ResultsWorker {
    #[cfg(not(target_arch = "wasm32"))]
    job_tx: Sender<JobRequest>,
    #[cfg(target_arch = "wasm32")]
    client: Arc<dyn ResultsClient>,
    #[cfg(target_arch = "wasm32")]
    result_tx: Sender<JobResult>,
    result_rx: Receiver<JobResult>,
}

impl ResultsWorker {
    /// NATIVE: spawns a background thread owning a Tokio runtime.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(client: Arc<dyn ResultsClient>) -> Self {
        let (job_tx, job_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();
        spawn_worker_thread(client, job_rx, result_tx);
        Self { job_tx, result_rx }
    }

    /// WASM: requests run as local futures on the browser event loop.
    #[cfg(target_arch = "wasm32")]
    pub fn new(client: Arc<dyn ResultsClient>) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        Self {
            client,
            result_tx,
            result_rx,
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn submit(&self, job: JobRequest) {
        if self.job_tx.send(job).is_err() {
            log::error!("Results worker is gone; request dropped");
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn submit(&self, job: JobRequest) {
        let client = Arc::clone(&self.client);
        let tx = self.result_tx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let _ = tx.send(process_request(client.as_ref(), job).await);
        });
    }

    /// All results that arrived since the last call.
    pub fn drain(&self) -> Vec<JobResult> {
        self.result_rx.try_iter().collect()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_worker_thread(
    client: Arc<dyn ResultsClient>,
    rx: Receiver<JobRequest>,
    tx: Sender<JobResult>,
) {
    thread::spawn(move || {
        let rt = match Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to create runtime for results worker: {}", e);
                return;
            }
        };
        while let Ok(job) = rx.recv() {
            let result = rt.block_on(process_request(client.as_ref(), job));
            if tx.send(result).is_err() {
                break;
            }
        }
    });
}

async fn process_request(client: &dyn ResultsClient, job: JobRequest) -> JobResult {
    let start = AppInstant::now();
    let outcome = client.fetch_results(&job.request).await;
    let duration_ms = start.elapsed().as_millis();

    #[cfg(debug_assertions)]
    if DF.log_requests {
        log::info!(
            "{:?} request for {} games took {}ms ({})",
            job.purpose,
            job.request.games.len(),
            duration_ms,
            if outcome.is_ok() { "ok" } else { "failed" }
        );
    }

    JobResult {
        purpose: job.purpose,
        generation: job.generation,
        duration_ms,
        outcome,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::data::{ClientError, ResultsRequest, ResultsResponse};
    use crate::engine::messages::JobPurpose;
    use async_trait::async_trait;
    use std::time::Duration;

    struct FailingClient;

    #[async_trait]
    impl ResultsClient for FailingClient {
        async fn fetch_results(&self, _: &ResultsRequest) -> Result<ResultsResponse, ClientError> {
            Err(ClientError::Status(500))
        }
    }

    #[test]
    fn results_come_back_through_the_channel() {
        let worker = ResultsWorker::new(Arc::new(FailingClient));
        worker.submit(JobRequest {
            purpose: JobPurpose::Poll,
            generation: 3,
            request: ResultsRequest {
                player_name: "hero".into(),
                games: Vec::new(),
                aliases: Vec::new(),
            },
        });

        let result = worker
            .result_rx
            .recv_timeout(Duration::from_secs(5))
            .unwrap();
        assert_eq!(result.purpose, JobPurpose::Poll);
        assert_eq!(result.generation, 3);
        assert_eq!(result.outcome.unwrap_err(), ClientError::Status(500));
        assert!(worker.drain().is_empty());
    }
}
