use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::future::join_all;
use parking_lot::Mutex;
use reqwest::Client;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::ScanConfig;
use crate::engine::classify::{classify_directory, Classification};
use crate::engine::seen::SeenSet;
use crate::engine::walker::walk_branch;
use crate::http_client::{build_classify_client, build_probe_client};
use crate::output::Reporter;
use crate::probe::{probe_url, transport_error_kind, ProbeOutcome};

/// Counters shared by every worker and walker.
#[derive(Debug, Default)]
pub struct EngineStats {
    pub probes: AtomicUsize,
    pub skipped_errors: AtomicUsize,
    pub directories: AtomicUsize,
    pub hits: AtomicUsize,
}

/// Snapshot of the counters after the run has drained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub probes: usize,
    pub skipped_errors: usize,
    pub directories: usize,
    pub hits: usize,
}

/// Shared handles threaded through workers and branch walkers. Cheap to
/// clone: everything is an `Arc` or a pooled client.
#[derive(Clone)]
pub struct ScanContext {
    pub config: Arc<ScanConfig>,
    pub dictionary: Arc<Vec<String>>,
    pub seen: Arc<SeenSet>,
    /// Probe client with the run's configured redirect policy.
    pub probe_client: Client,
    /// No-follow client for branch walks and directory classification.
    pub classify_client: Client,
    pub reporter: Arc<Reporter>,
    pub stats: Arc<EngineStats>,
}

impl ScanContext {
    pub(crate) fn record(&self, class: &Classification) {
        match class {
            Classification::Directory => {
                self.stats.directories.fetch_add(1, Ordering::Relaxed);
            }
            Classification::Status(200) => {
                self.stats.hits.fetch_add(1, Ordering::Relaxed);
            }
            _ => {}
        }
    }
}

/// Never spawn more workers than there are words to hand them.
pub fn effective_workers(requested: usize, words: usize) -> usize {
    requested.min(words)
}

/// The enumeration engine: a fixed pool of workers draining the top-level
/// job queue, spawning one walker per discovered directory branch.
pub struct ScanEngine {
    config: Arc<ScanConfig>,
    probe_client: Client,
    classify_client: Client,
    seen: Arc<SeenSet>,
    reporter: Arc<Reporter>,
    stats: Arc<EngineStats>,
}

impl ScanEngine {
    pub fn new(config: ScanConfig, reporter: Reporter) -> Self {
        let probe_client = build_probe_client(config.follow_redirects, config.timeout_secs);
        let classify_client = build_classify_client(config.timeout_secs);
        Self {
            config: Arc::new(config),
            probe_client,
            classify_client,
            seen: Arc::new(SeenSet::new()),
            reporter: Arc::new(reporter),
            stats: Arc::new(EngineStats::default()),
        }
    }

    /// Drain the whole dictionary and every branch discovered under it.
    /// Returns once the worker pool and all spawned walkers have finished.
    pub async fn run(&self, dictionary: Vec<String>) -> ScanSummary {
        let effective = effective_workers(self.config.workers, dictionary.len());
        if effective < self.config.workers {
            warn!(
                requested = self.config.workers,
                effective, "more workers than words, clamping pool"
            );
        }

        let jobs = Arc::new(Mutex::new(VecDeque::from(dictionary.clone())));
        let dictionary = Arc::new(dictionary);

        let mut workers: Vec<JoinHandle<()>> = Vec::with_capacity(effective);
        for worker_id in 0..effective {
            let ctx = self.context(dictionary.clone());
            let jobs = jobs.clone();
            workers.push(tokio::spawn(drain_jobs(worker_id, jobs, ctx)));
        }
        join_all(workers).await;

        self.summary()
    }

    fn context(&self, dictionary: Arc<Vec<String>>) -> ScanContext {
        ScanContext {
            config: self.config.clone(),
            dictionary,
            seen: self.seen.clone(),
            probe_client: self.probe_client.clone(),
            classify_client: self.classify_client.clone(),
            reporter: self.reporter.clone(),
            stats: self.stats.clone(),
        }
    }

    fn summary(&self) -> ScanSummary {
        ScanSummary {
            probes: self.stats.probes.load(Ordering::Relaxed),
            skipped_errors: self.stats.skipped_errors.load(Ordering::Relaxed),
            directories: self.stats.directories.load(Ordering::Relaxed),
            hits: self.stats.hits.load(Ordering::Relaxed),
        }
    }
}

/// One top-level worker: pop candidates until the queue is empty, probe and
/// classify each, spawn a branch walker per newly discovered directory.
async fn drain_jobs(worker_id: usize, jobs: Arc<Mutex<VecDeque<String>>>, ctx: ScanContext) {
    debug!(worker_id, "worker started");
    let mut branches: Vec<JoinHandle<()>> = Vec::new();
    loop {
        // Non-blocking dequeue: the queue is fully loaded before any worker
        // starts, so an empty queue means no more top-level work.
        let word = match jobs.lock().pop_front() {
            Some(word) => word,
            None => break,
        };
        let url = format!("{}{}", ctx.config.target, word);
        if !ctx.seen.check_and_mark(&url) {
            debug!(%url, "already probed, skipping");
            continue;
        }
        let outcome = match probe_url(&ctx.probe_client, &url).await {
            Ok(outcome) => outcome,
            Err(e) => {
                ctx.stats.skipped_errors.fetch_add(1, Ordering::Relaxed);
                warn!(%url, kind = transport_error_kind(&e), error = %e, "probe failed, skipping");
                continue;
            }
        };
        ctx.stats.probes.fetch_add(1, Ordering::Relaxed);
        let class = resolve_classification(&ctx, &url, &outcome).await;
        ctx.record(&class);
        ctx.reporter.emit(&word, &class);
        if class.is_directory() && ctx.config.recursive {
            // The seen-set is the single spawn gate: whichever worker marks
            // the slash form first owns the branch.
            let branch_url = format!("{}{}/", ctx.config.target, word);
            if ctx.seen.check_and_mark(&branch_url) {
                branches.push(tokio::spawn(walk_branch(ctx.clone(), word.clone(), 1)));
            }
        }
    }
    // Second barrier: this worker's branches, and transitively theirs.
    join_all(branches).await;
    debug!(worker_id, "worker finished");
}

/// In no-follow mode the probe outcome alone decides. In follow mode the
/// pooled client already chased any redirect, so when recursion needs the
/// answer a dedicated no-follow probe re-checks the original URL; it runs
/// only when a redirect actually happened.
async fn resolve_classification(ctx: &ScanContext, url: &str, outcome: &ProbeOutcome) -> Classification {
    if !ctx.config.follow_redirects {
        return Classification::of(outcome);
    }
    if ctx.config.recursive
        && outcome.redirected
        && classify_directory(&ctx.classify_client, url).await
    {
        return Classification::Directory;
    }
    Classification::Status(outcome.status)
}
