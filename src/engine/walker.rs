use std::sync::atomic::Ordering;

use futures::future::{join_all, BoxFuture, FutureExt};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::engine::classify::Classification;
use crate::engine::pool::ScanContext;
use crate::probe::{probe_url, transport_error_kind};

/// Walk one discovered branch: re-run the whole dictionary under `prefix`,
/// spawning a child walker for every new directory found while the depth
/// budget allows. Each branch carries its own `depth` copy.
///
/// Boxed because the future type recurses through its own spawns.
pub fn walk_branch(ctx: ScanContext, prefix: String, depth: usize) -> BoxFuture<'static, ()> {
    async move {
        debug!(%prefix, depth, "walking branch");
        let mut children: Vec<JoinHandle<()>> = Vec::new();
        for word in ctx.dictionary.iter() {
            let relative = format!("{}/{}", prefix, word);
            let url = format!("{}{}", ctx.config.target, relative);
            if !ctx.seen.check_and_mark(&url) {
                debug!(%url, "already probed, skipping");
                continue;
            }
            // Branch probes never follow redirects, so one outcome answers
            // both "what do we report" and "is this a directory".
            let outcome = match probe_url(&ctx.classify_client, &url).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    ctx.stats.skipped_errors.fetch_add(1, Ordering::Relaxed);
                    warn!(%url, kind = transport_error_kind(&e), error = %e, "probe failed, skipping");
                    continue;
                }
            };
            ctx.stats.probes.fetch_add(1, Ordering::Relaxed);
            let class = Classification::of(&outcome);
            ctx.record(&class);
            ctx.reporter.emit(&relative, &class);
            if class.is_directory() && depth < ctx.config.max_depth {
                let branch_url = format!("{}{}/", ctx.config.target, relative);
                if ctx.seen.check_and_mark(&branch_url) {
                    children.push(tokio::spawn(walk_branch(ctx.clone(), relative.clone(), depth + 1)));
                }
            }
        }
        join_all(children).await;
        debug!(%prefix, depth, "branch finished");
    }
    .boxed()
}
