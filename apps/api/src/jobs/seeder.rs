//! Job seeding: lazily bootstraps the catalog from an external content source.
//!
//! Slots are keyed by `(title, company)`: re-seeding with different content
//! for an occupied slot is skipped, not stored as a variant.

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::jobs::source::ContentSource;
use crate::jobs::templates::template_for;
use crate::store::Store;

/// Upstream items considered per seeding run.
pub const SEED_BATCH_LIMIT: usize = 30;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct SeedReport {
    created: usize,
    skipped: usize,
}

/// Seeds the catalog only when it is empty. Returns the number of jobs
/// created; never fails.
pub async fn ensure_seeded(store: &dyn Store, source: &dyn ContentSource) -> usize {
    match store.count_jobs().await {
        Ok(0) => populate_jobs(store, source).await,
        Ok(_) => 0,
        Err(e) => {
            error!("Could not count jobs before seeding: {e:?}");
            0
        }
    }
}

/// Fetches content and inserts one job per item. Errors are logged and
/// reported as zero jobs created.
pub async fn populate_jobs(store: &dyn Store, source: &dyn ContentSource) -> usize {
    match try_populate(store, source).await {
        Ok(report) => {
            info!(
                "Job seeding finished: {} created, {} slots already occupied",
                report.created, report.skipped
            );
            report.created
        }
        Err(e) => {
            error!("Job seeding failed: {e:?}");
            0
        }
    }
}

async fn try_populate(store: &dyn Store, source: &dyn ContentSource) -> Result<SeedReport> {
    let items = source
        .fetch_items()
        .await
        .context("fetching seed content")?;

    let mut report = SeedReport::default();
    for (index, item) in items.iter().take(SEED_BATCH_LIMIT).enumerate() {
        let job = template_for(index).to_job(&item.body);
        if store.insert_job_if_absent(&job).await? {
            report.created += 1;
        } else {
            report.skipped += 1;
        }
    }
    Ok(report)
}
