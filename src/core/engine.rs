use crate::core::{PatchReport, Pipeline};
use crate::utils::error::Result;

/// Outcome of a single run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub collection_path: Option<String>,
    pub report: PatchReport,
    pub inserted_requests: usize,
    pub top_level_items: usize,
}

impl RunSummary {
    pub fn written(&self) -> bool {
        self.collection_path.is_some()
    }
}

pub struct UpdateEngine<P: Pipeline> {
    pipeline: P,
    dry_run: bool,
}

impl<P: Pipeline> UpdateEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Loading collection...");
        let collection = self.pipeline.extract().await?;
        let before = collection.items()?.len();
        tracing::info!("Loaded collection with {} top-level items", before);

        tracing::info!("Updating requests...");
        let result = self.pipeline.transform(collection).await?;
        let top_level_items = result.collection.items()?.len();
        tracing::info!(
            "Patched {} of {} requests, top-level items {} -> {}",
            result.report.patched.len(),
            result.report.requests_visited,
            before,
            top_level_items
        );

        let collection_path = if self.dry_run {
            tracing::info!("Dry run, collection left unchanged");
            None
        } else {
            tracing::info!("Saving collection...");
            let path = self.pipeline.load(&result).await?;
            tracing::info!("Collection saved to: {}", path);
            Some(path)
        };

        Ok(RunSummary {
            collection_path,
            report: result.report,
            inserted_requests: result.inserted_requests,
            top_level_items,
        })
    }
}
