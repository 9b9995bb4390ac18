use crate::core::patcher::patch_items;
use crate::core::seeded::seeded_folder;
use crate::core::{Collection, ConfigProvider, Pipeline, Storage, TransformResult};
use crate::utils::error::Result;
use crate::utils::format::to_collection_bytes;

pub struct CollectionPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CollectionPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CollectionPipeline<S, C> {
    async fn extract(&self) -> Result<Collection> {
        let path = self.config.collection_path();
        tracing::debug!("Reading collection from: {}", path);

        let data = self.storage.read_file(path).await?;
        tracing::debug!("Read {} bytes", data.len());

        Collection::from_slice(&data)
    }

    async fn transform(&self, mut collection: Collection) -> Result<TransformResult> {
        // 先確認頂層結構，再開始修改
        let items = collection.items_mut()?;
        let report = patch_items(items);

        let folder = seeded_folder();
        let inserted_requests = folder.item.len();
        items.insert(0, serde_json::to_value(&folder)?);
        tracing::debug!(
            "Inserted '{}' with {} requests at the top of the collection",
            folder.name,
            inserted_requests
        );

        Ok(TransformResult {
            collection,
            report,
            inserted_requests,
        })
    }

    async fn load(&self, result: &TransformResult) -> Result<String> {
        let path = self.config.collection_path();

        // 整份輸出先在記憶體中完成，失敗時原檔不會被截斷
        let data = to_collection_bytes(result.collection.root(), self.config.escape_non_ascii())?;

        tracing::debug!("Writing {} bytes to {}", data.len(), path);
        self.storage.write_file(path, &data).await?;

        Ok(path.to_string())
    }
}
