use crate::domain::model::{Collection, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn collection_path(&self) -> &str;
    fn escape_non_ascii(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Collection>;
    async fn transform(&self, collection: Collection) -> Result<TransformResult>;
    async fn load(&self, result: &TransformResult) -> Result<String>;
}
