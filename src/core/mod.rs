pub mod engine;
pub mod patcher;
pub mod pipeline;
pub mod seeded;

pub use crate::domain::model::{Collection, PatchReport, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
