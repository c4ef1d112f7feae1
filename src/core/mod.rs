pub mod etl;
pub mod flatten;
pub mod pipeline;
pub mod query;

pub use crate::domain::model::{Binding, BindingValue, FlatRecord, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
