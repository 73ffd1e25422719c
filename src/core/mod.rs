pub mod citation;
pub mod naming;
pub mod processor;

pub use crate::domain::model::{FileOutcome, RunSummary};
pub use crate::domain::ports::{ConfigProvider, Storage, TextCleaner};
pub use crate::utils::error::Result;
