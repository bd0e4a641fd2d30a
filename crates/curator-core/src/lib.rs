pub mod config;
pub mod errors;
pub mod extract;
pub mod fallback;
pub mod identity;
pub mod judge;
pub mod model;
pub mod oracle;
pub mod storage;
pub mod text;

pub use config::{CuratorConfig, OracleConfig};
pub use errors::{JudgeError, OracleError};
pub use identity::AccountId;
pub use judge::JudgeService;
pub use model::{
    CanonicalMode, DiagnosticRecord, EvaluationRequest, EvaluationResult, GalleryEntry,
};
