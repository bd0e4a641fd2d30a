use super::{OracleFunction, OracleNamespace};
use std::collections::BTreeMap;
use std::sync::Arc;

/// In-process namespace mapping capability paths to functions.
#[derive(Clone, Default)]
pub struct StaticNamespace {
    functions: BTreeMap<String, Arc<dyn OracleFunction>>,
}

impl StaticNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, path: impl Into<String>, function: Arc<dyn OracleFunction>) -> Self {
        self.functions.insert(path.into(), function);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl OracleNamespace for StaticNamespace {
    fn lookup(&self, path: &str) -> Option<Arc<dyn OracleFunction>> {
        self.functions.get(path).cloned()
    }
}
