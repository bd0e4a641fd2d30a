mod judge_internal;

use crate::config::{CuratorConfig, OracleProvider};
use crate::errors::JudgeError;
use crate::identity::AccountId;
use crate::model::{DiagnosticRecord, EvaluationRequest, EvaluationResult};
use crate::oracle::http::HttpOracle;
use crate::oracle::{OracleAdapter, OracleNamespace, StaticNamespace};
use crate::storage::CuratorState;
use std::sync::Arc;

/// The evaluation service. Owns the gallery and both caches; the only way to
/// mutate them is [`JudgeService::judge_content`].
///
/// Writes take `&mut self`: the hosting environment serializes calls, and
/// the borrow checker holds us to a single writer.
pub struct JudgeService {
    config: CuratorConfig,
    adapter: OracleAdapter,
    state: CuratorState,
}

impl JudgeService {
    pub fn new(
        config: CuratorConfig,
        namespace: Arc<dyn OracleNamespace>,
    ) -> Result<Self, JudgeError> {
        let state = CuratorState::new(&config);
        Self::with_state(config, namespace, state)
    }

    pub fn with_state(
        config: CuratorConfig,
        namespace: Arc<dyn OracleNamespace>,
        state: CuratorState,
    ) -> Result<Self, JudgeError> {
        config.validate()?;
        Ok(Self {
            config,
            adapter: OracleAdapter::new(namespace),
            state,
        })
    }

    /// Builds the oracle namespace described by `config.oracle`.
    pub fn namespace_from_config(config: &CuratorConfig) -> Result<StaticNamespace, JudgeError> {
        let ns = StaticNamespace::new();
        Ok(match config.oracle.provider {
            OracleProvider::None => ns,
            OracleProvider::Openai => ns.register(
                config.oracle.variant.clone(),
                Arc::new(HttpOracle::from_config(&config.oracle)?),
            ),
        })
    }

    pub fn state(&self) -> &CuratorState {
        &self.state
    }

    pub fn into_state(self) -> CuratorState {
        self.state
    }

    /// Evaluates one submission. Returns `Ok(true)` once validation passes;
    /// oracle failures are absorbed by the fallback scorer. A validation
    /// error leaves all state untouched.
    pub async fn judge_content(&mut self, request: EvaluationRequest) -> Result<bool, JudgeError> {
        judge_internal::run::judge_content_impl(self, request).await
    }

    /// Cached result for `account`, or the empty-result document.
    pub fn get_last_result(&self, account: &str) -> String {
        AccountId::parse(account)
            .ok()
            .and_then(|id| self.state.results.get(&id).map(str::to_string))
            .unwrap_or_else(|| {
                serde_json::to_string(&EvaluationResult::empty()).unwrap_or_default()
            })
    }

    /// Cached diagnostic record for `account`, or `{"error":"no debug",...}`.
    pub fn get_last_debug(&self, account: &str) -> String {
        AccountId::parse(account)
            .ok()
            .and_then(|id| self.state.debug.get(&id).map(str::to_string))
            .unwrap_or_else(|| {
                serde_json::to_string(&DiagnosticRecord::missing()).unwrap_or_default()
            })
    }

    /// The gallery as a JSON array, oldest first.
    pub fn get_gallery(&self) -> String {
        serde_json::to_string(&self.state.gallery.list()).unwrap_or_else(|_| "[]".to_string())
    }
}
