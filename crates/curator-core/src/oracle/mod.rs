//! Oracle adapter: discovers one of several known capability names in the
//! hosting environment and invokes it, degrading the argument set when the
//! capability rejects it.

pub mod fake;
pub mod http;
pub mod namespace;

use crate::errors::OracleError;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

pub use namespace::StaticNamespace;

/// Closure producing the prompt text handed to the oracle.
pub type PromptFn = dyn Fn() -> String + Send + Sync;

/// Optional keyword-style context describing the evaluation job.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OracleContext {
    pub task: Option<String>,
    pub criteria: Option<String>,
}

impl OracleContext {
    pub fn new(task: impl Into<String>, criteria: impl Into<String>) -> Self {
        Self {
            task: Some(task.into()),
            criteria: Some(criteria.into()),
        }
    }

    /// Number of optional arguments carried.
    pub fn arity(&self) -> usize {
        usize::from(self.task.is_some()) + usize::from(self.criteria.is_some())
    }

    fn without_criteria(&self) -> Self {
        Self {
            task: self.task.clone(),
            criteria: None,
        }
    }
}

/// What an oracle hands back.
#[derive(Clone, Debug, PartialEq)]
pub enum OracleOutput {
    /// Already organized as a record; used directly.
    Record(serde_json::Value),
    /// Free-form text that still needs extraction.
    Text(String),
}

/// A single invocable capability exposed by the environment.
///
/// Implementations return `OracleError::SignatureMismatch` when they do not
/// accept the optional arguments they were given.
#[async_trait]
pub trait OracleFunction: Send + Sync {
    async fn invoke(
        &self,
        prompt: &PromptFn,
        context: &OracleContext,
    ) -> Result<OracleOutput, OracleError>;
}

/// The environment's oracle namespace.
pub trait OracleNamespace: Send + Sync {
    /// Resolves a flat name (`eq_prompt`) or a sub-namespace path
    /// (`eq_principle.run`) to something invocable.
    fn lookup(&self, path: &str) -> Option<Arc<dyn OracleFunction>>;
}

/// A known capability name, optionally inside a sub-namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OracleVariant {
    pub namespace: Option<&'static str>,
    pub name: &'static str,
}

impl OracleVariant {
    const fn flat(name: &'static str) -> Self {
        Self {
            namespace: None,
            name,
        }
    }

    const fn nested(namespace: &'static str, name: &'static str) -> Self {
        Self {
            namespace: Some(namespace),
            name,
        }
    }

    pub fn path(&self) -> String {
        match self.namespace {
            Some(ns) => format!("{ns}.{}", self.name),
            None => self.name.to_string(),
        }
    }
}

impl fmt::Display for OracleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Probe order. The first present candidate wins.
pub const KNOWN_VARIANTS: &[OracleVariant] = &[
    OracleVariant::flat("eq_principle_prompt_non_comparative"),
    OracleVariant::flat("eq_principle_prompt"),
    OracleVariant::flat("eq_prompt"),
    OracleVariant::flat("eq_principle_non_comparative"),
    OracleVariant::nested("eq_principle", "prompt_non_comparative"),
    OracleVariant::nested("eq_principle", "prompt"),
    OracleVariant::nested("eq_principle", "run"),
    OracleVariant::nested("eq_principle", "call"),
    OracleVariant::nested("eq", "prompt_non_comparative"),
    OracleVariant::nested("eq", "prompt"),
    OracleVariant::nested("eq", "run"),
    OracleVariant::nested("eq", "call"),
];

/// Whether `path` names one of the known candidates.
pub fn is_known_variant(path: &str) -> bool {
    KNOWN_VARIANTS.iter().any(|v| v.path() == path)
}

/// Discovery over a namespace.
#[derive(Clone)]
pub struct OracleAdapter {
    namespace: Arc<dyn OracleNamespace>,
}

/// The capability picked by discovery, kept for the rest of the call.
#[derive(Clone)]
pub struct SelectedOracle {
    pub variant: OracleVariant,
    function: Arc<dyn OracleFunction>,
}

impl OracleAdapter {
    pub fn new(namespace: Arc<dyn OracleNamespace>) -> Self {
        Self { namespace }
    }

    pub fn discover(&self) -> Result<SelectedOracle, OracleError> {
        for variant in KNOWN_VARIANTS {
            if let Some(function) = self.namespace.lookup(&variant.path()) {
                debug!(variant = %variant, "oracle capability discovered");
                return Ok(SelectedOracle {
                    variant: *variant,
                    function,
                });
            }
        }
        Err(OracleError::NoOracleAvailable)
    }
}

impl SelectedOracle {
    /// Calls with the full context, then without `criteria`, then with the
    /// closure only. Only a signature mismatch triggers the next attempt;
    /// any other error is returned as-is.
    pub async fn invoke(
        &self,
        prompt: &PromptFn,
        context: &OracleContext,
    ) -> Result<OracleOutput, OracleError> {
        let attempts = [context.clone(), context.without_criteria()];
        for args in attempts.iter() {
            match self.function.invoke(prompt, args).await {
                Err(OracleError::SignatureMismatch(reason)) => {
                    debug!(
                        variant = %self.variant,
                        arity = args.arity(),
                        %reason,
                        "oracle rejected argument set, degrading"
                    );
                }
                other => return other,
            }
        }
        self.function
            .invoke(prompt, &OracleContext::default())
            .await
    }
}
