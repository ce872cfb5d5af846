use crate::app::strategies::{FormatStrategy, NetworkStrategy, RemoteStrategy};
use crate::domain::model::FieldMap;
use crate::domain::ports::TraceStrategy;
use crate::utils::error::{LookupError, Result, StrategyError};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tokio_util::task::AbortOnDropHandle;

/// Result of a successful trace together with the strategy that produced it.
#[derive(Debug, Clone)]
pub struct Trace {
    pub strategy: &'static str,
    pub fields: FieldMap,
}

/// Tries an ordered list of strategies and returns the first usable result.
pub struct TracingResolver {
    strategies: Vec<Arc<dyn TraceStrategy>>,
}

impl TracingResolver {
    pub fn new(strategies: Vec<Arc<dyn TraceStrategy>>) -> Self {
        Self { strategies }
    }

    /// 預設順序：遠端查詢（若有）→ 國家/網路推測 → 基本格式
    pub fn with_defaults(remote: Option<RemoteStrategy>) -> Self {
        let mut strategies: Vec<Arc<dyn TraceStrategy>> = Vec::with_capacity(3);
        if let Some(remote) = remote {
            strategies.push(Arc::new(remote));
        }
        strategies.push(Arc::new(NetworkStrategy::new()));
        strategies.push(Arc::new(FormatStrategy::new()));
        Self::new(strategies)
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|strategy| strategy.name()).collect()
    }

    pub async fn resolve(&self, query: &str) -> Result<Trace> {
        self.resolve_with_cancel(query, &CancellationToken::new()).await
    }

    pub async fn resolve_with_cancel(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Trace> {
        for strategy in &self.strategies {
            if cancel.is_cancelled() {
                return Err(LookupError::Cancelled);
            }

            let name = strategy.name();
            tracing::debug!("🔍 Trying strategy '{}' for {}", name, query);

            // 每個策略在獨立 task 上執行；取消或呼叫端丟棄 future 時都會 abort 進行中的請求
            let task_strategy = Arc::clone(strategy);
            let task_query = query.to_string();
            let mut handle = AbortOnDropHandle::new(tokio::spawn(async move {
                task_strategy.attempt(&task_query).await
            }));

            let joined = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    handle.abort();
                    tracing::info!("🛑 Trace for {} cancelled during '{}'", query, name);
                    return Err(LookupError::Cancelled);
                }
                joined = &mut handle => joined,
            };

            let failure = match joined {
                Ok(Ok(fields)) if !fields.is_empty() => {
                    tracing::info!("✅ Strategy '{}' traced {}", name, query);
                    return Ok(Trace {
                        strategy: name,
                        fields,
                    });
                }
                Ok(Ok(_)) => StrategyError::NoUsableFields,
                Ok(Err(e)) => e,
                Err(join_error) => StrategyError::Panicked(join_error.to_string()),
            };
            tracing::warn!("⚠️ Strategy '{}' failed: {}", name, failure);
        }

        tracing::error!(
            "❌ All {} strategies failed for {}",
            self.strategies.len(),
            query
        );
        Err(LookupError::Exhausted {
            attempted: self.strategies.len(),
        })
    }
}
