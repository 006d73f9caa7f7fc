//! Data-flow ports

use crate::errors::Result;
use crate::features::data_flow::domain::FunctionDataFlow;
use crate::features::operations::domain::FunctionBody;

/// A consumer of the uniform read/write contract.
///
/// Must only run on enriched bodies; `can_send_eth` is meaningless until
/// the value rider has been set or definitively left absent.
pub trait DefUseAnalyzer: Send + Sync {
    fn build(&self, body: &FunctionBody) -> Result<FunctionDataFlow>;
}
