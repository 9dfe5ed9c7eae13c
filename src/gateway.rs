//! The persistence boundary.
//!
//! The core never sees transport details. It hands a [`MasterStepRequest`]
//! to a gateway implementation and receives a [`MasterStepRecord`] back;
//! HTTP, retries, and auth all live on the other side of this trait.
//! Persistence is fire-and-forget from the core's perspective: a failed save
//! is reported upward, the document is never rolled back.

use crate::error::GatewayError;
use crate::wire::{MasterStepRecord, MasterStepRequest};

pub trait PersistenceGateway {
    /// Fetches the backend's nested tree for one service.
    fn load_flow(&self, service_code: &str) -> Result<MasterStepRecord, GatewayError>;

    /// Persists the nested tree built from the current document.
    fn save_flow(
        &self,
        service_code: &str,
        request: &MasterStepRequest,
    ) -> Result<(), GatewayError>;
}
