pub mod method;
pub mod transport;
pub mod types;

pub use method::{json_type_name, MethodFamily, ResultKind, RpcMethod};
pub use transport::{HttpTransport, RpcTransport, TimedResponse};
pub use types::{JsonRpcRequest, JsonRpcResponse, RpcErrorObject};

use std::{sync::Arc, time::Duration};

use crate::error::ProbeError;

pub fn get_transport(net_url: &str, timeout: Duration) -> Result<Arc<HttpTransport>, ProbeError> {
    Ok(Arc::new(HttpTransport::new(net_url, timeout)?))
}
