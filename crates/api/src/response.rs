//! Shared response envelope for catalog and helper endpoints.
//!
//! Generation endpoints return a bare `GenerationResult`; everything else
//! wraps its payload as `{ "data": ... }`.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
