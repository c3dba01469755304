//! Shared response DTOs.
//!
//! Request DTOs live next to their handlers; these are the little
//! acknowledgment shapes several endpoints share.

use serde::Serialize;

/// `{"success": true, "id": n}` - creation acknowledgment.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: i64,
}

impl CreatedResponse {
    pub fn new(id: i64) -> Self {
        CreatedResponse { success: true, id }
    }
}

/// `{"success": true}` - mutation acknowledgment with nothing to report.
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub success: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        OkResponse { success: true }
    }
}

/// `{"success": true, "deleted": n}` - deletion with row count. A count of
/// 0 still ships as success (except suppliers, which 404 instead).
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: u64,
}

impl DeletedResponse {
    pub fn new(deleted: u64) -> Self {
        DeletedResponse { success: true, deleted }
    }
}

/// `{"mensaje": "...", "ventaId": n}` - sale registration confirmation.
#[derive(Debug, Serialize)]
pub struct RegisterSaleResponse {
    #[serde(rename = "mensaje")]
    pub message: &'static str,

    #[serde(rename = "ventaId")]
    pub sale_id: i64,
}
