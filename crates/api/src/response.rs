//! Response bodies that are not plain entities.

use catchup_core::types::DbId;
use serde::Serialize;

/// Body of a successful `DELETE /medias/{id}`: `{ "deleted": <id> }`.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: DbId,
}
