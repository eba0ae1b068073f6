use std::sync::Arc;

use anyhow::Result;
use doc_reminders_core::ReminderFilter;
use doc_reminders_service::ReminderService;
use doc_reminders_storage::StorageBackend;

use super::print_json;

pub(crate) async fn list(
    storage: Arc<StorageBackend>,
    document_id: Option<i64>,
    user_id: Option<i64>,
) -> Result<()> {
    let logs = ReminderService::new(storage)
        .list_reminders(ReminderFilter::new(document_id, user_id))
        .await?;
    print_json(&logs)
}
