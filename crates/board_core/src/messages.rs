use serde::{Deserialize, Serialize};

/// User-visible strings. Defaults are the Russian texts the board ships with;
/// every entry can be replaced from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub form_success: String,
    pub form_failed: String,
    pub form_transport_failed: String,
    pub post_status_changed: String,
    pub response_status_changed: String,
    pub status_change_failed: String,
    pub notification_marked: String,
    pub notifications_marked: String,
    pub notification_failed: String,
    pub load_failed: String,
    pub submitting_label: String,
    pub loading_label: String,
    pub confirm_delete: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            form_success: "Операция выполнена успешно!".to_string(),
            form_failed: "Произошла ошибка!".to_string(),
            form_transport_failed: "Произошла ошибка при отправке формы".to_string(),
            post_status_changed: "Статус объявления изменен".to_string(),
            response_status_changed: "Статус отклика изменен".to_string(),
            status_change_failed: "Ошибка при изменении статуса".to_string(),
            notification_marked: "Уведомление помечено как прочитанное".to_string(),
            notifications_marked: "Уведомления помечены как прочитанные".to_string(),
            notification_failed: "Ошибка при обновлении уведомлений".to_string(),
            load_failed: "Ошибка при загрузке содержимого".to_string(),
            submitting_label: "Отправка...".to_string(),
            loading_label: "Загрузка...".to_string(),
            confirm_delete: "Вы уверены, что хотите удалить?".to_string(),
        }
    }
}
