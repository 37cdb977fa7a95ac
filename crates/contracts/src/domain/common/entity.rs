use serde::de::DeserializeOwned;
use std::fmt::Debug;

use super::RecordId;
use crate::shared::filter::ListFilter;
use crate::shared::form::FormModel;
use crate::shared::list::SortState;
use crate::system::permissions::Module;

/// Трейт для записи, которую можно показать в списке
///
/// Определяет данные экземпляра и статические метаданные сущности.
pub trait Entity: Clone + Debug + PartialEq + DeserializeOwned + Send + Sync + 'static {
    type Id: RecordId;

    /// Typed filter of the list endpoint
    type Filter: ListFilter;

    /// Create/update body; also drives the view/edit form
    type Form: FormModel + for<'a> From<&'a Self>;

    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    fn id(&self) -> &Self::Id;

    /// Человекочитаемое название записи (для подтверждения удаления и вкладок)
    fn description(&self) -> String;

    /// Бизнес-код, если он есть
    fn code(&self) -> Option<&str> {
        None
    }

    fn email(&self) -> Option<&str> {
        None
    }

    /// Ключ записи: стабильная строка, по которой форма отслеживает смену записи
    fn record_key(&self) -> String {
        self.id().as_str().to_string()
    }

    // ============================================================================
    // Метаданные класса
    // ============================================================================

    /// Индекс сущности в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (например, "organization")
    fn collection_name() -> &'static str;

    fn module() -> Module;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    /// Path segment of the REST resource
    fn api_path() -> &'static str {
        Self::module().as_str()
    }

    /// Records that can only be listed and viewed
    fn is_read_only() -> bool {
        false
    }

    fn default_sort() -> Option<SortState> {
        None
    }

    /// Полное имя сущности (например, "a001_organization")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
