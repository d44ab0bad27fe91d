#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.food_not_found")]
    NotFound(String),
    #[error("catalog.duplicated_id")]
    DuplicatedId(String),
    #[error("catalog.invalid_item")]
    InvalidItem(String),
    #[error("catalog.source_unavailable")]
    SourceUnavailable,
    #[error("catalog.invalid_format")]
    InvalidFormat,
}
