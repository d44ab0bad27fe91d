/// Failures reported by plan storage adapters.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// No plan with that id belongs to the requesting user.
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
}
