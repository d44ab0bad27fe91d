pub mod plan {
    pub mod repository;
}
