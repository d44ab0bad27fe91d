#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NutritionError {
    #[error("nutrition.invalid_kcal")]
    InvalidKcal,
    #[error("nutrition.negative_macro")]
    NegativeMacro,
    #[error("nutrition.macro_mismatch")]
    MacroMismatch,
}
