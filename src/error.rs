use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("no value of type `{type_name}` is bound in the environment; insert one with `Environment::with` before building this view")]
    MissingBinding { type_name: &'static str },
}

pub type Result<T, E = LayoutError> = std::result::Result<T, E>;
