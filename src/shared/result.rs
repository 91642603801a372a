/// Crate-wide result alias backed by `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
