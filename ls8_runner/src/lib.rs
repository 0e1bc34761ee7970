pub mod loader;

pub type AppResult<T> = anyhow::Result<T>;
