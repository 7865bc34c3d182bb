use anyhow::Context as _;

/// Add context to read errors
pub fn read_context(source: &str) -> String {
    format!("Failed to read from: {}", source)
}

/// Add context to write errors
pub fn write_context(target: &str) -> String {
    format!("Failed to write to: {}", target)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Wrap result with read context
pub fn with_read_context<T, E>(result: Result<T, E>, source: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(read_context(source))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type))
}
