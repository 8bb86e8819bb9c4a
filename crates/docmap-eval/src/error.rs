use docmap_query::MatchError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("case {index}: {source}")]
    Match {
        index: usize,
        #[source]
        source: MatchError,
    },
    #[error("invalid input: {0}")]
    Input(String),
}
