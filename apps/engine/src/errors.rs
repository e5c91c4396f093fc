use thiserror::Error;

/// Engine-level error type.
///
/// Empty input is deliberately not represented here: operations with no
/// usable text degrade to zero-similarity results instead of failing.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested career does not exist in the loaded dataset.
    #[error("career not found: {0}")]
    CareerNotFound(String),

    /// The engine was built without a course catalog; course-dependent
    /// operations cannot run.
    #[error("course recommender unavailable: no course catalog loaded")]
    RecommenderUnavailable,

    /// Unexpected failure inside vectorization or clustering, caught at the
    /// operation boundary with the originating message attached.
    #[error("computation failed: {0}")]
    Computation(String),
}
