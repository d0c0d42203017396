/// Error rendering and classification.
pub mod error;
