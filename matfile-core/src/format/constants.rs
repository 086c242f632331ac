//! Format constants for dense matrix files

/// Canonical file extension for dense matrix files
pub const FILE_EXTENSION: &str = "matrix";

/// Extension used for in-progress writes before the final rename
pub const TMP_EXTENSION: &str = "tmp";
