//! CORS Config

use clap::Args;

/// Cross-origin settings.
#[derive(Debug, Args)]
pub struct CorsConfig {
    /// Allowed origins, comma separated (`*` allows any origin)
    #[arg(
        long = "cors-allow-origins",
        env = "CORS_ALLOW_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allow_origins: Vec<String>,

    /// Allowed methods, comma separated
    #[arg(
        long = "cors-allow-methods",
        env = "CORS_ALLOW_METHOD",
        value_delimiter = ',',
        default_value = "GET,POST,PUT,DELETE,OPTIONS"
    )]
    pub allow_methods: Vec<String>,
}
