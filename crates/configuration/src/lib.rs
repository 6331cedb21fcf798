use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean, public-facing API.
pub use error::ConfigError;
pub use settings::{Config, CrossoverParams, Instrument};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file, deserializes it into our strongly-typed `Config`
/// struct, validates it, and returns it.
pub fn load_config() -> Result<Config, ConfigError> {
    load_from(Path::new("config.toml"))
}

/// Loads and validates the configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path))
        // Optionally, one could add environment variables here as well.
        // .add_source(config::Environment::with_prefix("APP"));
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;

    // Reject nonsensical parameters before anything downstream sees them.
    config.validate()?;

    Ok(config)
}
