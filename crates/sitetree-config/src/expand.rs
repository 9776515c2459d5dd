//! `${VAR}` expansion for string values read from `sitetree.toml`.
//!
//! `${VAR}` must be set; `${VAR:-default}` falls back to `default`. Values
//! without a `${` sequence are left alone, so a bare `$name` in a directory
//! name stays literal.

use std::env::VarError;

use crate::{ConfigError, SourceConfigRaw};

impl SourceConfigRaw {
    /// Expand every string value of the `[source]` table in place.
    ///
    /// Errors name the offending field, e.g. `source.extensions[1]`.
    pub(crate) fn expand_env(&mut self) -> Result<(), ConfigError> {
        if let Some(dir) = self.dir.as_mut() {
            expand_in_place(dir, "source.dir")?;
        }
        for (i, ext) in self.extensions.iter_mut().flatten().enumerate() {
            expand_in_place(ext, &format!("source.extensions[{i}]"))?;
        }
        Ok(())
    }
}

fn expand_in_place(value: &mut String, field: &str) -> Result<(), ConfigError> {
    if !value.contains("${") {
        return Ok(());
    }

    let expanded = shellexpand::env_with_context(value.as_str(), lookup_var)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })?
        .into_owned();

    tracing::trace!(field, value = %expanded, "Expanded environment variables");
    *value = expanded;
    Ok(())
}

fn lookup_var(name: &str) -> Result<Option<String>, VarError> {
    std::env::var(name).map(Some)
}
