use base_rc::{Dictionary, DictionaryError, DictionaryRegistry};
use std::path::Path;

use crate::cli::global::GlobalArgs;

/// Loads the bundled dictionaries, the user and local overrides, then the
/// file named by `--dictionaries` if any.
pub fn load_registry(global: &GlobalArgs) -> Result<DictionaryRegistry, Box<dyn std::error::Error>> {
    let mut registry = DictionaryRegistry::load_with_overrides()?;

    if let Some(path) = &global.dictionaries {
        let expanded = shellexpand::tilde(path);
        let extra = DictionaryRegistry::load_from_file(Path::new(expanded.as_ref()))
            .map_err(|e| format!("cannot load dictionaries from '{}': {}", path, e))?;
        tracing::debug!(path = %expanded, dictionaries = extra.dictionaries.len(), "loaded dictionaries file");
        registry.merge(extra);
    }

    Ok(registry)
}

/// Helper function to create dictionary from config
pub fn create_dictionary(
    config: &DictionaryRegistry,
    name: Option<&str>,
) -> Result<Dictionary, Box<dyn std::error::Error>> {
    let name = name.unwrap_or_else(|| config.default_dictionary_name());
    tracing::debug!(dictionary = name, "using dictionary");

    config.dictionary(name).map_err(|e| match e {
        DictionaryError::NotFound(not_found) => not_found.into(),
        invalid => format!("invalid dictionary '{}': {}", name, invalid).into(),
    })
}
