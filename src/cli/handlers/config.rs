use crate::cli::{args::ConfigAction, config::create_dictionary};
use base_rc::DictionaryRegistry;

pub fn handle(
    action: ConfigAction,
    config: &DictionaryRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::List { json } => handle_list(json, config),
        ConfigAction::Show { dictionary } => handle_show(&dictionary, config),
    }
}

fn handle_list(json: bool, config: &DictionaryRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let names = config.names();
    let default_name = config.default_dictionary_name();

    // JSON output
    if json {
        let dictionaries: Vec<serde_json::Value> = names
            .iter()
            .filter_map(|name| config.get_dictionary(name).map(|entry| (name, entry)))
            .map(|(name, entry)| {
                serde_json::json!({
                    "name": name,
                    "size": entry.size(),
                    "description": entry.description,
                })
            })
            .collect();
        let output = serde_json::json!({
            "default": default_name,
            "dictionaries": dictionaries,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let width = names.iter().map(String::len).max().unwrap_or(0);
    for name in &names {
        let Some(entry) = config.get_dictionary(name) else {
            continue;
        };
        let marker = if name == default_name { "*" } else { " " };
        println!(
            "{} {:width$}  {:>3}  {}",
            marker,
            name,
            entry.size(),
            entry.description.as_deref().unwrap_or(""),
        );
    }
    println!("\n* default dictionary; use --json for structured output");

    Ok(())
}

fn handle_show(
    dict_name: &str,
    config: &DictionaryRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let dictionary = create_dictionary(config, Some(dict_name))?;
    let dict_config = config
        .get_dictionary(dict_name)
        .ok_or_else(|| format!("Dictionary '{}' not found", dict_name))?;
    let precision = dictionary.precision();

    // Display dictionary details
    println!("Dictionary: {}", dict_name);
    if let Some(description) = &dict_config.description {
        println!("  Description: {}", description);
    }

    // Show character set info
    if !dict_config.chars.is_empty() {
        println!("  Type: Explicit character set");
    } else if let (Some(start), Some(length)) = (&dict_config.start, dict_config.length) {
        println!("  Type: Range-based");
        println!(
            "  Start: {} (U+{:04X})",
            start,
            start.chars().next().map_or(0, u32::from)
        );
        println!("  Length: {} characters", length);
    }
    println!("  Size: {} characters", dictionary.base());

    let preview: String = dictionary.chars().iter().take(20).collect();
    let suffix = if dictionary.base() > 20 { "..." } else { "" };
    println!("  Preview: {}{}", preview, suffix);

    println!(
        "  Bits per symbol: {:.3}",
        (dictionary.base() as f64).log2()
    );
    println!("  Digits per byte: at most {}", precision.max_digits_to_emit());
    println!("  Window: {} digits", precision.max_digits_to_decode());

    Ok(())
}
