use crate::cli::{args::EncodeArgs, config::create_dictionary, global::GlobalArgs};
use base_rc::DictionaryRegistry;
use std::fs;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &DictionaryRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let dictionary = create_dictionary(config, args.dictionary.as_deref())?;
    let data = super::read_input(args.file.as_deref(), global)?;

    let encoded = base_rc::encode(&data, &dictionary);
    tracing::info!(
        bytes = data.len(),
        symbols = encoded.chars().count(),
        base = dictionary.base(),
        "encoded input"
    );

    if let Some(output_path) = &args.output {
        fs::write(output_path, encoded.as_bytes())?;
        return Ok(());
    }

    // Check for control characters before outputting
    if contains_control_chars(&encoded) {
        return Err(format!(
            "Encoded output contains control characters (dictionary: {}); use --output to write it to a file",
            args.dictionary
                .as_deref()
                .unwrap_or_else(|| config.default_dictionary_name())
        )
        .into());
    }
    println!("{}", encoded);

    Ok(())
}

/// Check if output contains problematic control characters (0x00-0x1F except \t, \n, \r)
fn contains_control_chars(s: &str) -> bool {
    s.bytes()
        .any(|b| b < 0x20 && b != b'\t' && b != b'\n' && b != b'\r')
}
