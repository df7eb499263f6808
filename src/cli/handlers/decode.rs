use crate::cli::{args::DecodeArgs, config::create_dictionary, global::GlobalArgs};
use base_rc::{Dictionary, DictionaryRegistry};
use std::fs;
use std::io::{self, Write};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &DictionaryRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let dictionary = create_dictionary(config, args.dictionary.as_deref())?;

    // Read input data (must be valid UTF-8 for decoding)
    let input = super::read_input(args.file.as_deref(), global)?;
    let input_text =
        String::from_utf8(input).map_err(|e| format!("input is not valid UTF-8: {}", e))?;

    let data = base_rc::decode(strip_padding(&input_text, &dictionary), &dictionary)?;
    tracing::info!(bytes = data.len(), base = dictionary.base(), "decoded input");

    if let Some(output_path) = &args.output {
        fs::write(output_path, &data)?;
    } else {
        io::stdout().write_all(&data)?;
    }

    Ok(())
}

/// Strips surrounding whitespace such as the newline `encode` prints, keeping
/// any whitespace the dictionary uses as a symbol.
fn strip_padding<'a>(text: &'a str, dictionary: &Dictionary) -> &'a str {
    text.trim_matches(|c: char| c.is_whitespace() && dictionary.decode_char(c).is_none())
}
