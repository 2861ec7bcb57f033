use dacq_data::{Result, Value, ValueType, format_hex, parse_hex};

use crate::cli::Command;

/// Runs one command and returns the text to print.
pub fn run(command: Command) -> Result<String> {
    match command {
        Command::Encode { value_type, text } => encode(value_type, &text),
        Command::Decode { value_type, hex } => decode(value_type, &hex),
        Command::Inspect { value_type, text } => inspect(value_type, &text),
    }
}

fn encode(value_type: ValueType, text: &str) -> Result<String> {
    tracing::debug!("Encoding {text:?} as {value_type}");

    let value = Value::from_text(value_type, text)?;
    let bytes = value.as_byte_array();
    tracing::info!("Encoded {value_type} value into {} bytes", bytes.len());

    Ok(format_hex(&bytes))
}

fn decode(value_type: ValueType, hex: &str) -> Result<String> {
    tracing::debug!("Decoding {hex:?} as {value_type}");

    let bytes = parse_hex(hex)?;
    let value = Value::from_bytes(value_type, &bytes)?;

    Ok(value.to_string())
}

fn inspect(value_type: ValueType, text: &str) -> Result<String> {
    let value = Value::from_text(value_type, text)?;

    let mut lines = vec![
        format!("type: {}", value.value_type()),
        format!("value: {value}"),
        format!("bytes: {}", format_hex(&value.as_byte_array())),
    ];
    lines.push(show("double", value.as_double()));
    lines.push(show("float", value.as_float()));
    lines.push(show("long", value.as_long()));
    lines.push(show("int", value.as_int()));
    lines.push(show("short", value.as_short()));
    lines.push(show("byte", value.as_byte()));
    lines.push(show("boolean", value.as_boolean()));

    Ok(lines.join("\n"))
}

fn show<T: std::fmt::Display>(name: &str, converted: Result<T>) -> String {
    match converted {
        Ok(data) => format!("{name}: {data}"),
        Err(err) => {
            tracing::warn!("{name} conversion failed: {err}");
            format!("{name}: <{err}>")
        }
    }
}
