use anyhow::{Result, bail};
use std::io::{BufRead, Write};

pub(crate) fn read_trimmed_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("Input closed before a value was entered");
    }
    Ok(line.trim().to_string())
}

pub(crate) fn prompt_timeout<R, W>(input: &mut R, output: &mut W, default: u64) -> Result<u64>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "⏱️  Enter timeout in seconds (default: {default}): ")?;
        output.flush()?;

        let timeout_str = read_trimmed_line(input)?;
        if timeout_str.is_empty() {
            return Ok(default);
        }

        match timeout_str.parse::<u64>() {
            Ok(timeout) if timeout > 0 => return Ok(timeout),
            Ok(_) => writeln!(output, "❌ Timeout must be a positive number.")?,
            Err(_) => writeln!(output, "❌ Please enter a valid number.")?,
        }
    }
}

pub(crate) fn mask_api_key(key: &str) -> String {
    if key.is_empty() {
        return "(not set)".to_string();
    }

    let visible = key.char_indices().nth(8).map_or(key.len(), |(idx, _)| idx);
    format!("{}***", &key[..visible])
}
