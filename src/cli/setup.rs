use anyhow::Result;
use std::io::{BufRead, Write};

use crate::config::Config;

use super::util::{mask_api_key, prompt_timeout, read_trimmed_line};

const GROQ_KEY_PREFIX: &str = "gsk_";

pub(crate) fn run_setup<R, W>(input: &mut R, output: &mut W) -> Result<Config>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "🚀 Welcome to watchplan setup!")?;
    writeln!(output, "Let's store your Groq API key.\n")?;

    let mut config = Config::load_unvalidated()?;
    let existing = Some(config.llm.api_key.as_str()).filter(|key| !key.is_empty());
    let api_key = prompt_api_key(input, output, existing)?;
    let timeout = prompt_timeout(input, output, config.llm.timeout_secs)?;

    config.llm.api_key = api_key;
    config.llm.timeout_secs = timeout;
    config.validate()?;
    config.save()?;

    writeln!(
        output,
        "\n✅ Configuration saved to {}",
        Config::config_path()?.display()
    )?;
    writeln!(output, "📋 Your configuration:")?;
    writeln!(output, "   API Key: {}", mask_api_key(&config.llm.api_key))?;
    writeln!(output, "   Base URL: {}", config.llm.base_url)?;
    writeln!(output, "   Timeout: {}s", config.llm.timeout_secs)?;
    writeln!(output, "   Model: {}", config.model.name)?;
    writeln!(output, "\n🎉 Setup complete! Try: watchplan --mood comedy --time 1-2h --platform netflix")?;

    Ok(config)
}

fn prompt_api_key<R, W>(input: &mut R, output: &mut W, existing: Option<&str>) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(
            output,
            "🔑 Enter your Groq API key{}: ",
            existing
                .map(|_| " (leave blank to keep current)")
                .unwrap_or("")
        )?;
        output.flush()?;

        let key = read_trimmed_line(input)?;

        if key.is_empty() {
            if let Some(existing) = existing {
                return Ok(existing.to_string());
            }
            writeln!(output, "❌ API key cannot be empty. Please try again.")?;
            continue;
        }

        if !key.starts_with(GROQ_KEY_PREFIX) {
            writeln!(
                output,
                "⚠️  Groq API keys typically start with '{GROQ_KEY_PREFIX}'. Are you sure this is correct?"
            )?;
            write!(output, "Continue anyway? [y/N]: ")?;
            output.flush()?;

            if !read_trimmed_line(input)?.eq_ignore_ascii_case("y") {
                continue;
            }
        }

        return Ok(key);
    }
}
