use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::catalog::{Choice, Mood, Platform, TimeAvailable};
use crate::planner::WatchRequest;

use super::args::Cli;

/// Shows a numbered menu and reads until a valid option is chosen.
/// Blank input picks the first option; labels are accepted as well as numbers.
pub(crate) fn prompt_choice<T, R, W>(input: &mut R, output: &mut W) -> Result<T>
where
    T: Choice + FromStr,
    R: BufRead,
    W: Write,
{
    writeln!(output, "\n{}", T::HEADING)?;
    for (idx, option) in T::ALL.iter().enumerate() {
        writeln!(output, "  {}. {}", idx + 1, option)?;
    }

    loop {
        write!(output, "Select {} (1-{}, default 1): ", T::KIND, T::ALL.len())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("No {} selected: input closed", T::KIND);
        }
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return Ok(T::ALL[0]);
        }

        match trimmed.parse::<usize>() {
            Ok(num) if (1..=T::ALL.len()).contains(&num) => return Ok(T::ALL[num - 1]),
            Ok(_) => {}
            Err(_) => {
                if let Ok(choice) = trimmed.parse::<T>() {
                    return Ok(choice);
                }
            }
        }

        writeln!(
            output,
            "❌ Please enter a number between 1 and {}.",
            T::ALL.len()
        )?;
    }
}

/// Fills in whatever the command line left unset by asking on the terminal.
pub(crate) fn collect_request<R, W>(cli: &Cli, input: &mut R, output: &mut W) -> Result<WatchRequest>
where
    R: BufRead,
    W: Write,
{
    let mood = match cli.mood {
        Some(mood) => mood,
        None => prompt_choice::<Mood, _, _>(input, output)?,
    };
    let time_available = match cli.time_available {
        Some(time) => time,
        None => prompt_choice::<TimeAvailable, _, _>(input, output)?,
    };
    let platform = match cli.platform {
        Some(platform) => platform,
        None => prompt_choice::<Platform, _, _>(input, output)?,
    };

    Ok(WatchRequest::new(mood, time_available, platform))
}
