use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use crate::catalog::{Choice, Mood, Platform, TimeAvailable};
use crate::planner::WatchPlan;

const TITLE: &str = "🎬 Movie & Series Watch Planner";
const TAGLINE: &str = "Plan the perfect movie night or binge weekend 🍿";
const PLAN_HEADING: &str = "📺 Your Watch Plan";

pub(crate) fn print_banner<W: Write>(output: &mut W, plain: bool) -> Result<()> {
    if plain {
        writeln!(output, "{TITLE}")?;
        writeln!(output, "{TAGLINE}")?;
    } else {
        writeln!(output, "{}", TITLE.bold())?;
        writeln!(output, "{}", TAGLINE.dimmed())?;
    }
    Ok(())
}

/// Writes the plan heading followed by the model's markdown exactly as received.
pub(crate) fn print_plan<W: Write>(output: &mut W, plan: &WatchPlan, plain: bool) -> Result<()> {
    if plain {
        writeln!(output, "\n## {PLAN_HEADING}\n")?;
    } else {
        writeln!(output, "\n{}\n", format!("## {PLAN_HEADING}").bold().cyan())?;
    }

    let markdown = plan.as_str();
    write!(output, "{markdown}")?;
    if !markdown.ends_with('\n') {
        writeln!(output)?;
    }
    output.flush()?;
    Ok(())
}

fn print_options<T: Choice, W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "{}", T::HEADING)?;
    for option in T::ALL {
        writeln!(output, "  - {option}")?;
    }
    Ok(())
}

pub(crate) fn print_catalog<W: Write>(output: &mut W) -> Result<()> {
    print_options::<Mood, _>(output)?;
    print_options::<TimeAvailable, _>(output)?;
    print_options::<Platform, _>(output)?;
    Ok(())
}
