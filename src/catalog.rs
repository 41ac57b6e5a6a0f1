//! The closed option sets offered by the planner form.
//!
//! Each set is an enum so a request can only ever carry a value the form
//! offers. `label()` is the exact text sent to the model.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} '{value}'. Expected one of: {expected}")]
pub struct UnknownOption {
    kind: &'static str,
    value: String,
    expected: String,
}

impl UnknownOption {
    fn new<T: Choice>(value: &str) -> Self {
        Self {
            kind: T::KIND,
            value: value.to_string(),
            expected: T::ALL
                .iter()
                .map(|option| option.label())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Shared shape of the three option sets, used by the selection menus.
pub trait Choice: Copy + fmt::Display + 'static {
    const KIND: &'static str;
    /// Heading shown above the selection menu.
    const HEADING: &'static str;
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    /// Extra spellings accepted on the command line besides the label.
    fn aliases(self) -> &'static [&'static str];
}

fn normalize(input: &str) -> String {
    input
        .trim()
        .chars()
        .map(|ch| match ch {
            '\u{2013}' | '\u{2014}' | '_' | ' ' => '-',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

fn parse_choice<T: Choice>(input: &str) -> Result<T, UnknownOption> {
    let wanted = normalize(input);
    T::ALL
        .iter()
        .copied()
        .find(|option| {
            normalize(option.label()) == wanted
                || option.aliases().iter().any(|alias| *alias == wanted)
        })
        .ok_or_else(|| UnknownOption::new::<T>(input))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Thriller,
    FeelGood,
    Mystery,
    Romance,
    Comedy,
    Horror,
}

impl Choice for Mood {
    const KIND: &'static str = "mood";
    const HEADING: &'static str = "🎭 Choose your mood";
    const ALL: &'static [Self] = &[
        Mood::Thriller,
        Mood::FeelGood,
        Mood::Mystery,
        Mood::Romance,
        Mood::Comedy,
        Mood::Horror,
    ];

    fn label(self) -> &'static str {
        match self {
            Mood::Thriller => "Thriller",
            Mood::FeelGood => "Feel-Good",
            Mood::Mystery => "Mystery",
            Mood::Romance => "Romance",
            Mood::Comedy => "Comedy",
            Mood::Horror => "Horror",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Mood::FeelGood => &["feelgood"],
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeAvailable {
    OneToTwoHours,
    ThreeToFiveHours,
    SixPlusHours,
    WholeWeekend,
}

impl Choice for TimeAvailable {
    const KIND: &'static str = "time budget";
    const HEADING: &'static str = "⏱️  Time available";
    const ALL: &'static [Self] = &[
        TimeAvailable::OneToTwoHours,
        TimeAvailable::ThreeToFiveHours,
        TimeAvailable::SixPlusHours,
        TimeAvailable::WholeWeekend,
    ];

    fn label(self) -> &'static str {
        match self {
            TimeAvailable::OneToTwoHours => "1\u{2013}2 hours",
            TimeAvailable::ThreeToFiveHours => "3\u{2013}5 hours",
            TimeAvailable::SixPlusHours => "6+ hours",
            TimeAvailable::WholeWeekend => "Whole Weekend",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            TimeAvailable::OneToTwoHours => &["1-2h", "1-2"],
            TimeAvailable::ThreeToFiveHours => &["3-5h", "3-5"],
            TimeAvailable::SixPlusHours => &["6+h", "6+", "6h+"],
            TimeAvailable::WholeWeekend => &["weekend"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Netflix,
    AmazonPrime,
    DisneyPlus,
    Hotstar,
}

impl Choice for Platform {
    const KIND: &'static str = "platform";
    const HEADING: &'static str = "📺 Streaming platform";
    const ALL: &'static [Self] = &[
        Platform::Netflix,
        Platform::AmazonPrime,
        Platform::DisneyPlus,
        Platform::Hotstar,
    ];

    fn label(self) -> &'static str {
        match self {
            Platform::Netflix => "Netflix",
            Platform::AmazonPrime => "Amazon Prime",
            Platform::DisneyPlus => "Disney+",
            Platform::Hotstar => "Hotstar",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Platform::AmazonPrime => &["prime", "amazon", "prime-video"],
            Platform::DisneyPlus => &["disney", "disney-plus", "disneyplus"],
            _ => &[],
        }
    }
}

macro_rules! impl_display_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }

            impl FromStr for $ty {
                type Err = UnknownOption;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_choice(s)
                }
            }
        )*
    };
}

impl_display_from_str!(Mood, TimeAvailable, Platform);
