//! Title-based classification of add-on content versus standalone games.
//!
//! Classification runs against the raw title (not the normalized key), because
//! punctuation such as the colon in `Game: Soundtrack` carries meaning.
//! Rules are evaluated in table order and the first match decides. Every
//! base-game exception sits ahead of every DLC rule, so an exception always
//! wins over a DLC pattern.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// Bumped whenever [`RULES`] changes in a way that can flip a verdict.
pub const RULESET_VERSION: u32 = 2;

/// Outcome a rule assigns when it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Looks like add-on language but names a full game.
    BaseGame,
    /// Add-on, expansion, or bonus content.
    Dlc,
}

/// One entry of the ordered rule table.
#[derive(Debug, PartialEq, Eq)]
pub struct DlcRule {
    /// Case-insensitive regex searched anywhere in the title.
    pub pattern: &'static str,
    pub verdict: Verdict,
    /// Short human-readable explanation, shown in reports.
    pub reason: &'static str,
}

/// The rule table. Base-game exceptions first, then DLC indicators.
pub static RULES: &[DlcRule] = &[
    DlcRule {
        pattern: r"party\s+pack",
        verdict: Verdict::BaseGame,
        reason: "party pack compilation (e.g. Jackbox)",
    },
    DlcRule {
        pattern: r"commander\s+pack",
        verdict: Verdict::BaseGame,
        reason: "commander pack edition is a full game",
    },
    DlcRule {
        pattern: r"\b(dlc|expansion)\b",
        verdict: Verdict::Dlc,
        reason: "explicit DLC/expansion wording",
    },
    DlcRule {
        pattern: r"season\s+pass",
        verdict: Verdict::Dlc,
        reason: "season pass",
    },
    DlcRule {
        pattern: r":\s+(soundtrack|ost|artbook|wallpaper)",
        verdict: Verdict::Dlc,
        reason: "bonus content after a colon",
    },
    DlcRule {
        pattern: r"(scenario|content|voice|map|expansion|dlc)\s+pack",
        verdict: Verdict::Dlc,
        reason: "content pack",
    },
    DlcRule {
        pattern: r"\d+\s+dlc",
        verdict: Verdict::Dlc,
        reason: "numbered DLC",
    },
];

#[allow(clippy::expect_used)]
static COMPILED: LazyLock<Vec<(Regex, &'static DlcRule)>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|rule| {
            let re = RegexBuilder::new(rule.pattern)
                .case_insensitive(true)
                .build()
                .expect("static DLC rule pattern");
            (re, rule)
        })
        .collect()
});

/// Result of classifying a title, with the rule that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub is_dlc: bool,
    /// `None` when no rule matched and the title defaulted to a base game.
    pub rule: Option<&'static DlcRule>,
}

/// Classify a title, reporting which rule (if any) decided the verdict.
pub fn classify(title: &str) -> Classification {
    if title.trim().is_empty() {
        return Classification {
            is_dlc: false,
            rule: None,
        };
    }

    COMPILED
        .iter()
        .find(|(re, _)| re.is_match(title))
        .map(|(_, rule)| Classification {
            is_dlc: rule.verdict == Verdict::Dlc,
            rule: Some(*rule),
        })
        .unwrap_or(Classification {
            is_dlc: false,
            rule: None,
        })
}

/// Whether a title names add-on content rather than a standalone game.
///
/// # Examples
///
/// ```
/// use gamelist_catalog::dlc::is_dlc;
///
/// assert!(!is_dlc("The Jackbox Party Pack 5"));
/// assert!(is_dlc("Dragon Age 2 DLC - Alternate Appearance Pack"));
/// assert!(!is_dlc("Portal 2"));
/// ```
pub fn is_dlc(title: &str) -> bool {
    classify(title).is_dlc
}

#[cfg(test)]
#[path = "tests/dlc_tests.rs"]
mod tests;
