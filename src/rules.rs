//! The rebrand rule table and the literal content rewriter.
//!
//! Rules are applied one after another against the already rewritten
//! buffer, so their order is part of the output contract.

/// Lowercase token that marks a file or directory name as a rename candidate.
pub const BRAND_TOKEN: &str = "blinc";

/// A literal, case-sensitive substring substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebrandRule {
    pub from: &'static str,
    pub to: &'static str,
}

impl RebrandRule {
    const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }
}

/// Ordered rebrand rules. Do not reorder.
pub const REBRAND_RULES: &[RebrandRule] = &[
    // Brand name
    RebrandRule::new("Blinc", "Junita"),
    RebrandRule::new("blinc", "junita"),
    RebrandRule::new("BLINC", "JUNITA"),
    // Organization handles
    RebrandRule::new("project-blinc", "iamqiss"),
    RebrandRule::new("project_blinc", "iamqiss"),
    RebrandRule::new("@project-blinc", "@iamqiss"),
    // URLs
    RebrandRule::new("https://github.com/project-blinc", "https://github.com/iamqiss"),
    RebrandRule::new("https://project-blinc.github.io", "https://iamqiss.github.io"),
    RebrandRule::new("project-blinc.github.io", "iamqiss.github.io"),
    // Package prefixes
    RebrandRule::new("blinc-", "junita-"),
    RebrandRule::new("blinc_", "junita_"),
];

/// Output of a content rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub replacements: usize,
}

/// Applies `rules` in order, counting matches against the evolving buffer.
pub fn rewrite_with(content: &str, rules: &[RebrandRule]) -> Rewrite {
    let mut current = content.to_string();
    let mut replacements = 0;

    for rule in rules {
        let count = current.matches(rule.from).count();
        if count > 0 {
            current = current.replace(rule.from, rule.to);
            replacements += count;
        }
    }

    Rewrite {
        content: current,
        replacements,
    }
}

/// Applies the built-in rule table to `content`.
pub fn rewrite(content: &str) -> Rewrite {
    rewrite_with(content, REBRAND_RULES)
}

/// Returns the rebranded form of a single file or directory name.
///
/// Returns `None` when the name does not carry the brand token in any case,
/// or when none of the case-sensitive rules changed it (e.g. `BliNc`).
pub fn rebrand_name(name: &str) -> Option<String> {
    if !name.to_lowercase().contains(BRAND_TOKEN) {
        return None;
    }

    let renamed = rewrite(name).content;
    (renamed != name).then_some(renamed)
}
