//! Unwrap post-processing.
//!
//! Strips the outer wrapper from rendered top-level nodes whose target name
//! matches a pattern set, exposing only their inner content. Used by
//! embedded contexts (an alert body, for instance) that would otherwise
//! force their content into an extra paragraph shell.

use lexview_core::ViewChild;
use regex::Regex;

/// A set of wildcard target-name patterns.
///
/// `*` matches any run of characters; everything else is literal. Matching
/// is against the stable target names (`p`, `ul`, `h1`, …).
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// Compile a set of patterns. A pattern that fails to compile never
    /// matches anything.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .filter_map(|pattern| compile(pattern.as_ref()))
                .collect(),
        }
    }

    /// Check if any pattern matches a target name
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(name))
    }

    /// Check if the set holds no usable patterns
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn compile(pattern: &str) -> Option<Regex> {
    let mut source = String::with_capacity(pattern.len() + 8);
    source.push('^');
    for (i, part) in pattern.split('*').enumerate() {
        if i > 0 {
            source.push_str(".*");
        }
        source.push_str(&regex::escape(part));
    }
    source.push('$');
    Regex::new(&source).ok()
}

/// Replace each top-level element whose target matches with its own
/// children. Text fragments and non-matching elements pass through; only
/// the outermost wrapper is stripped, never nested ones.
pub fn unwrap_children(children: Vec<ViewChild>, patterns: &PatternSet) -> Vec<ViewChild> {
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        match child {
            ViewChild::Element(node) if patterns.matches(node.target.name()) => {
                out.extend(node.children);
            }
            other => out.push(other),
        }
    }
    out
}
