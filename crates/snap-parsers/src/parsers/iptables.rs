//! `iptables-save` / `ip6tables-save` parser
//!
//! The same format is used by the live dump commands and by the persisted
//! `/etc/sysconfig/iptables` and `/etc/sysconfig/ip6tables` files:
//!
//! ```text
//! *filter
//! :INPUT ACCEPT [0:0]
//! -A INPUT -p tcp -m state --state NEW -m tcp --dport 22 -j ACCEPT
//! COMMIT
//! ```

use std::ops::Range;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use snap_context::Context;

/// `:NAME POLICY [packets:bytes]` chain declaration
static CHAIN_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^:(\S+)\s+(\S+)(?:\s+\[(\d+):(\d+)\])?").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetAction {
    /// `-j TARGET`
    Jump,
    /// `-g CHAIN`
    Goto,
}

/// One `-A CHAIN ...` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub table: String,
    pub chain: String,
    /// Everything after the chain name
    pub rule: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_action: Option<TargetAction>,
    /// Matches that precede the target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Target arguments, only present when there are any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_options: Option<String>,
}

/// One `:NAME POLICY [packets:bytes]` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chain {
    pub table: String,
    pub name: String,
    /// `ACCEPT`, `DROP`, ... or `-` for user-defined chains
    pub policy: String,
    pub packet_counter: u64,
    pub byte_counter: u64,
}

/// Parsed firewall dump.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IpTables {
    rules: Vec<Rule>,
    chains: Vec<Chain>,
}

impl IpTables {
    pub fn parse(context: &Context) -> Self {
        let mut parsed = Self::default();
        let mut table: Option<String> = None;

        for raw in context.content() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line == "COMMIT" {
                continue;
            }
            if let Some(name) = line.strip_prefix('*') {
                table = Some(name.trim().to_string());
                continue;
            }
            let Some(table) = table.as_deref() else {
                tracing::debug!(%line, "Dropping line outside of a table");
                continue;
            };
            if line.starts_with(':') {
                match parse_chain(line, table) {
                    Some(chain) => parsed.chains.push(chain),
                    None => tracing::debug!(%line, "Dropping malformed chain declaration"),
                }
            } else if let Some(rest) = line.strip_prefix("-A ") {
                parsed.rules.push(parse_rule(rest, table));
            } else {
                tracing::debug!(%line, "Dropping unrecognized line");
            }
        }

        parsed
    }

    /// All rules in dump order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// All chain declarations in dump order.
    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    /// Rules appended to chain `name` of the `filter` table.
    pub fn get_chain(&self, name: &str) -> Vec<&Rule> {
        self.get_chain_in(name, "filter")
    }

    /// Rules appended to chain `name` of `table`, in dump order.
    pub fn get_chain_in(&self, name: &str, table: &str) -> Vec<&Rule> {
        self.rules
            .iter()
            .filter(|r| r.chain == name && r.table == table)
            .collect()
    }

    /// Chains declared in `table`.
    pub fn get_table(&self, table: &str) -> Vec<&Chain> {
        self.chains.iter().filter(|c| c.table == table).collect()
    }

    /// Every chain declared in `table`, mapped to its rules in that table.
    pub fn table_chains(&self, table: &str) -> IndexMap<&str, Vec<&Rule>> {
        self.get_table(table)
            .into_iter()
            .map(|chain| {
                (chain.name.as_str(), self.get_chain_in(&chain.name, table))
            })
            .collect()
    }

    /// Rules whose text contains `needle`.
    pub fn get_rule(&self, needle: &str) -> Vec<&Rule> {
        self.rules.iter().filter(|r| r.rule.contains(needle)).collect()
    }

    /// Whether any rule text contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.rules.iter().any(|r| r.rule.contains(needle))
    }
}

fn parse_chain(line: &str, table: &str) -> Option<Chain> {
    let caps = CHAIN_LINE.captures(line)?;
    let counter = |idx: usize| {
        caps.get(idx)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(0)
    };
    Some(Chain {
        table: table.to_string(),
        name: caps[1].to_string(),
        policy: caps[2].to_string(),
        packet_counter: counter(3),
        byte_counter: counter(4),
    })
}

fn parse_rule(rest: &str, table: &str) -> Rule {
    let rest = rest.trim();
    let (chain, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let text = text.trim();

    let mut rule = Rule {
        table: table.to_string(),
        chain: chain.to_string(),
        rule: text.to_string(),
        target_action: None,
        constraints: None,
        target: None,
        target_options: None,
    };

    let spans = token_spans(text);
    let target_at = spans.iter().position(|span| {
        matches!(&text[span.clone()], "-j" | "--jump" | "-g" | "--goto")
    });
    let target = target_at.and_then(|idx| Some((idx, spans.get(idx + 1)?)));
    if let Some((idx, target_span)) = target {
        let flag = &text[spans[idx].clone()];
        rule.target_action = Some(if flag == "-g" || flag == "--goto" {
            TargetAction::Goto
        } else {
            TargetAction::Jump
        });
        rule.constraints = Some(text[..spans[idx].start].trim().to_string());
        rule.target = Some(text[target_span.clone()].to_string());
        let options = text[target_span.end..].trim();
        if !options.is_empty() {
            rule.target_options = Some(options.to_string());
        }
    }

    rule
}

/// Byte ranges of whitespace-separated tokens, keeping double-quoted text
/// (`--comment "a -j b"`) inside one token.
fn token_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;
    let mut quoted = false;

    for (idx, ch) in text.char_indices() {
        if ch == '"' {
            quoted = !quoted;
        }
        if ch.is_whitespace() && !quoted {
            if let Some(s) = start.take() {
                spans.push(s..idx);
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }
    if let Some(s) = start {
        spans.push(s..text.len());
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_spans_respect_quotes() {
        let text = r#"-m comment --comment "Permit -j net" -j ACCEPT"#;
        let tokens: Vec<_> = token_spans(text).into_iter().map(|s| &text[s]).collect();
        assert_eq!(
            tokens,
            ["-m", "comment", "--comment", "\"Permit -j net\"", "-j", "ACCEPT"]
        );
    }

    #[test]
    fn test_parse_rule_with_goto() {
        let rule = parse_rule("INPUT -m state --state RELATED,ESTABLISHED -g ACCEPT", "filter");
        assert_eq!(rule.target_action, Some(TargetAction::Goto));
        assert_eq!(rule.target.as_deref(), Some("ACCEPT"));
        assert_eq!(
            rule.constraints.as_deref(),
            Some("-m state --state RELATED,ESTABLISHED")
        );
        assert_eq!(rule.target_options, None);
    }

    #[test]
    fn test_parse_rule_without_target() {
        let rule = parse_rule("INPUT -s 192.168.2.0/24", "filter");
        assert_eq!(rule.rule, "-s 192.168.2.0/24");
        assert!(rule.target_action.is_none());
        assert!(rule.constraints.is_none());
    }

    #[test]
    fn test_parse_rule_dangling_jump() {
        let rule = parse_rule("INPUT -p tcp -j", "filter");
        assert!(rule.target.is_none());
    }

    #[test]
    fn test_parse_chain_without_counters() {
        let chain = parse_chain(":INPUT ACCEPT", "filter").unwrap();
        assert_eq!(chain.packet_counter, 0);
        assert_eq!(chain.byte_counter, 0);
        assert!(parse_chain(":", "filter").is_none());
    }
}
