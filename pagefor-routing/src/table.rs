//! The routing table built from every synthesized content type.

use crate::{RewriteSettings, RuleSynthesizer, Synthesis, expand_permastruct};
use pagefor_store::{MappingStore, PageHierarchy};
use pagefor_types::{ContentTypeRegistry, Permastruct, RewriteRule, RulePriority};
use regex_lite::Regex;
use tracing::{debug, warn};

/// A request path matched against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Pattern of the rule that matched.
    pub pattern: String,
    /// Target query with captures substituted.
    pub query: String,
}

impl ResolvedRoute {
    /// Value of a query variable, e.g. `post_type` or `paged`.
    #[must_use]
    pub fn var(&self, name: &str) -> Option<&str> {
        let (_, params) = self.query.split_once('?')?;
        params
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

struct CompiledRule {
    rule: RewriteRule,
    regex: Regex,
}

/// Ordered archive and item rules for every content type with an assigned
/// page.
///
/// Top rules of all types come first, in registration order, followed by
/// the bottom rules expanded from their permastructs. Types on default
/// routing contribute nothing.
pub struct RewriteTable {
    rules: Vec<CompiledRule>,
    permastructs: Vec<Permastruct>,
}

impl RewriteTable {
    /// Synthesizes every registered type and collects the result.
    pub fn build<M, H>(
        registry: &ContentTypeRegistry,
        store: &M,
        pages: &H,
        settings: &RewriteSettings,
    ) -> Self
    where
        M: MappingStore + ?Sized,
        H: PageHierarchy + ?Sized,
    {
        let synthesizer = RuleSynthesizer::new(store, pages, settings);
        let syntheses: Vec<Synthesis> = registry.iter().map(|ct| synthesizer.synthesize(ct)).collect();
        Self::from_syntheses(&syntheses, settings)
    }

    /// Collects already computed syntheses, keeping their order.
    pub fn from_syntheses(syntheses: &[Synthesis], settings: &RewriteSettings) -> Self {
        let permastructs: Vec<Permastruct> = syntheses
            .iter()
            .filter_map(|s| s.permastruct.clone())
            .collect();

        let top = syntheses.iter().flat_map(|s| s.rules.iter().cloned());
        let bottom = permastructs.iter().flat_map(|p| expand_permastruct(p, settings));

        let rules = top.chain(bottom).filter_map(compile).collect::<Vec<_>>();
        debug!(rules = rules.len(), permastructs = permastructs.len(), "Rewrite table built");

        Self {
            rules,
            permastructs,
        }
    }

    /// Rules in match order.
    pub fn rules(&self) -> impl Iterator<Item = &RewriteRule> {
        self.rules.iter().map(|c| &c.rule)
    }

    /// Rules of one priority, in match order.
    pub fn rules_with(&self, priority: RulePriority) -> impl Iterator<Item = &RewriteRule> {
        self.rules().filter(move |r| r.priority == priority)
    }

    pub fn permastructs(&self) -> &[Permastruct] {
        &self.permastructs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Matches a request path against the rules in order.
    ///
    /// Leading slashes and any query string are ignored. Patterns are anchored
    /// at the start of the path; unmatched captures substitute as empty.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_start_matches('/');

        self.rules.iter().find_map(|compiled| {
            let captures = compiled.regex.captures(path)?;
            let mut query = compiled.rule.target.clone();
            for i in 1..captures.len() {
                let value = captures.get(i).map_or("", |m| m.as_str());
                query = query.replace(&format!("$matches[{i}]"), value);
            }
            Some(ResolvedRoute {
                pattern: compiled.rule.pattern.clone(),
                query,
            })
        })
    }
}

fn compile(rule: RewriteRule) -> Option<CompiledRule> {
    match Regex::new(&format!("^(?:{})", rule.pattern)) {
        Ok(regex) => Some(CompiledRule { rule, regex }),
        Err(e) => {
            warn!(pattern = %rule.pattern, error = %e, "Skipping rewrite rule that does not compile");
            None
        }
    }
}
