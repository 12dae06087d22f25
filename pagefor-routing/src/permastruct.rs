//! Singular item rules derived from a permastruct.

use crate::{RewriteSettings, escape_path};
use pagefor_types::{Permastruct, RewriteRule};

/// Expands a permastruct into bottom-priority rules for singular items.
///
/// Most specific first: item feeds, item pagination, then the bare item.
pub fn expand_permastruct(permastruct: &Permastruct, settings: &RewriteSettings) -> Vec<RewriteRule> {
    let base = settings.base_for(&escape_path(permastruct.base()), permastruct.with_front);
    let item = format!("{base}/([^/]+)");
    let query = format!("{}?{}=$matches[1]", settings.index, permastruct.name);
    let mut rules = Vec::new();

    if permastruct.feeds
        && let Some(feeds) = settings.feed_alternation()
    {
        let target = format!("{query}&feed=$matches[2]");
        let feed_base = regex_lite::escape(&settings.feed_base);
        rules.push(RewriteRule::bottom(
            format!("{item}/{feed_base}/{feeds}/?$"),
            target.clone(),
        ));
        rules.push(RewriteRule::bottom(format!("{item}/{feeds}/?$"), target));
    }

    if permastruct.paged {
        let pagination = regex_lite::escape(&settings.pagination_base);
        rules.push(RewriteRule::bottom(
            format!("{item}/{pagination}/?([0-9]{{1,}})/?$"),
            format!("{query}&paged=$matches[2]"),
        ));
    }

    rules.push(RewriteRule::bottom(format!("{item}/?$"), query));
    rules
}
