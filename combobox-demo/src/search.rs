//! Simulated remote search: fuzzy filtering with latency and paging.

use std::time::Duration;

use combobox::entry::Item;
use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Results per page.
pub const PAGE_SIZE: usize = 10;

const CATALOGUE: &[&str] = &[
    "Albania", "Algeria", "Argentina", "Armenia", "Australia", "Austria", "Belgium", "Bolivia",
    "Brazil", "Bulgaria", "Canada", "Chile", "China", "Colombia", "Croatia", "Cuba", "Cyprus",
    "Denmark", "Ecuador", "Egypt", "Estonia", "Ethiopia", "Finland", "France", "Georgia",
    "Germany", "Ghana", "Greece", "Hungary", "Iceland", "India", "Indonesia", "Ireland", "Italy",
    "Japan", "Kenya", "Latvia", "Lithuania", "Luxembourg", "Malta", "Mexico", "Morocco", "Nepal",
    "Netherlands", "Nigeria", "Norway", "Peru", "Poland", "Portugal", "Romania", "Senegal",
    "Serbia", "Slovakia", "Slovenia", "Spain", "Sweden", "Switzerland", "Tunisia", "Turkey",
    "Uruguay", "Vietnam",
];

/// A request for one page of results.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Query generation; responses for older generations are stale.
    pub generation: u64,
    pub query: String,
    pub page: usize,
}

/// One page of results.
#[derive(Debug, Clone)]
pub struct SearchResponse {
    pub generation: u64,
    pub page: usize,
    pub items: Vec<Item>,
    pub has_more: bool,
}

/// Rank the catalogue against `query` and cut out one page.
///
/// Matches are ordered by nucleo score, ties keeping catalogue order. An
/// empty query matches everything in catalogue order. Also reports whether
/// another page follows.
fn search_page(query: &str, page: usize) -> (Vec<Item>, bool) {
    let ranked: Vec<&str> = if query.is_empty() {
        CATALOGUE.to_vec()
    } else {
        let mut matcher = Matcher::new(Config::DEFAULT);
        let pattern = Pattern::new(
            query,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );
        let mut buf = Vec::new();
        let mut scored: Vec<(u32, &str)> = CATALOGUE
            .iter()
            .filter_map(|&name| {
                let score = pattern.score(Utf32Str::new(name, &mut buf), &mut matcher)?;
                Some((score, name))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, name)| name).collect()
    };

    let start = page * PAGE_SIZE;
    let items = ranked
        .iter()
        .skip(start)
        .take(PAGE_SIZE)
        .map(|name| Item::new(name.to_lowercase(), *name))
        .collect();
    (items, ranked.len() > start + PAGE_SIZE)
}

/// Spawn the search service.
///
/// Each request is answered after `latency` on its own task, so responses
/// can arrive out of order; callers drop stale generations.
pub fn spawn_search(
    latency: Duration,
) -> (UnboundedSender<SearchRequest>, UnboundedReceiver<SearchResponse>) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<SearchRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            let response_tx = response_tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(latency).await;
                let (items, has_more) = search_page(&request.query, request.page);
                log::debug!(
                    "search generation={} query={:?} page={} results={} has_more={}",
                    request.generation,
                    request.query,
                    request.page,
                    items.len(),
                    has_more
                );
                let _ = response_tx.send(SearchResponse {
                    generation: request.generation,
                    page: request.page,
                    items,
                    has_more,
                });
            });
        }
    });

    (request_tx, response_rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[Item]) -> Vec<&str> {
        items.iter().map(|item| item.label.as_str()).collect()
    }

    #[test]
    fn test_empty_query_pages_through_catalogue() {
        let (first, more) = search_page("", 0);
        assert_eq!(labels(&first), CATALOGUE[..PAGE_SIZE]);
        assert!(more);

        let (second, _) = search_page("", 1);
        assert_eq!(labels(&second), CATALOGUE[PAGE_SIZE..2 * PAGE_SIZE]);
    }

    #[test]
    fn test_last_page_has_no_more() {
        let last_page = (CATALOGUE.len() - 1) / PAGE_SIZE;
        let (last, more) = search_page("", last_page);
        assert_eq!(last.len(), CATALOGUE.len() - last_page * PAGE_SIZE);
        assert!(!more);

        let (past_end, more) = search_page("", last_page + 1);
        assert!(past_end.is_empty());
        assert!(!more);
    }

    #[test]
    fn test_query_keeps_only_matches() {
        let (items, more) = search_page("land", 0);
        assert!(!more);
        let found = labels(&items);
        for name in ["Finland", "Iceland", "Ireland", "Netherlands", "Poland", "Switzerland"] {
            assert!(found.contains(&name), "{} missing from {:?}", name, found);
        }
        assert!(!found.contains(&"Brazil"));
    }

    #[test]
    fn test_exact_name_ranks_first() {
        let (items, _) = search_page("peru", 0);
        assert_eq!(items.first().map(|item| item.label.as_str()), Some("Peru"));
        assert_eq!(items[0].value, "peru");
    }

    #[test]
    fn test_no_matches() {
        let (items, more) = search_page("zzzzqq", 0);
        assert!(items.is_empty());
        assert!(!more);
    }
}
