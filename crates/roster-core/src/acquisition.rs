//! Data Acquisition
//!
//! Walks a paginated collection by following `info.next` until it is null.
//! Requests are strictly sequential: each one waits for the previous response.

use async_trait::async_trait;

use crate::config::RosterConfig;
use crate::error::{FetchError, FetchResult};
use crate::models::{Character, CharacterPage};

/// Source of result pages.
///
/// The browser implementation wraps `window.fetch`; tests use an in-memory map.
/// Implementations report non-success statuses as `FetchError::Status`.
#[async_trait(?Send)]
pub trait PageSource {
    async fn fetch_page(&self, url: &str) -> FetchResult<CharacterPage>;
}

/// Fetch every page reachable from `config.base_endpoint`.
///
/// Any failure along the chain discards what was accumulated so far.
pub async fn load_all_records<S>(source: &S, config: &RosterConfig) -> FetchResult<Vec<Character>>
where
    S: PageSource + ?Sized,
{
    let first = source.fetch_page(&config.base_endpoint).await?;
    log::debug!("[FETCH] {} -> {} records", config.base_endpoint, first.results.len());

    let mut continuation = Vec::new();
    let mut pages = 1usize;
    let mut next = first.info.next_url().map(str::to_owned);

    while let Some(url) = next {
        if let Some(limit) = config.max_pages {
            if pages >= limit {
                log::warn!("[FETCH] stopping at {} pages, next was {}", pages, url);
                return Err(FetchError::PageLimit { limit });
            }
        }
        let page = source.fetch_page(&url).await?;
        pages += 1;
        log::debug!("[FETCH] {} -> {} records", url, page.results.len());
        next = page.info.next_url().map(str::to_owned);
        continuation.extend(page.results);
    }

    let records = config.page_order.assemble(first.results, continuation);
    log::info!("[FETCH] loaded {} records across {} pages", records.len(), pages);
    Ok(records)
}

/// Acquisition lifecycle: `Idle -> Loading -> {Ready, Errored}`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Errored(String),
}

impl LoadState {
    /// Enter `Loading`. Only possible from `Idle`, so a session loads once.
    pub fn begin(&mut self) -> bool {
        if *self == LoadState::Idle {
            *self = LoadState::Loading;
            true
        } else {
            false
        }
    }

    /// Leave `Loading` with the outcome. Ignored in any other state.
    pub fn finish(&mut self, outcome: Result<(), &FetchError>) -> bool {
        if *self != LoadState::Loading {
            log::warn!("[FETCH] load finished while {:?}, ignoring", self);
            return false;
        }
        *self = match outcome {
            Ok(()) => LoadState::Ready,
            Err(e) => LoadState::Errored(e.to_string()),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Idle | LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        *self == LoadState::Ready
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Errored(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageOrder;
    use crate::models::PageInfo;
    use crate::test_support::numbered;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    const BASE: &str = "https://api.test/character";

    /// In-memory API; unknown URLs answer 404
    #[derive(Default)]
    struct FakeApi {
        pages: HashMap<String, FetchResult<CharacterPage>>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeApi {
        fn page_url(n: usize) -> String {
            if n == 1 {
                BASE.to_string()
            } else {
                format!("{}?page={}", BASE, n)
            }
        }

        /// `counts[i]` records on page i+1, ids numbered consecutively
        fn paged(counts: &[u32]) -> Self {
            let mut api = FakeApi::default();
            let mut next_id = 1;
            for (i, &count) in counts.iter().enumerate() {
                let n = i + 1;
                let next = (n < counts.len()).then(|| Self::page_url(n + 1));
                let page = CharacterPage {
                    info: PageInfo { next, ..Default::default() },
                    results: numbered(next_id, count),
                };
                next_id += count;
                api.pages.insert(Self::page_url(n), Ok(page));
            }
            api
        }

        fn fail(mut self, n: usize, status: u16) -> Self {
            let url = Self::page_url(n);
            self.pages.insert(url.clone(), Err(FetchError::Status { url, status }));
            self
        }
    }

    #[async_trait(?Send)]
    impl PageSource for FakeApi {
        async fn fetch_page(&self, url: &str) -> FetchResult<CharacterPage> {
            self.calls.borrow_mut().push(url.to_string());
            self.pages.get(url).cloned().unwrap_or_else(|| {
                Err(FetchError::Status { url: url.to_string(), status: 404 })
            })
        }
    }

    fn ids(records: &[Character]) -> Vec<u32> {
        records.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_loads_every_page() {
        let api = FakeApi::paged(&[20, 20, 20, 6]);
        let records = block_on(load_all_records(&api, &RosterConfig::with_endpoint(BASE))).unwrap();

        assert_eq!(records.len(), 66);
        let unique: HashSet<u32> = records.iter().map(|c| c.id).collect();
        assert_eq!(unique.len(), 66);
        assert_eq!(ids(&records), (1..=66).collect::<Vec<_>>());
        assert_eq!(api.calls.borrow().len(), 4);
    }

    #[test]
    fn test_single_page() {
        let api = FakeApi::paged(&[3]);
        let records = block_on(load_all_records(&api, &RosterConfig::with_endpoint(BASE))).unwrap();
        assert_eq!(ids(&records), vec![1, 2, 3]);
        assert_eq!(*api.calls.borrow(), vec![BASE.to_string()]);
    }

    #[test]
    fn test_requests_follow_next_chain_in_order() {
        let api = FakeApi::paged(&[1, 1, 1]);
        block_on(load_all_records(&api, &RosterConfig::with_endpoint(BASE))).unwrap();
        assert_eq!(
            *api.calls.borrow(),
            vec![FakeApi::page_url(1), FakeApi::page_url(2), FakeApi::page_url(3)]
        );
    }

    #[test]
    fn test_continuation_first_order() {
        let api = FakeApi::paged(&[2, 2, 1]);
        let config = RosterConfig {
            page_order: PageOrder::ContinuationFirst,
            ..RosterConfig::with_endpoint(BASE)
        };
        let records = block_on(load_all_records(&api, &config)).unwrap();
        assert_eq!(ids(&records), vec![3, 4, 5, 1, 2]);
    }

    #[test]
    fn test_mid_chain_failure_aborts() {
        let api = FakeApi::paged(&[10, 10, 10]).fail(2, 500);
        let result = block_on(load_all_records(&api, &RosterConfig::with_endpoint(BASE)));

        match result {
            Err(FetchError::Status { url, status }) => {
                assert_eq!(url, FakeApi::page_url(2));
                assert_eq!(status, 500);
            }
            other => panic!("expected status error, got {:?}", other),
        }
        // page 3 is never requested
        assert_eq!(api.calls.borrow().len(), 2);
    }

    #[test]
    fn test_mid_chain_decode_error_aborts() {
        let mut api = FakeApi::paged(&[5, 5, 5]);
        let url = FakeApi::page_url(2);
        api.pages.insert(url.clone(), Err(FetchError::decode(&url, "missing field `results`")));

        let mut roster = crate::roster::Roster::new(&RosterConfig::default());
        roster.begin_loading();
        let result = block_on(load_all_records(&api, &RosterConfig::with_endpoint(BASE)));
        assert!(matches!(result, Err(FetchError::Decode { .. })));

        roster.finish_loading(result);
        assert!(roster.records().is_empty());
        assert_eq!(roster.total_pages(), 0);
        assert!(roster.load_state().error().unwrap().contains("missing field `results`"));
    }

    #[test]
    fn test_first_page_failure() {
        let api = FakeApi::default();
        let err = block_on(load_all_records(&api, &RosterConfig::with_endpoint(BASE))).unwrap_err();
        assert_eq!(err, FetchError::Status { url: BASE.to_string(), status: 404 });
    }

    #[test]
    fn test_page_limit_stops_cycle() {
        let mut api = FakeApi::default();
        api.pages.insert(
            BASE.to_string(),
            Ok(CharacterPage {
                info: PageInfo { next: Some(BASE.to_string()), ..Default::default() },
                results: numbered(1, 1),
            }),
        );
        let config = RosterConfig {
            max_pages: Some(5),
            ..RosterConfig::with_endpoint(BASE)
        };
        let err = block_on(load_all_records(&api, &config)).unwrap_err();
        assert_eq!(err, FetchError::PageLimit { limit: 5 });
        assert_eq!(api.calls.borrow().len(), 5);
    }

    #[test]
    fn test_load_state_transitions() {
        let mut state = LoadState::default();
        assert!(state.is_loading());
        assert!(state.begin());
        assert!(!state.begin());
        assert!(state.finish(Ok(())));
        assert!(state.is_ready());

        // never re-entered
        assert!(!state.begin());
        assert!(!state.finish(Err(&FetchError::PageLimit { limit: 1 })));
        assert!(state.is_ready());
    }

    #[test]
    fn test_errored_state_keeps_message() {
        let mut state = LoadState::default();
        state.begin();
        let err = FetchError::transport(BASE, "network unreachable");
        state.finish(Err(&err));
        assert_eq!(
            state.error(),
            Some("request to https://api.test/character failed: network unreachable")
        );
        assert!(!state.is_loading());
    }
}
