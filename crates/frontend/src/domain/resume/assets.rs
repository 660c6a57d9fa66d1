//! Locating the résumé document.
//!
//! The deployed asset can sit at the root or under `public/` depending on
//! how the bundle was assembled, so a short ordered list of candidates is
//! probed with bodiless existence checks.

use crate::shared::config;
use contracts::domain::profile;
use gloo_net::http::{Method, RequestBuilder};
use std::future::Future;

/// Candidate asset URLs for the given deployment root, in probe order.
pub fn resume_candidates(base_path: &str) -> Vec<String> {
    vec![
        format!("{}{}", base_path, profile::RESUME_FILE_NAME),
        format!("{}public/{}", base_path, profile::RESUME_FILE_NAME),
    ]
}

/// Bodiless existence check for one candidate. Any failure, network or
/// status, just means "try the next one".
async fn head_ok(url: String) -> bool {
    let response = RequestBuilder::new(&url)
        .method(Method::HEAD)
        .cache(web_sys::RequestCache::NoStore)
        .send()
        .await;

    match response {
        Ok(response) => response.ok(),
        Err(e) => {
            log::debug!("resume probe failed for {}: {}", url, e);
            false
        }
    }
}

/// Sequential short-circuiting probe: the first candidate that checks out
/// wins; `None` when every candidate fails.
async fn resolve_first<P, F>(candidates: &[String], probe: P) -> Option<String>
where
    P: Fn(String) -> F,
    F: Future<Output = bool>,
{
    for url in candidates {
        if probe(url.clone()).await {
            return Some(url.clone());
        }
    }
    None
}

/// Resolve the résumé URL for the current deployment.
///
/// When every probe fails this still yields the first candidate, so the
/// view/download actions always have a target; a wrong one will 404
/// visibly rather than error out here.
pub async fn resolve_resume_url() -> String {
    let candidates = resume_candidates(&config::base_path());
    match resolve_first(&candidates, head_ok).await {
        Some(url) => url,
        None => candidates
            .into_iter()
            .next()
            .expect("candidate list is never empty"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    /// The probe futures under test are always immediately ready, so a
    /// noop-waker poll loop is all the executor we need.
    fn block_on<F: Future>(future: F) -> F::Output {
        let mut future = pin!(future);
        let mut cx = Context::from_waker(Waker::noop());
        loop {
            if let Poll::Ready(value) = future.as_mut().poll(&mut cx) {
                return value;
            }
        }
    }

    fn candidates() -> Vec<String> {
        resume_candidates("/portfolio/")
    }

    #[test]
    fn test_candidates_are_ordered_root_first() {
        assert_eq!(
            candidates(),
            vec![
                "/portfolio/Jeff_Yuen_Resume.pdf".to_string(),
                "/portfolio/public/Jeff_Yuen_Resume.pdf".to_string(),
            ]
        );
    }

    #[test]
    fn test_later_candidate_wins_when_first_fails() {
        let second = candidates()[1].clone();
        let resolved = block_on(resolve_first(&candidates(), |url| {
            let second = second.clone();
            async move { url == second }
        }));
        assert_eq!(resolved, Some(second));
    }

    #[test]
    fn test_total_failure_resolves_to_none() {
        let resolved = block_on(resolve_first(&candidates(), |_| async { false }));
        assert_eq!(resolved, None);
    }

    #[test]
    fn test_probing_stops_at_the_first_success() {
        let probed = RefCell::new(Vec::new());
        let resolved = block_on(resolve_first(&candidates(), |url| {
            probed.borrow_mut().push(url.clone());
            async { true }
        }));
        assert_eq!(resolved.as_deref(), Some("/portfolio/Jeff_Yuen_Resume.pdf"));
        assert_eq!(probed.borrow().len(), 1);
    }
}
