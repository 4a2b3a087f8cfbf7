//! Slug → 跳转目标解析
//!
//! 任何失败（slug 不存在、存储出错或超时、目标 URL 非法）都折叠为同一个
//! 回退结果，访问者无法区分"从未存在"和"查询出错"。

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::analytics::VisitCounter;
use crate::storage::{LookupResult, SlugStore};
use crate::utils::{is_resolvable_slug, parse_redirect_target};

/// 回退原因，仅用于内部日志
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    InvalidSlug,
    NotFound,
    StoreError,
    Timeout,
    InvalidTarget,
}

impl FallbackReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackReason::InvalidSlug => "invalid_slug",
            FallbackReason::NotFound => "not_found",
            FallbackReason::StoreError => "store_error",
            FallbackReason::Timeout => "timeout",
            FallbackReason::InvalidTarget => "invalid_target",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// 可直接写入 `Location` 的目标
    Redirect(String),
    Fallback(FallbackReason),
}

pub struct RedirectResolver {
    store: Arc<dyn SlugStore>,
    visits: VisitCounter,
    lookup_timeout: Duration,
}

impl RedirectResolver {
    pub fn new(store: Arc<dyn SlugStore>, visits: VisitCounter, lookup_timeout: Duration) -> Self {
        Self {
            store,
            visits,
            lookup_timeout,
        }
    }

    pub fn visits(&self) -> &VisitCounter {
        &self.visits
    }

    pub async fn resolve(&self, slug: &str) -> Resolution {
        if !is_resolvable_slug(slug) {
            debug!("Rejected slug without lookup ({} bytes)", slug.len());
            return Resolution::Fallback(FallbackReason::InvalidSlug);
        }

        let record = match tokio::time::timeout(self.lookup_timeout, self.store.lookup(slug)).await
        {
            Ok(LookupResult::Found(record)) => record,
            Ok(LookupResult::NotFound) => {
                debug!("Slug not found: {}", slug);
                return Resolution::Fallback(FallbackReason::NotFound);
            }
            Ok(LookupResult::StoreError(e)) => {
                warn!("Store error while resolving {}: {}", slug, e);
                return Resolution::Fallback(FallbackReason::StoreError);
            }
            Err(_) => {
                warn!(
                    "Lookup for {} exceeded {:?} on {}",
                    slug,
                    self.lookup_timeout,
                    self.store.backend_name()
                );
                return Resolution::Fallback(FallbackReason::Timeout);
            }
        };

        // 计数与目标校验相互独立：记录存在即计一次访问
        self.visits.record(&record.slug);

        match parse_redirect_target(&record.redirect_url) {
            Ok(target) => Resolution::Redirect(target.into_owned()),
            Err(e) => {
                warn!("Stored target for {} rejected: {}", slug, e);
                Resolution::Fallback(FallbackReason::InvalidTarget)
            }
        }
    }
}
