//! Slug administration
//!
//! Create/update/list operations used by the CLI. Targets are validated here
//! with the same rules the resolver applies, so a record created through this
//! service never falls back because of its URL.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::errors::{DynqrError, Result};
use crate::storage::{NewSlugRecord, SeaOrmStorage, SlugRecord};
use crate::utils::url_validator::validation_error_message;
use crate::utils::{GENERATED_SLUG_LENGTH, generate_random_slug, is_valid_slug, validate_url};

/// 生成 slug 冲突时的最大尝试次数
const MAX_GENERATE_ATTEMPTS: usize = 5;

/// Request to create a new slug record
#[derive(Debug, Clone, Default)]
pub struct CreateSlugRequest {
    /// Slug (optional, generated if not provided)
    pub slug: Option<String>,
    pub title: String,
    pub redirect_url: String,
    pub owner_id: String,
}

/// Result of a create operation
#[derive(Debug, Clone)]
pub struct SlugCreateResult {
    pub record: SlugRecord,
    pub generated_slug: bool,
}

pub struct SlugService {
    storage: Arc<SeaOrmStorage>,
    public_base_url: String,
}

impl SlugService {
    pub fn new(storage: Arc<SeaOrmStorage>, public_base_url: impl Into<String>) -> Self {
        Self {
            storage,
            public_base_url: public_base_url.into(),
        }
    }

    /// 二维码中编码的扫码地址：`<public_base_url>/r/<slug>`
    pub fn scan_url(&self, slug: &str) -> String {
        format!("{}/r/{}", self.public_base_url.trim_end_matches('/'), slug)
    }

    fn check_url(redirect_url: &str) -> Result<()> {
        validate_url(redirect_url).map_err(|e| {
            DynqrError::validation(format!("{} ({})", validation_error_message(&e), e))
        })
    }

    pub async fn create(&self, req: CreateSlugRequest) -> Result<SlugCreateResult> {
        Self::check_url(&req.redirect_url)?;

        if let Some(slug) = req.slug.as_deref().filter(|s| !s.is_empty()) {
            if !is_valid_slug(slug) {
                return Err(DynqrError::validation(format!(
                    "Invalid slug '{}'. Use 1-64 characters from A-Z, a-z, 0-9, '_' and '-'.",
                    slug
                )));
            }
            let record = self
                .storage
                .insert(NewSlugRecord {
                    slug: slug.to_string(),
                    title: req.title,
                    redirect_url: req.redirect_url,
                    owner_id: req.owner_id,
                })
                .await?;
            return Ok(SlugCreateResult {
                record,
                generated_slug: false,
            });
        }

        for attempt in 1..=MAX_GENERATE_ATTEMPTS {
            let slug = generate_random_slug(GENERATED_SLUG_LENGTH);
            let new = NewSlugRecord {
                slug: slug.clone(),
                title: req.title.clone(),
                redirect_url: req.redirect_url.clone(),
                owner_id: req.owner_id.clone(),
            };
            match self.storage.insert(new).await {
                Ok(record) => {
                    debug!("Generated slug {} on attempt {}", slug, attempt);
                    return Ok(SlugCreateResult {
                        record,
                        generated_slug: true,
                    });
                }
                Err(DynqrError::Conflict(_)) => {
                    warn!("Generated slug {} collided, retrying", slug);
                }
                Err(e) => return Err(e),
            }
        }

        Err(DynqrError::conflict(format!(
            "Could not generate a free slug after {} attempts",
            MAX_GENERATE_ATTEMPTS
        )))
    }

    pub async fn update_target(&self, slug: &str, redirect_url: &str) -> Result<SlugRecord> {
        Self::check_url(redirect_url)?;
        self.storage.update_redirect_url(slug, redirect_url).await?;
        self.get(slug).await
    }

    pub async fn get(&self, slug: &str) -> Result<SlugRecord> {
        self.storage
            .get(slug)
            .await?
            .ok_or_else(|| DynqrError::not_found(format!("Slug '{}' does not exist", slug)))
    }

    pub async fn list(&self, owner_id: Option<&str>) -> Result<Vec<SlugRecord>> {
        self.storage.list(owner_id).await
    }
}
