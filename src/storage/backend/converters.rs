use sea_orm::ActiveValue::Set;

use crate::storage::{NewSlugRecord, SlugRecord};
use migration::entities::qr_code;

/// 将 Sea-ORM Model 转换为 SlugRecord
pub fn model_to_record(model: qr_code::Model) -> SlugRecord {
    SlugRecord {
        slug: model.slug,
        title: model.title,
        redirect_url: model.redirect_url,
        visit_count: model.visit_count.max(0) as u64,
        owner_id: model.owner_id,
        created_at: model.created_at,
    }
}

/// 新记录的 ActiveModel，计数从 0 开始
pub fn new_record_to_active_model(
    record: &NewSlugRecord,
    created_at: chrono::DateTime<chrono::Utc>,
) -> qr_code::ActiveModel {
    qr_code::ActiveModel {
        slug: Set(record.slug.clone()),
        title: Set(record.title.clone()),
        redirect_url: Set(record.redirect_url.clone()),
        visit_count: Set(0),
        owner_id: Set(record.owner_id.clone()),
        created_at: Set(created_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_model_to_record_clamps_negative_count() {
        let model = qr_code::Model {
            slug: "abc123".to_string(),
            title: "Menu".to_string(),
            redirect_url: "https://example.com/menu".to_string(),
            visit_count: -3,
            owner_id: "owner-1".to_string(),
            created_at: Utc::now(),
        };
        let record = model_to_record(model);
        assert_eq!(record.visit_count, 0);
        assert_eq!(record.redirect_url, "https://example.com/menu");
    }

    #[test]
    fn test_new_record_starts_at_zero() {
        let new = NewSlugRecord {
            slug: "abc123".to_string(),
            title: String::new(),
            redirect_url: "https://example.com".to_string(),
            owner_id: "cli".to_string(),
        };
        let active = new_record_to_active_model(&new, Utc::now());
        assert!(matches!(active.visit_count, Set(0)));
        if let Set(slug) = active.slug {
            assert_eq!(slug, "abc123");
        } else {
            panic!("slug should be set");
        }
    }
}
