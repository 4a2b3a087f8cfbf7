//! 扫码跳转路由
//!
//! `/r/{slug}` 与 `/{business}/{slug}` 行为一致，任何失败都跳转到回退地址，
//! 跳转路由从不返回错误状态码。

use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{debug, trace};

use crate::config::RedirectConfig;
use crate::services::{RedirectResolver, Resolution};

const ROOT_BANNER: &str = "dynqr: scan a code to be redirected.\n";

/// 跳转路由需要的静态设置
#[derive(Debug, Clone)]
pub struct RedirectSettings {
    pub fallback_location: String,
    pub home_url: Option<String>,
}

impl RedirectSettings {
    pub fn from_config(config: &RedirectConfig) -> Self {
        Self {
            fallback_location: config.fallback_location.clone(),
            home_url: config.home_url.clone().filter(|u| !u.trim().is_empty()),
        }
    }
}

impl Default for RedirectSettings {
    fn default() -> Self {
        Self::from_config(&RedirectConfig::default())
    }
}

pub struct RedirectService;

impl RedirectService {
    pub async fn handle_scan(
        path: web::Path<String>,
        resolver: web::Data<RedirectResolver>,
        settings: web::Data<RedirectSettings>,
    ) -> HttpResponse {
        let slug = path.into_inner();
        let resolution = resolver.resolve(&slug).await;
        Self::finish(&slug, resolution, &settings)
    }

    /// 业务段只用于路由，不参与查询
    pub async fn handle_business_scan(
        path: web::Path<(String, String)>,
        resolver: web::Data<RedirectResolver>,
        settings: web::Data<RedirectSettings>,
    ) -> HttpResponse {
        let (business, slug) = path.into_inner();
        trace!("Scan for {} under business segment {}", slug, business);
        let resolution = resolver.resolve(&slug).await;
        Self::finish(&slug, resolution, &settings)
    }

    pub async fn handle_root(settings: web::Data<RedirectSettings>) -> HttpResponse {
        match &settings.home_url {
            Some(home) => Self::redirect_to(home),
            None => HttpResponse::Ok()
                .insert_header((header::CONTENT_TYPE, "text/plain; charset=utf-8"))
                .body(ROOT_BANNER),
        }
    }

    /// 未匹配任何路由的请求同样回退，而不是 404
    pub async fn handle_unmatched(
        req: HttpRequest,
        settings: web::Data<RedirectSettings>,
    ) -> HttpResponse {
        debug!("Unmatched path {} redirected to fallback", req.path());
        Self::redirect_to(&settings.fallback_location)
    }

    fn finish(slug: &str, resolution: Resolution, settings: &RedirectSettings) -> HttpResponse {
        match resolution {
            Resolution::Redirect(target) => {
                trace!("Redirecting {} -> {}", slug, target);
                Self::redirect_to(&target)
            }
            Resolution::Fallback(reason) => {
                debug!("Fallback for {}: {}", slug, reason.as_str());
                Self::redirect_to(&settings.fallback_location)
            }
        }
    }

    #[inline]
    fn redirect_to(location: &str) -> HttpResponse {
        HttpResponse::build(StatusCode::TEMPORARY_REDIRECT)
            .insert_header((header::LOCATION, location))
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// 跳转路由配置，需挂在健康检查路由之后
pub fn redirect_routes() -> actix_web::Scope {
    web::scope("")
        .route("/", web::get().to(RedirectService::handle_root))
        .route("/", web::head().to(RedirectService::handle_root))
        .route("/r/{slug}", web::get().to(RedirectService::handle_scan))
        .route("/r/{slug}", web::head().to(RedirectService::handle_scan))
        .route(
            "/{business}/{slug}",
            web::get().to(RedirectService::handle_business_scan),
        )
        .route(
            "/{business}/{slug}",
            web::head().to(RedirectService::handle_business_scan),
        )
}
