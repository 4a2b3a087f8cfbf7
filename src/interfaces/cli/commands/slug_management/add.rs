//! Add slug command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::{CreateSlugRequest, SlugService};

pub async fn add_slug(service: &SlugService, request: CreateSlugRequest) -> Result<(), CliError> {
    let result = service.create(request).await?;
    let record = &result.record;

    if result.generated_slug {
        println!(
            "{} Generated random slug: {}",
            "ℹ".bold().blue(),
            record.slug.magenta()
        );
    }

    println!(
        "{} Added slug: {} -> {}",
        "✓".bold().green(),
        record.slug.cyan(),
        record.redirect_url.blue().underline()
    );
    println!(
        "{} Scan URL: {}",
        "ℹ".bold().blue(),
        service.scan_url(&record.slug).yellow()
    );

    Ok(())
}
