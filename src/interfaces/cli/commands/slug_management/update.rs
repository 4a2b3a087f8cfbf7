//! Update slug command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::SlugService;

pub async fn update_slug(
    service: &SlugService,
    slug: &str,
    redirect_url: &str,
) -> Result<(), CliError> {
    let record = service.update_target(slug, redirect_url).await?;

    println!(
        "{} Slug updated: {} -> {}",
        "✓".bold().green(),
        record.slug.cyan(),
        record.redirect_url.blue().underline()
    );
    println!(
        "{} Printed codes keep working, scans now land on the new target",
        "ℹ".bold().blue()
    );

    Ok(())
}
