//! Show slug command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::SlugService;

pub async fn show_slug(service: &SlugService, slug: &str) -> Result<(), CliError> {
    let record = service.get(slug).await?;

    println!("{} {}", "Slug:".bold(), record.slug.cyan());
    if !record.title.is_empty() {
        println!("{} {}", "Title:".bold(), record.title);
    }
    println!(
        "{} {}",
        "Redirect URL:".bold(),
        record.redirect_url.blue().underline()
    );
    println!(
        "{} {}",
        "Scan URL:".bold(),
        service.scan_url(&record.slug).yellow()
    );
    println!(
        "{} {}",
        "Visits:".bold(),
        record.visit_count.to_string().green()
    );
    if !record.owner_id.is_empty() {
        println!("{} {}", "Owner:".bold(), record.owner_id);
    }
    println!(
        "{} {}",
        "Created:".bold(),
        record.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    Ok(())
}
