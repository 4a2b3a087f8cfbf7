//! List slugs command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::SlugService;

pub async fn list_slugs(service: &SlugService, owner_id: Option<&str>) -> Result<(), CliError> {
    let records = service.list(owner_id).await?;

    if records.is_empty() {
        println!("{} No slugs found", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Slug list:".bold().green());
    println!();
    for record in &records {
        let mut info_parts = vec![format!(
            "{} -> {}",
            record.slug.cyan(),
            record.redirect_url.blue().underline()
        )];

        if !record.title.is_empty() {
            info_parts.push(format!("\"{}\"", record.title));
        }

        if !record.owner_id.is_empty() && owner_id.is_none() {
            info_parts.push(
                format!("(owner: {})", record.owner_id)
                    .dimmed()
                    .yellow()
                    .to_string(),
            );
        }

        info_parts.push(
            format!("(visits: {})", record.visit_count)
                .dimmed()
                .cyan()
                .to_string(),
        );

        println!("  {}", info_parts.join(" "));
    }
    println!();
    println!(
        "{} Total {} slugs",
        "ℹ".bold().blue(),
        records.len().to_string().green()
    );
    Ok(())
}
