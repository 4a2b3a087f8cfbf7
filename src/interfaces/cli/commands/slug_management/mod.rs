//! Slug management commands

mod add;
mod list;
mod show;
mod update;

pub use add::add_slug;
pub use list::list_slugs;
pub use show::show_slug;
pub use update::update_slug;
