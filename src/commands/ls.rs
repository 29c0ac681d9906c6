use owo_colors::OwoColorize;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{SourceOptions, print_json};
use crate::error::Result;
use crate::table::{clamp_page, filter_records, page_count, paginate};
use crate::types::Record;

/// Options for `roster ls`
#[derive(Debug, Clone, Default)]
pub struct LsOptions {
    pub source: SourceOptions,
    /// Search query applied before paging
    pub query: Option<String>,
    /// 1-indexed page to print
    pub page: usize,
    /// Emit JSON instead of a table
    pub json: bool,
}

/// A row in the member list table
#[derive(Tabled)]
struct MemberRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: String,
}

impl From<&Record> for MemberRow {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name.clone(),
            email: record.email.clone(),
            role: record.role.clone(),
        }
    }
}

/// Fetch the feed once, then print one filtered page
pub async fn cmd_ls(options: LsOptions) -> Result<()> {
    let (config, source) = options.source.resolve()?;
    let records = source.load(config.request_timeout()).await?;

    let query = options.query.unwrap_or_default();
    let filtered = filter_records(&records, &query);
    let pages = page_count(filtered.len(), config.page_size);
    let page = clamp_page(options.page.max(1), filtered.len(), config.page_size);
    let rows = paginate(&filtered, page, config.page_size);

    if options.json {
        return print_json(&json!({
            "page": page,
            "page_count": pages,
            "filtered": filtered.len(),
            "total": records.len(),
            "records": rows,
        }));
    }

    if rows.is_empty() {
        if query.is_empty() {
            println!("No members found.");
        } else {
            println!("No members match '{}'.", query);
        }
        return Ok(());
    }

    let mut table = Table::new(rows.iter().map(|record| MemberRow::from(*record)));
    table.with(Style::rounded());
    println!("{table}");

    println!(
        "\n{} {}",
        format!("Page {} of {}", page, pages).bold(),
        format!("({} of {} members)", filtered.len(), records.len()).dimmed()
    );
    Ok(())
}
