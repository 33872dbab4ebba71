//! Table rendering for list mode

use tabled::{Table, Tabled};

use crate::version::date::TargetDate;
use crate::version::types::Resolution;

/// One row of the list-mode table
#[derive(Debug, Tabled)]
struct ResolutionRow {
    #[tabled(rename = "Package")]
    package: String,
    #[tabled(rename = "Version")]
    version: String,
    #[tabled(rename = "Release date")]
    release_date: String,
}

/// Formats the resolved versions as a table preceded by a title line
pub fn format_table(target_date: TargetDate, resolutions: &[Resolution]) -> String {
    let rows: Vec<ResolutionRow> = resolutions
        .iter()
        .map(|r| ResolutionRow {
            package: r.package.clone(),
            version: r.version.clone(),
            release_date: r.display_upload_time(),
        })
        .collect();

    format!(
        "\nActual packages for date {}:\n\n{}",
        target_date,
        Table::new(rows)
    )
}
