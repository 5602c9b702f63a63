use super::html::clean_title;
use super::ReportEntry;

pub const CSV_HEADER: [&str; 12] = [
    "id",
    "title",
    "deathmatch",
    "teamDeathmatch",
    "captureTheFlag",
    "surv_classic",
    "surv_hardcore",
    "zombrains",
    "weaponDeal",
    "takeOver",
    "climb",
    "hosting",
];

/// One id per line
pub fn export_ids(entries: &[&ReportEntry]) -> String {
    entries
        .iter()
        .map(|e| e.summary.id.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Quote a field when it holds a separator, a quote or a line break
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Titles are written cleaned, as they appear in the index page's row data
pub fn export_csv(entries: &[&ReportEntry]) -> String {
    let mut lines = vec![CSV_HEADER.join(",")];

    for entry in entries {
        let g = &entry.summary.gamemodes;
        let row = [
            entry.summary.id.to_string(),
            csv_field(&clean_title(&entry.summary.title)),
            g.deathmatch.to_string(),
            g.team_deathmatch.to_string(),
            g.capture_the_flag.to_string(),
            g.survival.classic.to_string(),
            g.survival.hardcore.to_string(),
            g.zombrains.to_string(),
            g.weapon_deal.to_string(),
            g.take_over.to_string(),
            g.climb.to_string(),
            entry.hosting.to_string(),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}
