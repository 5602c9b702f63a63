use super::ReportEntry;
use crate::config::ReportConfig;
use crate::types::*;
use anyhow::Result;
use chrono::{DateTime, Utc};
use quick_xml::escape::escape;
use regex::Regex;
use std::fmt::Write;
use std::sync::OnceLock;

const YES: &str = "✅";
const NO: &str = "❌";

fn mark(value: bool) -> &'static str {
    if value {
        YES
    } else {
        NO
    }
}

/// Replace every run of single and double quotes with one space
pub fn clean_title(title: &str) -> String {
    static QUOTES: OnceLock<Regex> = OnceLock::new();
    let quotes = QUOTES.get_or_init(|| Regex::new(r#"['"]+"#).expect("valid quote pattern"));
    quotes.replace_all(title, " ").into_owned()
}

/// Survival cell: a single cross unless classic survival is supported
fn survival_cell(info: &SurvivalSupport) -> String {
    if !info.classic {
        return NO.to_string();
    }

    format!(
        r#"
<div class="container-survival">
    <div>
        <span>Classic:</span>
        <span>{}</span>
    </div>
    <br />
    <div>
        <span>Hardcore:</span>
        <span>{}</span>
    </div>
</div>
  "#,
        mark(info.classic),
        mark(info.hardcore)
    )
}

/// Payload of the row's `data-map` attribute, read by the client-side filter
fn data_map_attribute(entry: &ReportEntry) -> Result<String> {
    let mut cleaned = entry.clone();
    cleaned.summary.title = clean_title(&entry.summary.title);
    let json = serde_json::to_string(&cleaned)?;
    Ok(escape(json.as_str()).into_owned())
}

fn render_row(entry: &ReportEntry, config: &ReportConfig) -> Result<String> {
    let g = &entry.summary.gamemodes;
    let id = entry.summary.id;
    let hosting = if entry.hosting {
        format!("{YES}{}", if g.climb { " (climb)" } else { "" })
    } else {
        NO.to_string()
    };

    Ok(format!(
        r#"<tr class="map-row" data-map='{data}'>
    <td>{id}</td>
    <td><a href="{url}{id}" target="_blank">{title}</a></td>
    <td>{dm}</td>
    <td>{tdm}</td>
    <td>{ctf}</td>
    <td>{surv}</td>
    <td>{zomb}</td>
    <td>{wd}</td>
    <td>{to}</td>
    <td>{climb}</td>
    <td />
    <td>{hosting}</td>
    </tr>"#,
        data = data_map_attribute(entry)?,
        url = escape(config.workshop_item_url.as_str()),
        title = escape(entry.summary.title.as_str()),
        dm = mark(g.deathmatch),
        tdm = mark(g.team_deathmatch),
        ctf = mark(g.capture_the_flag),
        surv = survival_cell(&g.survival),
        zomb = mark(g.zombrains),
        wd = mark(g.weapon_deal),
        to = mark(g.take_over),
        climb = mark(g.climb),
    ))
}

/// Render the full index page
pub fn render_html(
    entries: &[ReportEntry],
    config: &ReportConfig,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let mut rows = String::new();
    for entry in entries {
        rows.push_str(&render_row(entry, config)?);
    }

    let mut head = String::new();
    for stylesheet in &config.stylesheets {
        writeln!(
            head,
            r#"<link rel="stylesheet" type="text/css" href="{}" />"#,
            escape(stylesheet.as_str())
        )?;
    }
    let script = config
        .script
        .as_deref()
        .map(|src| format!(r#"<script src="{}"></script>"#, escape(src)))
        .unwrap_or_default();

    Ok(format!(
        r#"<!DOCTYPE html>
<!-- Generated {generated} from {count} maps -->
<html>
<head>
<meta charset="UTF-8">
<title>{title}</title>
{head}</head>
<body>
<div id="filters">
<!-- Filters -->
</div>
<table class="pure-table pure-table-horizontal">
<thead>
    <tr>
        <th>ID</th>
        <th>Map name</th>
        <th>DM</th>
        <th>TDM</th>
        <th>CTF</th>
        <th>SURV</th>
        <th>ZOMB</th>
        <th>WD</th>
        <th>TO</th>
        <th>CLB</th>
        <th></th>
        <th>Good for hosting</th>
    </tr>
</thead>
<tbody>
    {rows}
</tbody>
</table>
{script}
</body>
</html>"#,
        generated = generated_at.to_rfc3339(),
        count = entries.len(),
        title = escape(config.page_title.as_str()),
    ))
}
