//! `reply` command: turn a chat API response into the chat bubble and the
//! side-panel widgets the page would show.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};
use venturemind_core::{
    ChatReply, ClientError, CompetitorRow, DomainCheck, ErrorBody, HistoryDetail, PackView,
    Transcript, project,
};
use venturemind_logging::redact_sensitive_data;

use crate::terminal_output::{Column, heading, render_table};

#[derive(Debug, Clone, Copy, Default)]
pub struct ReplyOptions {
    pub history: bool,
    pub json: bool,
    pub speak: bool,
    /// HTTP status the body came with; 4xx/5xx bodies are error details.
    pub status: Option<u16>,
}

/// Everything one reply puts on the page.
#[derive(Debug, Serialize)]
struct ReplyOutput {
    bubbles: Vec<String>,
    widgets: PackView,
    #[serde(skip_serializing_if = "Option::is_none")]
    speech: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    competitors: Vec<CompetitorRow>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    domains: Vec<DomainCheck>,
    /// Set when the body was an error response; returned after printing.
    #[serde(skip)]
    failure: Option<ClientError>,
}

pub fn run(raw: &str, options: &ReplyOptions) -> Result<()> {
    let output = build(raw, options)?;
    if options.json {
        let json = serde_json::to_string_pretty(&output).context("Failed to serialize reply output")?;
        println!("{json}");
    } else {
        print!("{}", format_text(&output));
    }
    match output.failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

fn build(raw: &str, options: &ReplyOptions) -> Result<ReplyOutput> {
    let mut transcript = Transcript::new();

    if let Some(status) = options.status.filter(|s| *s >= 400) {
        let body = ErrorBody::parse_lossy(raw);
        warn!(status, detail = body.display_text(), "Assistant returned an error");
        transcript.push_error(body.display_text());
        return Ok(ReplyOutput {
            bubbles: transcript.turns().iter().map(|t| t.to_html()).collect(),
            widgets: PackView::default(),
            speech: None,
            competitors: Vec::new(),
            domains: Vec::new(),
            failure: Some(body.into_error(status)),
        });
    }

    let reply = if options.history {
        let detail: HistoryDetail =
            serde_json::from_str(raw).context("Failed to parse history record")?;
        info!(history_id = detail.id, "Loading history item");
        transcript.push_history(&detail);
        ChatReply::from_history(&detail)
    } else {
        let reply = ChatReply::from_json(raw).context("Failed to parse chat reply")?;
        debug!(
            preview = %redact_sensitive_data(&preview(&reply.reply_markdown)),
            has_pack = reply.startup_pack.is_some(),
            "Received reply"
        );
        transcript.push_reply(&reply);
        reply
    };

    let widgets = reply.startup_pack.as_ref().map(project).unwrap_or_default();
    // History reloads carry no markdown, so there is nothing to speak.
    let speech = (options.speak && !reply.reply_markdown.is_empty()).then(|| reply.speech());

    Ok(ReplyOutput {
        bubbles: transcript.turns().iter().map(|t| t.to_html()).collect(),
        widgets,
        speech,
        competitors: reply.competitor_matrix,
        domains: reply.domains,
        failure: None,
    })
}

fn preview(text: &str) -> String {
    text.chars().take(80).collect()
}

fn format_text(output: &ReplyOutput) -> String {
    let mut out = String::new();
    let mut section = |title: &str, body: &str| {
        out.push_str(&heading(title));
        out.push('\n');
        out.push_str(body);
        out.push_str("\n\n");
    };

    for bubble in &output.bubbles {
        section("Message", bubble);
    }

    let w = &output.widgets;
    let fragments = [
        ("Summary", &w.summary),
        ("Brand", &w.brand),
        ("Logo", &w.logo_url),
        ("Financials", &w.financials),
        ("Elevator Pitch", &w.elevator_pitch),
        ("Pitch Slides", &w.slides),
    ];
    for (title, fragment) in fragments {
        if let Some(fragment) = fragment {
            section(title, fragment);
        }
    }
    if !w.colors.is_empty() {
        section("Colors", &w.colors.join("\n"));
    }

    if !output.competitors.is_empty() {
        section("Competitors", competitor_table(&output.competitors).trim_end());
    }
    if !output.domains.is_empty() {
        section("Domains", domain_table(&output.domains).trim_end());
    }

    if let Some(speech) = &output.speech {
        section("Speech", speech);
    }
    out
}

fn competitor_table(rows: &[CompetitorRow]) -> String {
    let columns = [
        Column::left("Name"),
        Column::left("Type"),
        Column::left("Strengths").with_max_width(30),
        Column::left("Weaknesses").with_max_width(30),
        Column::left("Pricing").with_max_width(20),
    ];
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                r.kind.clone(),
                r.strengths.clone(),
                r.weaknesses.clone(),
                r.pricing_hint.clone(),
            ]
        })
        .collect();
    render_table(&columns, &rows)
}

fn domain_table(rows: &[DomainCheck]) -> String {
    let columns = [
        Column::left("Domain"),
        Column::left("TLD"),
        Column::left("Availability"),
        Column::left("Comment").with_max_width(40),
    ];
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|d| {
            vec![
                d.domain.clone(),
                d.tld.clone(),
                d.availability.clone(),
                d.comment.clone(),
            ]
        })
        .collect();
    render_table(&columns, &rows)
}
