//! Startup Pack Projector
//!
//! Maps a [`StartupPack`] onto the HTML fragments shown by the side-panel
//! widgets. A section missing from the pack yields no fragment, and every
//! value taken from the pack is escaped before it is interpolated.

use serde::Serialize;
use tracing::warn;
use venturemind_markdown::escape;

use crate::pack::{Brand, Financials, Pitch, StartupPack};

/// Fragments for each widget. `None` means "leave the widget as it is".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackView {
    pub summary: Option<String>,
    pub brand: Option<String>,
    pub colors: Vec<String>,
    pub logo_url: Option<String>,
    pub financials: Option<String>,
    pub elevator_pitch: Option<String>,
    pub slides: Option<String>,
}

impl PackView {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Projects a pack onto widget fragments.
pub fn project(pack: &StartupPack) -> PackView {
    let mut view = PackView {
        summary: pack.startup_summary.as_deref().filter(|s| !s.is_empty()).map(summary_fragment),
        ..PackView::default()
    };

    if let Some(brand) = &pack.brand {
        view.brand = Some(brand_fragment(brand));
        view.colors = brand.colors.iter().filter_map(|c| color_chip(c)).collect();
        view.logo_url = brand.logo_url.as_deref().and_then(logo_url);
    }

    if let Some(financials) = &pack.financials {
        view.financials = Some(financials_fragment(financials));
    }

    if let Some(pitch) = &pack.pitch {
        view.elevator_pitch = Some(pitch.elevator_pitch.clone());
        view.slides = Some(slides_fragment(pitch));
    }

    view
}

fn summary_fragment(summary: &str) -> String {
    format!("<h3>Summary</h3><p>{}</p>", escape(summary))
}

fn brand_fragment(brand: &Brand) -> String {
    format!(
        "<p><strong>{}</strong> ({})</p><p>“{}”</p><p class=\"tone\">Tone: {}</p>",
        escape(&brand.name),
        escape(&brand.alt_name),
        escape(&brand.tagline),
        escape(&brand.brand_tone),
    )
}

fn labeled_list(items: &[(&str, &str)]) -> String {
    items
        .iter()
        .map(|(label, value)| format!("<li><strong>{label}:</strong> {}</li>", escape(value)))
        .collect()
}

fn financials_fragment(f: &Financials) -> String {
    labeled_list(&[
        ("Total Cost", f.total_cost.as_str()),
        ("Revenue", f.projected_revenue.as_str()),
        ("ROI", f.roi.as_str()),
        ("Burn Rate", f.burn_rate.as_str()),
        ("Break-even", f.break_even_month.as_str()),
        ("Runway", f.runway.as_str()),
    ])
}

fn slides_fragment(pitch: &Pitch) -> String {
    let s = &pitch.slides;
    labeled_list(&[
        ("Problem", s.problem.as_str()),
        ("Solution", s.solution.as_str()),
        ("Market", s.market.as_str()),
        ("Model", s.model.as_str()),
        ("Ask", s.brand_ask.as_str()),
    ])
}

/// Chip for one brand color. Values that are not a hex color or a plain
/// color name are dropped: they end up inside a `style` attribute.
fn color_chip(color: &str) -> Option<String> {
    let color = color.trim();
    if !is_css_color(color) {
        warn!(color, "Dropping brand color that is not a CSS color");
        return None;
    }
    Some(format!(
        "<div class=\"color-chip\" style=\"background:{color}\">{color}</div>"
    ))
}

fn is_css_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic()),
    }
}

fn logo_url(url: &str) -> Option<String> {
    let allowed = ["https://", "http://", "data:image/"];
    if allowed.iter().any(|scheme| url.starts_with(scheme)) {
        Some(url.to_string())
    } else {
        if !url.is_empty() {
            warn!("Ignoring logo URL with unsupported scheme");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::PitchSlides;

    fn brand() -> Brand {
        Brand {
            name: "Woof Wheels".into(),
            alt_name: "WW".into(),
            tagline: "Ride on".into(),
            colors: vec!["#1a2B3c".into(), "teal".into(), "red;x:expression()".into()],
            brand_tone: "Playful".into(),
            logo_prompt: String::new(),
            logo_url: Some("https://cdn.example.com/logo.png".into()),
        }
    }

    #[test]
    fn test_empty_pack_projects_nothing() {
        assert!(project(&StartupPack::default()).is_empty());
    }

    #[test]
    fn test_summary_is_escaped() {
        let pack = StartupPack {
            startup_summary: Some("<b>Fast</b> & cheap".into()),
            ..StartupPack::default()
        };
        let view = project(&pack);
        assert_eq!(
            view.summary.as_deref(),
            Some("<h3>Summary</h3><p>&lt;b&gt;Fast&lt;/b&gt; &amp; cheap</p>")
        );
        assert!(view.brand.is_none());
        assert!(view.financials.is_none());
    }

    #[test]
    fn test_brand_widgets() {
        let pack = StartupPack {
            brand: Some(brand()),
            ..StartupPack::default()
        };
        let view = project(&pack);
        assert_eq!(
            view.brand.as_deref(),
            Some("<p><strong>Woof Wheels</strong> (WW)</p><p>“Ride on”</p><p class=\"tone\">Tone: Playful</p>")
        );
        assert_eq!(
            view.colors,
            vec![
                "<div class=\"color-chip\" style=\"background:#1a2B3c\">#1a2B3c</div>".to_string(),
                "<div class=\"color-chip\" style=\"background:teal\">teal</div>".to_string(),
            ]
        );
        assert_eq!(view.logo_url.as_deref(), Some("https://cdn.example.com/logo.png"));
    }

    #[test]
    fn test_logo_scheme_filter() {
        let mut b = brand();
        b.logo_url = Some("javascript:alert(1)".into());
        let view = project(&StartupPack { brand: Some(b), ..StartupPack::default() });
        assert!(view.logo_url.is_none());
    }

    #[test]
    fn test_financials_and_pitch() {
        let pack = StartupPack {
            financials: Some(Financials {
                total_cost: "$10k".into(),
                roi: "3x".into(),
                ..Financials::default()
            }),
            pitch: Some(Pitch {
                elevator_pitch: "Uber for <dogs>".into(),
                slides: PitchSlides {
                    problem: "Walks".into(),
                    brand_ask: "$50k".into(),
                    ..PitchSlides::default()
                },
            }),
            ..StartupPack::default()
        };
        let view = project(&pack);

        let financials = view.financials.unwrap();
        assert!(financials.starts_with("<li><strong>Total Cost:</strong> $10k</li>"));
        assert!(financials.contains("<li><strong>ROI:</strong> 3x</li>"));
        assert_eq!(financials.matches("<li>").count(), 6);

        // Shown as plain text by the host.
        assert_eq!(view.elevator_pitch.as_deref(), Some("Uber for <dogs>"));
        let slides = view.slides.unwrap();
        assert!(slides.starts_with("<li><strong>Problem:</strong> Walks</li>"));
        assert!(slides.ends_with("<li><strong>Ask:</strong> $50k</li>"));
        assert_eq!(slides.matches("<li>").count(), 5);
    }

    #[test]
    fn test_css_color_check() {
        assert!(is_css_color("#fff"));
        assert!(is_css_color("#A1B2C3D4"));
        assert!(is_css_color("navy"));
        assert!(!is_css_color("#ggg"));
        assert!(!is_css_color("#12345"));
        assert!(!is_css_color("rgb(1,2,3)"));
        assert!(!is_css_color(""));
    }
}
