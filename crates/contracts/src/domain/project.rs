use serde::{Deserialize, Serialize};

/// Fallback caption shown under a project image when none is authored.
pub const DEFAULT_IMAGE_CAPTION: &str = "Project Artifact";

/// Structured write-up behind a project card, rendered as ordered bullet
/// lists in the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub tldr: String,
    pub context: Vec<String>,
    #[serde(rename = "inputsTools")]
    pub inputs_tools: Vec<String>,
    #[serde(rename = "outputsOutcome")]
    pub outputs_outcome: Vec<String>,
    #[serde(rename = "nextIteration")]
    pub next_iteration: Vec<String>,
}

/// One case study in the portfolio catalog.
///
/// `id` is the stable key of the record in the catalog and unique across it.
/// `description` may embed `**bold**` emphasis markers, parsed by
/// [`crate::shared::markup::parse_emphasis`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub details: ProjectDetails,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(rename = "imageCaption")]
    pub image_caption: Option<String>,
}

impl ProjectRecord {
    /// The authored image URL, or a generated placeholder keyed by title.
    pub fn image_or_placeholder(&self, width: u32, height: u32) -> String {
        match &self.image_url {
            Some(url) => url.clone(),
            None => format!(
                "https://placehold.co/{}x{}/f5f5f4/c7c5bf?text={}",
                width,
                height,
                urlencoding::encode(&self.title)
            ),
        }
    }

    /// The authored caption, or the fixed placeholder string.
    pub fn caption_or_default(&self) -> &str {
        self.image_caption
            .as_deref()
            .unwrap_or(DEFAULT_IMAGE_CAPTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(image_url: Option<&str>, image_caption: Option<&str>) -> ProjectRecord {
        ProjectRecord {
            id: "okrs".into(),
            title: "End-to-End OKRs".into(),
            subtitle: "CEO Agenda Translation".into(),
            description: "**Built and launched** the process".into(),
            details: ProjectDetails::default(),
            image_url: image_url.map(Into::into),
            image_caption: image_caption.map(Into::into),
        }
    }

    #[test]
    fn test_image_falls_back_to_placeholder_keyed_by_title() {
        let r = record(None, None);
        assert_eq!(
            r.image_or_placeholder(800, 800),
            "https://placehold.co/800x800/f5f5f4/c7c5bf?text=End-to-End%20OKRs"
        );
    }

    #[test]
    fn test_authored_image_wins_over_placeholder() {
        let r = record(Some("https://i.imgur.com/LXmwL6T.png"), None);
        assert_eq!(
            r.image_or_placeholder(1200, 800),
            "https://i.imgur.com/LXmwL6T.png"
        );
    }

    #[test]
    fn test_caption_defaults() {
        assert_eq!(record(None, None).caption_or_default(), "Project Artifact");
        assert_eq!(
            record(None, Some("Company roadmap")).caption_or_default(),
            "Company roadmap"
        );
    }

    #[test]
    fn test_serializes_with_camel_case_field_names() {
        let json = serde_json::to_value(record(None, Some("cap"))).unwrap();
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("imageCaption").is_some());
        let details = json.get("details").unwrap();
        assert!(details.get("inputsTools").is_some());
        assert!(details.get("outputsOutcome").is_some());
        assert!(details.get("nextIteration").is_some());
    }
}
