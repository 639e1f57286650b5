use serde::{Deserialize, Serialize};

/// One project entry from `assets/data/projects.json`.
///
/// Decoding is permissive: `tags` defaults to empty when absent, the three
/// link fields are optional, and unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Category tag used for exact-match filtering, e.g. "ai", "security".
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Source repository URL.
    pub repo: Option<String>,
    /// Live demo URL.
    pub demo: Option<String>,
    /// Long-form writeup URL.
    pub writeup: Option<String>,
}

/// One writeup entry from `assets/data/writeups.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Writeup {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Target of the "Read" action. Required; a document missing it fails to
    /// decode and the page falls back to the empty writeup list.
    pub link: String,
}

/// The single hardcoded project shown when `projects.json` cannot be loaded,
/// so the page never renders empty.
pub fn fallback_project() -> Project {
    Project {
        title: "Security-AI-Lab (PoC)".to_string(),
        description: "A small proof-of-concept for log-based anomaly exploration and feature extraction.".to_string(),
        category: "ai".to_string(),
        tags: vec![
            "Python".to_string(),
            "Notebook".to_string(),
            "Logs".to_string(),
        ],
        repo: Some("https://github.com/MrR3bu5".to_string()),
        demo: None,
        writeup: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_decodes_with_optional_fields_absent() {
        let json = r#"{"title": "Alpha", "description": "network scanner", "category": "security"}"#;
        let p: Project = serde_json::from_str(json).expect("decodes");
        assert_eq!(p.title, "Alpha");
        assert!(p.tags.is_empty());
        assert!(p.repo.is_none());
        assert!(p.demo.is_none());
        assert!(p.writeup.is_none());
    }

    #[test]
    fn project_ignores_unknown_fields() {
        let json = r#"{"title": "Alpha", "description": "d", "category": "c", "stars": 42}"#;
        assert!(serde_json::from_str::<Project>(json).is_ok());
    }

    #[test]
    fn writeup_requires_a_link() {
        let json = r#"{"title": "Post", "summary": "s"}"#;
        assert!(serde_json::from_str::<Writeup>(json).is_err());
    }

    #[test]
    fn fallback_project_is_the_demo_entry() {
        let p = fallback_project();
        assert_eq!(p.title, "Security-AI-Lab (PoC)");
        assert_eq!(p.category, "ai");
        assert_eq!(p.tags.len(), 3);
        assert!(p.repo.is_some());
        assert!(p.demo.is_none());
    }
}
