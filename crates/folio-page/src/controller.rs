/// Owns the two catalogs and the current filter controls, and derives the
/// rendered grids from them.
///
/// Each catalog goes through exactly two phases: empty at construction, then
/// replaced wholesale once by `load` (real content or the documented
/// fallback). Everything after that is pure re-derivation: changing a control
/// value and re-rendering never touches the network again.
use folio_common::fetch::DocumentClient;
use tracing::{info, warn};

use crate::matcher::{self, CategoryFilter};
use crate::model::{self, Project, Writeup};
use crate::render;

/// Document paths, resolved against the client's base URL.
pub const PROJECTS_PATH: &str = "assets/data/projects.json";
pub const WRITEUPS_PATH: &str = "assets/data/writeups.json";

pub struct PageController {
    projects: Vec<Project>,
    writeups: Vec<Writeup>,
    /// Current search box value, normalized.
    query: String,
    category: CategoryFilter,
}

impl PageController {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            writeups: Vec::new(),
            query: String::new(),
            category: CategoryFilter::All,
        }
    }

    /// Fetch both documents concurrently and replace the catalogs wholesale.
    ///
    /// Load failures are recovered locally and never surface as an error
    /// state: projects fall back to the single hardcoded demonstration entry,
    /// writeups to the empty list (whose grid then shows the missing-data
    /// notice). The two loads are independent; neither blocks the other.
    pub async fn load(&mut self, client: &DocumentClient) {
        let (projects, writeups) = tokio::join!(
            client.get_json::<Vec<Project>>(PROJECTS_PATH),
            client.get_json::<Vec<Writeup>>(WRITEUPS_PATH),
        );

        match projects {
            Ok(list) => {
                info!(count = list.len(), "projects loaded");
                self.projects = list;
            }
            Err(e) => {
                warn!(error = %e, "could not load projects.json; using fallback");
                self.projects = vec![model::fallback_project()];
            }
        }

        match writeups {
            Ok(list) => {
                info!(count = list.len(), "writeups loaded");
                self.writeups = list;
            }
            Err(e) => {
                warn!(error = %e, "could not load writeups.json");
                self.writeups = Vec::new();
            }
        }
    }

    /// Store the raw search box value, normalized for matching.
    pub fn set_query(&mut self, raw: &str) {
        self.query = matcher::normalize(raw);
    }

    /// Store the category selector value ("all" clears the filter).
    pub fn set_category(&mut self, raw: &str) {
        self.category = CategoryFilter::from_selection(raw);
    }

    /// Projects passing the current filter, catalog order preserved.
    pub fn visible_projects(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| matcher::matches(p, &self.query, &self.category))
            .collect()
    }

    pub fn project_grid(&self) -> String {
        render::render_project_grid(&self.visible_projects())
    }

    /// Writeups are render-only: no search, no category filter.
    pub fn writeup_grid(&self) -> String {
        render::render_writeup_grid(&self.writeups)
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    pub fn writeup_count(&self) -> usize {
        self.writeups.len()
    }
}

impl Default for PageController {
    fn default() -> Self {
        Self::new()
    }
}
