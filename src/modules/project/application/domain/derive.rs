use super::entities::Project;

/// Sentinel tag that matches every project.
pub const ALL_TAG: &str = "All";

/// How many related projects a detail view shows at most.
pub const RELATED_LIMIT: usize = 3;

//
// ──────────────────────────────────────────────────────────
// Pure derivations over the project collection
// ──────────────────────────────────────────────────────────
//

/// Union of all tags across `projects`, deduplicated, sorted ascending,
/// with the `"All"` sentinel prepended.
pub fn tag_universe(projects: &[Project]) -> Vec<String> {
    let mut tags: Vec<String> = projects
        .iter()
        .flat_map(|p| p.tags.iter().cloned())
        .collect();
    tags.sort();
    tags.dedup();
    tags.insert(0, ALL_TAG.to_string());
    tags
}

/// A project passes when the tag matches (absent or `"All"` matches
/// everything) AND the query is a case-insensitive substring of the title or
/// of any tag. The empty query matches everything.
pub fn matches_filter(project: &Project, tag: Option<&str>, query: &str) -> bool {
    let tag_ok = match tag {
        None => true,
        Some(t) if t == ALL_TAG => true,
        Some(t) => project.tags.iter().any(|pt| pt == t),
    };
    if !tag_ok {
        return false;
    }

    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    project.title.to_lowercase().contains(&needle)
        || project
            .tags
            .iter()
            .any(|pt| pt.to_lowercase().contains(&needle))
}

/// Order-preserving filter of the collection.
pub fn filter_projects(projects: &[Project], tag: Option<&str>, query: &str) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| matches_filter(p, tag, query))
        .cloned()
        .collect()
}

fn shared_tag_count(a: &Project, b: &Project) -> usize {
    a.tags.iter().filter(|t| b.tags.contains(t)).count()
}

/// Projects related to `focal`: every other project sharing at least one tag,
/// ranked by shared-tag count descending. Ties keep the collection's
/// insertion order (stable sort), and at most [`RELATED_LIMIT`] survive.
pub fn related_projects(focal: &Project, projects: &[Project]) -> Vec<Project> {
    let mut ranked: Vec<(usize, &Project)> = projects
        .iter()
        .filter(|p| p.id != focal.id)
        .map(|p| (shared_tag_count(focal, p), p))
        .filter(|(shared, _)| *shared > 0)
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked
        .into_iter()
        .take(RELATED_LIMIT)
        .map(|(_, p)| p.clone())
        .collect()
}
