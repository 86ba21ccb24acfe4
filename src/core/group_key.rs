//! Affiliation keys used to partition a timeline into groups.
//!
//! The first non-empty affiliation wins: custom organization name, then the
//! linked organization (id, else display name), then the repository owner for
//! open-source records. A record with none of these is its own group.

use crate::domain::model::{ExperienceKind, ExperienceRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Affiliation<'a> {
    CustomName(&'a str),
    Organization { id: Option<&'a str>, name: Option<&'a str> },
    RepositoryOwner(&'a str),
    Standalone,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn repository_owner(record: &ExperienceRecord) -> Option<&str> {
    match record.kind {
        ExperienceKind::OpenSource => non_empty(record.repository_owner.as_deref()).or_else(|| {
            non_empty(record.repository.as_deref())
                .and_then(|full_name| full_name.split_once('/'))
                .and_then(|(owner, _)| non_empty(Some(owner)))
        }),
        ExperienceKind::Work
        | ExperienceKind::Education
        | ExperienceKind::Project
        | ExperienceKind::Certification
        | ExperienceKind::Volunteering => None,
    }
}

fn affiliation(record: &ExperienceRecord) -> Affiliation<'_> {
    if let Some(name) = non_empty(record.custom_organization_name.as_deref()) {
        return Affiliation::CustomName(name);
    }

    let id = non_empty(record.organization_id.as_deref());
    let name = non_empty(record.organization_name.as_deref());
    if id.is_some() || name.is_some() {
        return Affiliation::Organization { id, name };
    }

    match repository_owner(record) {
        Some(owner) => Affiliation::RepositoryOwner(owner),
        None => Affiliation::Standalone,
    }
}

/// Grouping key for `record`. Names compare case-insensitively; an
/// organization name without an id shares the namespace of custom names.
pub fn resolve(record: &ExperienceRecord) -> String {
    match affiliation(record) {
        Affiliation::CustomName(name) | Affiliation::Organization { id: None, name: Some(name) } => {
            format!("name:{}", name.to_lowercase())
        }
        Affiliation::Organization { id: Some(id), .. } => format!("org:{}", id),
        Affiliation::Organization { id: None, name: None } => format!("record:{}", record.id),
        Affiliation::RepositoryOwner(owner) => format!("owner:{}", owner.to_lowercase()),
        Affiliation::Standalone => format!("record:{}", record.id),
    }
}

/// Display label for the group `record` belongs to.
pub fn label(record: &ExperienceRecord) -> String {
    match affiliation(record) {
        Affiliation::CustomName(name) => name.to_string(),
        Affiliation::Organization { id, name } => {
            name.or(id).unwrap_or(record.title.as_str()).to_string()
        }
        Affiliation::RepositoryOwner(owner) => owner.to_string(),
        Affiliation::Standalone => non_empty(Some(record.title.as_str()))
            .unwrap_or(&record.id)
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work(id: &str) -> ExperienceRecord {
        ExperienceRecord::new(id, ExperienceKind::Work, "Engineer")
    }

    #[test]
    fn test_custom_name_wins_over_organization() {
        let record = work("r1")
            .with_custom_organization("Side Gig LLC")
            .with_organization(Some("org-1"), Some("Acme"));

        assert_eq!(resolve(&record), "name:side gig llc");
        assert_eq!(label(&record), "Side Gig LLC");
    }

    #[test]
    fn test_organization_id_keys_and_name_labels() {
        let record = work("r1").with_organization(Some("org-1"), Some("Acme"));
        assert_eq!(resolve(&record), "org:org-1");
        assert_eq!(label(&record), "Acme");

        let id_only = work("r2").with_organization(Some("org-1"), None);
        assert_eq!(resolve(&id_only), "org:org-1");
        assert_eq!(label(&id_only), "org-1");
    }

    #[test]
    fn test_organization_name_without_id_matches_custom_name() {
        let linked = work("r1").with_organization(None, Some("Acme"));
        let custom = work("r2").with_custom_organization("  ACME ");
        assert_eq!(resolve(&linked), resolve(&custom));
    }

    #[test]
    fn test_blank_affiliations_are_ignored() {
        let record = work("r1")
            .with_custom_organization("   ")
            .with_organization(Some(""), Some("Acme"));
        assert_eq!(resolve(&record), "name:acme");
    }

    #[test]
    fn test_repository_owner_only_for_open_source() {
        let contribution = ExperienceRecord::new("r1", ExperienceKind::OpenSource, "Maintainer")
            .with_repository(Some("Tokio-RS"), None);
        assert_eq!(resolve(&contribution), "owner:tokio-rs");
        assert_eq!(label(&contribution), "Tokio-RS");

        let project = ExperienceRecord::new("r2", ExperienceKind::Project, "Side project")
            .with_repository(Some("tokio-rs"), None);
        assert_eq!(resolve(&project), "record:r2");
        assert_eq!(label(&project), "Side project");
    }

    #[test]
    fn test_repository_owner_derived_from_full_name() {
        let record = ExperienceRecord::new("r1", ExperienceKind::OpenSource, "Contributor")
            .with_repository(None, Some("rust-lang/cargo"));
        assert_eq!(resolve(&record), "owner:rust-lang");

        let malformed = ExperienceRecord::new("r2", ExperienceKind::OpenSource, "Contributor")
            .with_repository(None, Some("cargo"));
        assert_eq!(resolve(&malformed), "record:r2");
    }

    #[test]
    fn test_unaffiliated_records_are_singletons() {
        let a = ExperienceRecord::new("a", ExperienceKind::Education, "BSc");
        let b = ExperienceRecord::new("b", ExperienceKind::Education, "BSc");
        assert_ne!(resolve(&a), resolve(&b));
        assert_eq!(label(&a), "BSc");
    }
}
