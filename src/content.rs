use std::{borrow::Cow, collections::HashSet, sync::LazyLock};

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

pub static PROFILE: LazyLock<Profile> = LazyLock::new(|| or_log(load_profile()));
pub static TIMELINE: LazyLock<Vec<TimelineEntry>> = LazyLock::new(|| or_log(load_timeline()));
pub static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| or_log(load_projects()));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(&'static str),
    #[error("couldn't parse {file}: {source}")]
    Malformed {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid content in {file}: {reason}")]
    Invalid { file: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Education,
    Work,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub id: String,
    pub kind: EntryKind,
    pub title: String,
    pub institution: String,
    pub period: String,
    pub description: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Github,
    Linkedin,
    Email,
    Instagram,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: SocialIcon,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub short_name: String,
    pub role: String,
    pub tagline: String,
    pub avatar: String,
    pub about: Vec<String>,
    pub skills: Vec<String>,
    pub location: String,
    pub response_time: String,
    pub contact_blurb: String,
    pub credit: String,
    pub social: Vec<SocialLink>,
}

fn or_log<T: Default>(res: Result<T, ContentError>) -> T {
    res.unwrap_or_else(|e| {
        log::error!("{e}");
        T::default()
    })
}

fn asset(file: &'static str) -> Result<Cow<'static, [u8]>, ContentError> {
    Assets::get(file)
        .map(|asset| asset.data)
        .ok_or(ContentError::Missing(file))
}

fn load<T: DeserializeOwned>(file: &'static str) -> Result<T, ContentError> {
    serde_json::from_slice(&asset(file)?).map_err(|source| ContentError::Malformed { file, source })
}

fn require(file: &'static str, id: &str, field: &str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::Invalid {
            file,
            reason: format!("{id}: {field} is empty"),
        });
    }
    Ok(())
}

fn unique_ids<'a>(
    file: &'static str,
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        require(file, "<entry>", "id", id)?;
        if !seen.insert(id) {
            return Err(ContentError::Invalid {
                file,
                reason: format!("duplicate id {id:?}"),
            });
        }
    }
    Ok(())
}

pub fn parse_timeline(file: &'static str, data: &[u8]) -> Result<Vec<TimelineEntry>, ContentError> {
    let entries: Vec<TimelineEntry> =
        serde_json::from_slice(data).map_err(|source| ContentError::Malformed { file, source })?;
    unique_ids(file, entries.iter().map(|e| e.id.as_str()))?;
    for e in &entries {
        require(file, &e.id, "title", &e.title)?;
        require(file, &e.id, "institution", &e.institution)?;
        require(file, &e.id, "period", &e.period)?;
        require(file, &e.id, "description", &e.description)?;
        require(file, &e.id, "location", &e.location)?;
    }
    Ok(entries)
}

pub fn parse_projects(file: &'static str, data: &[u8]) -> Result<Vec<Project>, ContentError> {
    let projects: Vec<Project> =
        serde_json::from_slice(data).map_err(|source| ContentError::Malformed { file, source })?;
    unique_ids(file, projects.iter().map(|p| p.id.as_str()))?;
    for p in &projects {
        require(file, &p.id, "title", &p.title)?;
        require(file, &p.id, "description", &p.description)?;
        require(file, &p.id, "image", &p.image)?;
        if p.technologies.is_empty() {
            return Err(ContentError::Invalid {
                file,
                reason: format!("{}: no technologies listed", p.id),
            });
        }
        for tech in &p.technologies {
            require(file, &p.id, "technology", tech)?;
        }
    }
    Ok(projects)
}

pub fn load_timeline() -> Result<Vec<TimelineEntry>, ContentError> {
    let file = "timeline.json";
    parse_timeline(file, &asset(file)?)
}

pub fn load_projects() -> Result<Vec<Project>, ContentError> {
    let file = "projects.json";
    parse_projects(file, &asset(file)?)
}

pub fn load_profile() -> Result<Profile, ContentError> {
    let file = "profile.json";
    let profile: Profile = load(file)?;
    require(file, "profile", "name", &profile.name)?;
    require(file, "profile", "short_name", &profile.short_name)?;
    require(file, "profile", "role", &profile.role)?;
    unique_ids(file, profile.social.iter().map(|s| s.name.as_str()))?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_asset_is_reported_by_name() {
        let err = asset("resume.json").unwrap_err();
        assert!(matches!(err, ContentError::Missing("resume.json")));
        assert!(load::<Profile>("resume.json").is_err());
    }

    #[test]
    fn embedded_timeline_is_complete() {
        let entries = load_timeline().expect("timeline should load");
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].kind, EntryKind::Work);
        assert!(entries.iter().any(|e| e.kind == EntryKind::Education));
        for e in &entries {
            assert!(!e.period.is_empty(), "{} has no period", e.id);
        }
    }

    #[test]
    fn embedded_projects_are_complete() {
        let projects = load_projects().expect("projects should load");
        assert_eq!(projects.len(), 6);
        for p in &projects {
            assert!(!p.technologies.is_empty(), "{} has no technologies", p.id);
            assert!(p.image.starts_with("https://"), "{} image", p.id);
        }
        assert_eq!(
            projects[0].technologies,
            vec!["React", "Next.js", "TypeScript", "Stripe", "Tailwind CSS"]
        );
    }

    #[test]
    fn embedded_profile_loads() {
        let profile = load_profile().expect("profile should load");
        assert_eq!(profile.skills.len(), 8);
        assert_eq!(profile.social.len(), 4);
        assert_eq!(profile.social[2].icon, SocialIcon::Email);
        assert!(profile.social[2].url.starts_with("mailto:"));
    }

    #[test]
    fn statics_match_loaders() {
        assert_eq!(TIMELINE.len(), 4);
        assert_eq!(PROJECTS.len(), 6);
        assert!(!PROFILE.name.is_empty());
    }

    #[test]
    fn optional_links_default_to_none() {
        let data = br#"[{
            "id": "x",
            "title": "X",
            "description": "d",
            "image": "https://example.com/x.png",
            "technologies": ["Rust"]
        }]"#;
        let projects = parse_projects("test.json", data).unwrap();
        assert_eq!(projects[0].live_url, None);
        assert_eq!(projects[0].source_url, None);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let data = br#"[
            {"id": "1", "kind": "work", "title": "a", "institution": "b",
             "period": "c", "description": "d", "location": "e"},
            {"id": "1", "kind": "education", "title": "a", "institution": "b",
             "period": "c", "description": "d", "location": "e"}
        ]"#;
        let err = parse_timeline("test.json", data).unwrap_err();
        assert!(matches!(err, ContentError::Invalid { .. }));
        assert_eq!(err.to_string(), "invalid content in test.json: duplicate id \"1\"");
    }

    #[test]
    fn empty_field_rejected() {
        let data = br#"[
            {"id": "1", "kind": "work", "title": "a", "institution": " ",
             "period": "c", "description": "d", "location": "e"}
        ]"#;
        let err = parse_timeline("test.json", data).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid content in test.json: 1: institution is empty"
        );
    }

    #[test]
    fn unknown_kind_is_malformed() {
        let data = br#"[
            {"id": "1", "kind": "hobby", "title": "a", "institution": "b",
             "period": "c", "description": "d", "location": "e"}
        ]"#;
        assert!(matches!(
            parse_timeline("test.json", data),
            Err(ContentError::Malformed { .. })
        ));
    }
}
