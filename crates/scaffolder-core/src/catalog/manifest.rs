//! Catalog manifest types and normalization into choices

use crate::error::CatalogError;
use crate::product::CatalogKind;
use serde::Deserialize;

/// Host every catalog `repo` path is resolved against
pub const REPOSITORY_HOST: &str = "https://github.com";

/// One entry of a catalog manifest (`templates.yml` / `starters.yml`)
///
/// Other keys present in the manifest (descriptions, previews) are ignored.
/// A missing `title` or `repo` fails the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    pub repo: String,
}

/// A selectable option: what the user sees, and the repository URL behind it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    /// `None` means "do not use a template"
    pub value: Option<String>,
}

impl Choice {
    /// The synthetic choice that declines every catalog entry
    pub fn none() -> Self {
        Self {
            label: "None".to_string(),
            value: None,
        }
    }
}

/// A row of a selection list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceItem {
    Choice(Choice),
    Separator,
}

impl ChoiceItem {
    pub fn as_choice(&self) -> Option<&Choice> {
        match self {
            ChoiceItem::Choice(choice) => Some(choice),
            ChoiceItem::Separator => None,
        }
    }
}

/// Parse a raw YAML manifest into its entries, keeping manifest order
pub fn parse_entries(raw: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    Ok(serde_yaml::from_str(raw)?)
}

impl CatalogEntry {
    /// Build the choice shown for this entry
    pub fn to_choice(&self, kind: &CatalogKind) -> Choice {
        Choice {
            label: strip_title_suffix(&self.title, kind.title_suffix),
            value: Some(format!("{}/{}", REPOSITORY_HOST, self.repo)),
        }
    }
}

/// Remove the catalog word from a title.
///
/// A trailing occurrence is removed when present; otherwise the first one.
/// Surrounding whitespace is kept, so "Blog Template" becomes "Blog ".
fn strip_title_suffix(title: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        return title.to_string();
    }
    match title.strip_suffix(suffix) {
        Some(stripped) => stripped.to_string(),
        None => title.replacen(suffix, "", 1),
    }
}

/// Turn a raw manifest into the selection list: "None", a separator, then
/// one choice per entry in manifest order
pub fn normalize(raw: &str, kind: &CatalogKind) -> Result<Vec<ChoiceItem>, CatalogError> {
    let entries = parse_entries(raw)?;

    let mut items = Vec::with_capacity(entries.len() + 2);
    items.push(ChoiceItem::Choice(Choice::none()));
    items.push(ChoiceItem::Separator);
    items.extend(
        entries
            .iter()
            .map(|entry| ChoiceItem::Choice(entry.to_choice(kind))),
    );

    tracing::debug!(entries = entries.len(), noun = kind.noun, "normalized catalog");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARTERS_YAML: &str = r#"
- title: Foo Starter
  repo: a/b
  description: first
- title: Bar Starter
  repo: c/d
"#;

    fn catalog_choices(items: &[ChoiceItem]) -> Vec<Choice> {
        items[2..]
            .iter()
            .filter_map(ChoiceItem::as_choice)
            .cloned()
            .collect()
    }

    #[test]
    fn test_normalize_preserves_manifest_order() {
        let items = normalize(STARTERS_YAML, &CatalogKind::STARTERS).unwrap();
        assert_eq!(
            catalog_choices(&items),
            vec![
                Choice {
                    label: "Foo ".to_string(),
                    value: Some("https://github.com/a/b".to_string()),
                },
                Choice {
                    label: "Bar ".to_string(),
                    value: Some("https://github.com/c/d".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_normalize_prepends_none_and_separator() {
        let items = normalize(STARTERS_YAML, &CatalogKind::STARTERS).unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0], ChoiceItem::Choice(Choice::none()));
        assert_eq!(items[1], ChoiceItem::Separator);
    }

    #[test]
    fn test_empty_manifest_still_offers_none() {
        let items = normalize("[]", &CatalogKind::TEMPLATES).unwrap();
        assert_eq!(items, vec![ChoiceItem::Choice(Choice::none()), ChoiceItem::Separator]);
    }

    #[test]
    fn test_template_suffix_only_stripped_for_template_kind() {
        let entry = CatalogEntry {
            title: "Blog Template".to_string(),
            repo: "strapi/strapi-template-blog".to_string(),
        };
        assert_eq!(entry.to_choice(&CatalogKind::TEMPLATES).label, "Blog ");
        assert_eq!(entry.to_choice(&CatalogKind::STARTERS).label, "Blog Template");
    }

    #[test]
    fn test_non_trailing_suffix_removes_first_occurrence() {
        assert_eq!(strip_title_suffix("Template for events", "Template"), " for events");
    }

    #[test]
    fn test_missing_repo_is_a_parse_failure() {
        let err = normalize("- title: Broken Template\n", &CatalogKind::TEMPLATES).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_non_list_manifest_is_a_parse_failure() {
        let err = normalize("title: not a list\n", &CatalogKind::TEMPLATES).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
