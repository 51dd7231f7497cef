//! Shared structural predicates for the convention rules.

use avm_lint_syntax::Declaration;

/// Returns the literal value when `decl` is a decorator-free metadata
/// declaration named `name` with a non-blank literal string value.
pub(crate) fn metadata_value<'a>(decl: &'a Declaration, name: &str) -> Option<&'a str> {
    let metadata = decl.as_metadata()?;
    if metadata.has_decorators() || metadata.name != name {
        return None;
    }
    non_blank(metadata.literal_value()?)
}

/// Returns the literal value when `decl` is a decorator-free target-scope
/// declaration with a non-blank literal string value.
pub(crate) fn target_scope_value(decl: &Declaration) -> Option<&str> {
    let scope = decl.as_target_scope()?;
    if scope.has_decorators() {
        return None;
    }
    non_blank(scope.literal_value()?)
}

/// Last whitespace-delimited word of `text`.
pub(crate) fn last_word(text: &str) -> Option<&str> {
    text.split_whitespace().last()
}

fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avm_lint_syntax::{Decorator, MetadataDeclaration, OtherDeclaration};

    fn metadata(name: &str, value: Option<&str>, decorators: Vec<Decorator>) -> Declaration {
        Declaration::Metadata(MetadataDeclaration {
            name: name.to_string(),
            value: value.map(str::to_string),
            decorators,
        })
    }

    #[test]
    fn accepts_well_formed_metadata() {
        let decl = metadata("name", Some("Widgets"), Vec::new());
        assert_eq!(metadata_value(&decl, "name"), Some("Widgets"));
    }

    #[test]
    fn rejects_wrong_key_decorators_and_blank_values() {
        let wrong_key = metadata("title", Some("Widgets"), Vec::new());
        assert_eq!(metadata_value(&wrong_key, "name"), None);

        let decorated = metadata(
            "name",
            Some("Widgets"),
            vec![Decorator {
                name: "description".to_string(),
            }],
        );
        assert_eq!(metadata_value(&decorated, "name"), None);

        let blank = metadata("name", Some("   "), Vec::new());
        assert_eq!(metadata_value(&blank, "name"), None);

        let missing = metadata("name", None, Vec::new());
        assert_eq!(metadata_value(&missing, "name"), None);
    }

    #[test]
    fn rejects_non_metadata_declarations() {
        let other = Declaration::Other(OtherDeclaration {
            keyword: "param".to_string(),
        });
        assert_eq!(metadata_value(&other, "name"), None);
    }

    #[test]
    fn last_word_splits_on_whitespace() {
        assert_eq!(last_word("Elastic SANs"), Some("SANs"));
        assert_eq!(last_word("single"), Some("single"));
        assert_eq!(last_word("  "), None);
    }
}
