use std::collections::HashSet;

/// Joins a field name onto a dotted path; the empty path is the top level.
pub fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", path, name)
    }
}

/// Include/exclude rules keyed by absolute dotted path from the record being
/// serialized.
///
/// A rule is written as a dotted path of field names, `-` prefixed to exclude
/// it. Rules are only ever added: a record's own defaults extend whatever its
/// parent passed down.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rules {
    excluded: HashSet<String>,
    included: HashSet<String>,
}

impl Rules {
    pub fn parse<S: AsRef<str>>(rules: &[S]) -> Rules {
        let mut parsed = Rules::default();
        parsed.extend("", rules);
        parsed
    }

    /// Adds `rules` as written from the point of view of a record expanded at
    /// `path`.
    pub fn extend<S: AsRef<str>>(&mut self, path: &str, rules: &[S]) {
        for rule in rules {
            let rule = rule.as_ref().trim();
            let (exclude, relative) = match rule.strip_prefix('-') {
                Some(relative) => (true, relative),
                None => (false, rule),
            };
            if relative.is_empty() {
                continue;
            }

            let absolute = join(path, relative);
            if exclude {
                self.excluded.insert(absolute);
            } else {
                self.included.insert(absolute);
            }
        }
    }

    pub fn excludes(&self, path: &str) -> bool {
        self.excluded.contains(path)
    }

    /// True when `path` or anything below it was asked for explicitly.
    pub fn includes(&self, path: &str) -> bool {
        let nested = format!("{}.", path);
        self.included
            .iter()
            .any(|included| included == path || included.starts_with(&nested))
    }
}

#[cfg(test)]
mod tests {
    use super::{join, Rules};

    #[test]
    fn test_join_top_level() {
        assert_eq!(join("", "reviews"), "reviews");
        assert_eq!(join("reviews", "user"), "reviews.user");
    }

    #[test]
    fn test_parse_splits_exclusions_and_inclusions() {
        let rules = Rules::parse(&["-reviews.game", "users"]);
        assert!(rules.excludes("reviews.game"));
        assert!(!rules.excludes("users"));
        assert!(rules.includes("users"));
        assert!(!rules.includes("reviews.game"));
    }

    #[test]
    fn test_extend_prefixes_with_path() {
        let mut rules = Rules::default();
        rules.extend("reviews", &["-game.reviews", "-user.reviews"]);
        assert!(rules.excludes("reviews.game.reviews"));
        assert!(rules.excludes("reviews.user.reviews"));
        assert!(!rules.excludes("game.reviews"));
    }

    #[test]
    fn test_includes_parent_of_nested_rule() {
        let rules = Rules::parse(&["users.name"]);
        assert!(rules.includes("users"));
        assert!(rules.includes("users.name"));
        assert!(!rules.includes("user"));
    }

    #[test]
    fn test_blank_rules_are_ignored() {
        let rules = Rules::parse(&["", "-", "  "]);
        assert_eq!(rules, Rules::default());
    }
}
