/// Repo name for usages whose path gives no hint of an owning repo
pub const UNKNOWN_REPO: &str = "Unknown";

/// Repo name for usages under `src/` when the report was produced for a
/// single product repository instead of the aggregated super-repository
pub const CURRENT_REPO: &str = "Current Repo";

const SOURCE_PREFIX: &str = "src/";

/// RepoClassifier maps a usage path to the name of the repo that owns it.
///
/// Rules, evaluated in order:
/// 1. absent path → `Unknown`
/// 2. `src/<segment>...` at the start of the path → `<segment>`
/// 3. no `src/` anywhere → `Unknown`
/// 4. otherwise → `Current Repo`
///
/// Total over every input, including the empty string.
pub struct RepoClassifier;

impl RepoClassifier {
    pub fn classify(file_path: Option<&str>) -> &str {
        let Some(path) = file_path else {
            return UNKNOWN_REPO;
        };

        if let Some(segment) = Self::leading_repo_segment(path) {
            return segment;
        }

        if path.contains(SOURCE_PREFIX) {
            CURRENT_REPO
        } else {
            UNKNOWN_REPO
        }
    }

    /// Returns `<segment>` for paths starting with `src/<segment>`, where the
    /// segment is the non-empty run of characters up to the next `/`.
    fn leading_repo_segment(path: &str) -> Option<&str> {
        let rest = path.strip_prefix(SOURCE_PREFIX)?;
        let segment = rest.split('/').next().unwrap_or_default();
        (!segment.is_empty()).then_some(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_path_is_unknown() {
        assert_eq!(RepoClassifier::classify(None), UNKNOWN_REPO);
    }

    #[test]
    fn test_empty_path_is_unknown() {
        assert_eq!(RepoClassifier::classify(Some("")), UNKNOWN_REPO);
    }

    #[test]
    fn test_anchored_src_segment() {
        assert_eq!(
            RepoClassifier::classify(Some("src/runtime/src/libraries/Foo/obj/project.assets.json")),
            "runtime"
        );
        assert_eq!(RepoClassifier::classify(Some("src/Foo/a/b.csproj")), "Foo");
    }

    #[test]
    fn test_segment_without_trailing_separator() {
        assert_eq!(RepoClassifier::classify(Some("src/aspnetcore")), "aspnetcore");
        assert_eq!(RepoClassifier::classify(Some("src/aspnetcore/")), "aspnetcore");
    }

    #[test]
    fn test_no_src_is_unknown() {
        assert_eq!(
            RepoClassifier::classify(Some("artifacts/obj/Foo/project.assets.json")),
            UNKNOWN_REPO
        );
        assert_eq!(RepoClassifier::classify(Some("source/Foo/x.csproj")), UNKNOWN_REPO);
    }

    #[test]
    fn test_unanchored_src_is_current_repo() {
        assert_eq!(
            RepoClassifier::classify(Some("/home/build/repo/src/Foo/Foo.csproj")),
            CURRENT_REPO
        );
        assert_eq!(RepoClassifier::classify(Some("eng/src/x")), CURRENT_REPO);
    }

    #[test]
    fn test_empty_segment_is_current_repo() {
        assert_eq!(RepoClassifier::classify(Some("src//Foo.csproj")), CURRENT_REPO);
        assert_eq!(RepoClassifier::classify(Some("src/")), CURRENT_REPO);
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        assert_eq!(RepoClassifier::classify(Some("SRC/Foo/x.csproj")), UNKNOWN_REPO);
    }
}
