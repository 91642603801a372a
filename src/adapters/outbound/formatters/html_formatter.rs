use crate::application::read_models::ReportModel;
use crate::ports::outbound::ReportFormatter;
use crate::prebuilt_usage::domain::{FileUsage, Package, ReportSummary, Repo};
use crate::shared::Result;
use std::fmt::Write;

const STYLE: &str = r#"body { font-family: system-ui, sans-serif; margin: 2rem; color: #1f2328; }
h1 { margin-bottom: 0.25rem; }
.meta { color: #59636e; margin-top: 0; }
table { border-collapse: collapse; margin: 0.5rem 0 1rem; }
th, td { border: 1px solid #d1d9e0; padding: 0.3rem 0.6rem; text-align: left; vertical-align: top; }
th { background: #f6f8fa; }
details { margin: 0.25rem 0 0.25rem 1rem; }
summary { cursor: pointer; }
.version { color: #59636e; }
.direct { color: #1a7f37; }
.transitive { color: #9a6700; }
.missing { color: #59636e; font-style: italic; }
pre { margin: 0; white-space: pre-wrap; font-size: 0.85em; }"#;

/// HtmlFormatter adapter rendering a self-contained HTML page
///
/// One section per repo, one collapsible block per package and one table
/// row per usage.
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn new() -> Self {
        Self
    }

    fn escape(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                _ => out.push(c),
            }
        }
        out
    }

    /// Fragment identifier for the repo section at `index`. The index keeps
    /// ids unique when two names collapse to the same slug.
    fn anchor(index: usize, repo_name: &str) -> String {
        let slug: String = repo_name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect();
        format!("repo-{}-{}", index, slug)
    }

    /// Hosted links are used as-is; local paths become `file://` URLs.
    fn href(link: &str) -> String {
        if link.starts_with("http://") || link.starts_with("https://") {
            link.to_string()
        } else {
            format!("file://{}", link.replace('\\', "/"))
        }
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl HtmlFormatter {
    fn render_header(&self, output: &mut String, model: &ReportModel<'_>) -> std::fmt::Result {
        output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        output.push_str("<meta charset=\"utf-8\">\n<title>Prebuilt Usage Report</title>\n");
        writeln!(output, "<style>\n{}\n</style>", STYLE)?;
        output.push_str("</head>\n<body>\n<h1>Prebuilt Usage Report</h1>\n");
        writeln!(
            output,
            "<p class=\"meta\">Generated {} by {} {}{}</p>",
            Self::escape(model.metadata.generated_at()),
            Self::escape(model.metadata.tool_name()),
            Self::escape(model.metadata.tool_version()),
            if model.metadata.is_pipeline_run() {
                " (pipeline run)"
            } else {
                ""
            }
        )
    }

    fn render_summary(&self, output: &mut String, summary: &ReportSummary) -> std::fmt::Result {
        output.push_str("<h2>Summary</h2>\n<table class=\"summary\">\n");
        output.push_str("<tr><th>Repos</th><th>Packages</th><th>Usages</th><th>Direct</th><th>Transitive</th><th>Skipped records</th></tr>\n");
        writeln!(
            output,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            summary.repo_count,
            summary.package_count,
            summary.usage_count,
            summary.direct_count,
            summary.transitive_count,
            summary.skipped_record_count
        )?;
        output.push_str("</table>\n");
        Ok(())
    }

    fn render_index(&self, output: &mut String, repos: &[Repo]) -> std::fmt::Result {
        if repos.is_empty() {
            output.push_str("<p>No prebuilt usages were found.</p>\n");
            return Ok(());
        }

        output.push_str("<nav>\n<ul>\n");
        for (index, repo) in repos.iter().enumerate() {
            writeln!(
                output,
                "<li><a href=\"#{}\">{}</a> ({} package(s))</li>",
                Self::anchor(index, repo.name()),
                Self::escape(repo.name()),
                repo.packages().len()
            )?;
        }
        output.push_str("</ul>\n</nav>\n");
        Ok(())
    }

    fn render_repo(&self, output: &mut String, index: usize, repo: &Repo) -> std::fmt::Result {
        writeln!(
            output,
            "<section id=\"{}\">\n<h2>{}</h2>",
            Self::anchor(index, repo.name()),
            Self::escape(repo.name())
        )?;
        for package in repo.packages() {
            self.render_package(output, package)?;
        }
        output.push_str("</section>\n");
        Ok(())
    }

    fn render_package(&self, output: &mut String, package: &Package) -> std::fmt::Result {
        writeln!(
            output,
            "<details>\n<summary><strong>{}</strong> <span class=\"version\">{}</span> ({} usage(s))</summary>",
            Self::escape(package.name()),
            Self::escape(package.version()),
            package.files().len()
        )?;
        output.push_str("<table>\n<tr><th>Project</th><th>Dependency</th><th>Source</th><th>Why</th></tr>\n");
        for file in package.files() {
            self.render_file(output, file)?;
        }
        output.push_str("</table>\n</details>\n");
        Ok(())
    }

    fn render_file(&self, output: &mut String, file: &FileUsage) -> std::fmt::Result {
        let dependency_type = file.dependency_type();
        let source = if file.link().is_empty() {
            format!(
                "<span class=\"missing\" title=\"{}\">Project file not found</span>",
                Self::escape(file.file_path())
            )
        } else {
            format!(
                "<a href=\"{}\">{}</a>",
                Self::escape(&Self::href(file.link())),
                Self::escape(file.link())
            )
        };
        let provenance = if file.provenance().is_empty() {
            String::new()
        } else {
            format!("<pre>{}</pre>", Self::escape(file.provenance()))
        };

        writeln!(
            output,
            "<tr><td>{}</td><td class=\"{}\">{}</td><td>{}</td><td>{}</td></tr>",
            Self::escape(file.project()),
            dependency_type.as_str().to_ascii_lowercase(),
            dependency_type,
            source,
            provenance
        )
    }
}

impl ReportFormatter for HtmlFormatter {
    fn format(&self, model: &ReportModel<'_>) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model)?;
        self.render_summary(&mut output, &model.summary)?;
        self.render_index(&mut output, model.repos)?;
        for (index, repo) in model.repos.iter().enumerate() {
            self.render_repo(&mut output, index, repo)?;
        }
        output.push_str("</body>\n</html>\n");

        Ok(output)
    }
}
