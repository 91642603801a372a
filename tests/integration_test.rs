/// Integration tests for the application layer
mod test_utilities;

use std::path::PathBuf;
use test_utilities::mocks::*;
use prebuilt_report::prelude::*;

fn usage(file: &str, id: &str, version: &str, is_direct: bool) -> UsageRecord {
    UsageRecord::new(Some(file), Some(id), Some(version), is_direct)
}

fn request(is_pipeline_run: bool) -> ReportRequest {
    ReportRequest::new(
        PathBuf::from("prebuilt-usage.xml"),
        PathBuf::from("/vmr"),
        is_pipeline_run,
    )
}

#[test]
fn test_generate_report_happy_path() {
    let reader = MockUsageReportReader::new(
        &["src/runtime/", "src/sdk/"],
        vec![
            usage(
                "src/sdk/artifacts/obj/Cli/project.assets.json",
                "Microsoft.Build",
                "17.8.3",
                true,
            ),
            usage(
                "src/runtime/artifacts/obj/Foo/project.assets.json",
                "System.Text.Json",
                "8.0.0",
                true,
            ),
            usage(
                "src/runtime/artifacts/obj/Bar/project.assets.json",
                "System.Text.Json",
                "8.0.0",
                false,
            ),
        ],
    );
    let locator = MockProjectLocator::new().with_project("Foo.csproj", "/vmr/src/runtime/src/Foo/Foo.csproj");
    let provenance = MockProvenanceProvider::new()
        .with_explanation("System.Text.Json", "Bar -> System.Text.Json (8.0.0)");
    let progress_reporter = MockProgressReporter::new();

    let use_case = GenerateReportUseCase::new(
        reader,
        locator.clone(),
        provenance.clone(),
        progress_reporter.clone(),
    );

    let response = use_case.execute(request(false)).unwrap();

    let names: Vec<&str> = response.repos.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["runtime", "sdk"]);

    let runtime = &response.repos[0];
    assert_eq!(runtime.packages().len(), 1);
    let files = runtime.packages()[0].files();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].project(), "Foo");
    assert_eq!(files[0].link(), "/vmr/src/runtime/src/Foo/Foo.csproj");
    assert_eq!(files[0].dependency_type(), DependencyType::Direct);
    assert_eq!(files[1].project(), "Bar");
    assert_eq!(files[1].link(), "");
    assert_eq!(files[1].provenance(), "Bar -> System.Text.Json (8.0.0)");

    assert_eq!(response.summary.repo_count, 2);
    assert_eq!(response.summary.package_count, 2);
    assert_eq!(response.summary.usage_count, 3);
    assert_eq!(response.summary.direct_count, 2);
    assert_eq!(response.summary.transitive_count, 1);

    // Only the transitive usage asks for provenance
    assert_eq!(provenance.call_count(), 1);

    // Every usage with a project directory is looked up under its repo root
    let queries = locator.get_queries();
    assert_eq!(queries.len(), 3);
    assert_eq!(queries[0].0, PathBuf::from("/vmr/src/sdk"));
    assert_eq!(queries[0].1, "Cli.csproj");

    assert!(progress_reporter.message_count() > 0);
    assert!(progress_reporter.errors().is_empty());
}

#[test]
fn test_generate_report_pipeline_links_use_source_template() {
    let reader = MockUsageReportReader::new(
        &["src/runtime/"],
        vec![usage(
            "src/runtime/artifacts/obj/Foo/project.assets.json",
            "System.Text.Json",
            "8.0.0",
            true,
        )],
    );
    let locator = MockProjectLocator::new().with_project("Foo.csproj", "/vmr/src/runtime/src/Foo/Foo.csproj");
    let use_case = GenerateReportUseCase::new(
        reader,
        locator,
        MockProvenanceProvider::new(),
        MockProgressReporter::new(),
    );

    let template = SourceLinkTemplate::new(
        "contoso".to_string(),
        "public".to_string(),
        "vmr".to_string(),
        "0123abcd".to_string(),
    );
    let response = use_case
        .execute(request(true).with_source_link(template))
        .unwrap();

    assert_eq!(
        response.repos[0].packages()[0].files()[0].link(),
        "https://dev.azure.com/contoso/public/_git/vmr?version=0123abcd&path=/src/runtime/src/Foo/Foo.csproj"
    );
    assert!(response.metadata.is_pipeline_run());
}

#[test]
fn test_generate_report_skips_malformed_and_reports_warning() {
    let reader = MockUsageReportReader::new(
        &["src/runtime/"],
        vec![
            UsageRecord::new(None, Some("PkgA"), Some("1.0"), true),
            UsageRecord::new(Some("src/runtime/a/Foo/x.json"), Some(""), Some("1.0"), true),
            usage("src/runtime/a/Foo/x.json", "PkgB", "2.0", true),
        ],
    );
    let progress_reporter = MockProgressReporter::new();
    let use_case = GenerateReportUseCase::new(
        reader,
        MockProjectLocator::new(),
        MockProvenanceProvider::new(),
        progress_reporter.clone(),
    );

    let response = use_case.execute(request(false)).unwrap();

    assert_eq!(response.summary.skipped_record_count, 2);
    assert_eq!(response.summary.package_count, 1);
    let errors = progress_reporter.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Skipped 2"));
}

#[test]
fn test_generate_report_sentinel_repos_follow_declared_roots() {
    let reader = MockUsageReportReader::new(
        &["src/runtime/"],
        vec![
            usage("/home/vsts/src/Tool/obj/project.assets.json", "PkgC", "1.0", true),
            usage("eng/common/tools/project.assets.json", "PkgB", "1.0", true),
            usage("src/runtime/a/Foo/x.json", "PkgA", "1.0", true),
        ],
    );
    let use_case = GenerateReportUseCase::new(
        reader,
        MockProjectLocator::new(),
        MockProvenanceProvider::new(),
        MockProgressReporter::new(),
    );

    let response = use_case.execute(request(false)).unwrap();

    let names: Vec<&str> = response.repos.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["runtime", "Unknown", "Current Repo"]);
}

#[test]
fn test_generate_report_undeclared_repo_fails() {
    let reader = MockUsageReportReader::new(
        &["src/runtime/"],
        vec![usage("src/roslyn/artifacts/obj/Compilers/x.json", "PkgA", "1.0", true)],
    );
    let progress_reporter = MockProgressReporter::new();
    let use_case = GenerateReportUseCase::new(
        reader,
        MockProjectLocator::new(),
        MockProvenanceProvider::new(),
        progress_reporter.clone(),
    );

    let err = use_case.execute(request(false)).unwrap_err();

    let report_error = err.downcast_ref::<ReportError>().unwrap();
    assert_eq!(report_error.exit_code(), ExitCode::GenerationFailed);
    assert!(report_error.to_string().contains("'roslyn'"));
    assert_eq!(progress_reporter.errors().len(), 1);
}

#[test]
fn test_generate_report_provenance_failure_leaves_empty_explanation() {
    let reader = MockUsageReportReader::new(
        &["src/runtime/"],
        vec![usage("src/runtime/a/Foo/x.json", "PkgA", "1.0", false)],
    );
    let provenance = MockProvenanceProvider::with_failure();
    let use_case = GenerateReportUseCase::new(
        reader,
        MockProjectLocator::new(),
        provenance.clone(),
        MockProgressReporter::new(),
    );

    let response = use_case.execute(request(false)).unwrap();

    assert_eq!(provenance.call_count(), 1);
    assert_eq!(response.repos[0].packages()[0].files()[0].provenance(), "");
}

#[test]
fn test_generate_report_reader_failure() {
    let use_case = GenerateReportUseCase::new(
        MockUsageReportReader::with_failure(),
        MockProjectLocator::new(),
        MockProvenanceProvider::new(),
        MockProgressReporter::new(),
    );

    let result = use_case.execute(request(false));

    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Mock usage report read failure"));
}

#[test]
fn test_generate_report_then_format_both_outputs() {
    let reader = MockUsageReportReader::new(
        &["src/runtime/"],
        vec![usage("src/runtime/a/Foo/x.json", "System.Memory", "4.5.5", false)],
    );
    let use_case = GenerateReportUseCase::new(
        reader,
        MockProjectLocator::new(),
        MockProvenanceProvider::new().with_explanation("System.Memory", "Foo -> System.Memory"),
        MockProgressReporter::new(),
    );

    let response = use_case.execute(request(false)).unwrap();
    let model = ReportModel::from_response(&response);

    let html = FormatterFactory::create(OutputFormat::Html)
        .format(&model)
        .unwrap();
    assert!(html.contains("System.Memory"));
    assert!(html.contains("<pre>Foo -&gt; System.Memory</pre>"));

    let json = FormatterFactory::create(OutputFormat::Json)
        .format(&model)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["repos"][0]["name"], "runtime");
    assert_eq!(value["repos"][0]["packages"][0]["files"][0]["dependencyType"], "Transitive");
    assert_eq!(
        value["repos"][0]["packages"][0]["files"][0]["provenance"],
        "Foo -> System.Memory"
    );
}
