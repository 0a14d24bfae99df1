use integration_tests::harness::{LogLine, T0, lines_to_content, write_source};
use logweave_core::ingest::{IngestError, IngestOptions, SourceInput, ingest_blocking};
use logweave_core::query::{LogFilter, Timeline, filter};
use pretty_assertions::assert_eq;

fn service_lines() -> Vec<LogLine> {
    (0..100)
        .map(|i| {
            let level = if i % 10 == 0 { "Error" } else { "Info" };
            LogLine::new(T0 + i * 1_200, level, "Service")
        })
        .collect()
}

fn agent_lines() -> Vec<LogLine> {
    (0..50)
        .map(|i| {
            let level = if i % 10 == 0 { "Error" } else { "Info" };
            LogLine::new(T0 + 600 + i * 2_400, level, "Agent")
        })
        .collect()
}

#[test]
fn three_sources_with_one_corrupt_merge_into_named_dataset() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let service = write_source(dir.path(), "service.log", &lines_to_content(&service_lines()));
    let corrupt = write_source(dir.path(), "corrupt.log", "not json at all\n{\"eventTimestamp\":");
    let agent = write_source(dir.path(), "agent.log", &lines_to_content(&agent_lines()));
    let sources = vec![
        SourceInput::file(service),
        SourceInput::file(corrupt),
        SourceInput::file(agent),
    ];

    // Act
    let dataset = ingest_blocking(sources, &IngestOptions::default()).unwrap();

    // Assert
    assert_eq!(dataset.len(), 150);
    assert_eq!(dataset.name(), "2 Log Files Merged");
    assert_eq!(dataset.sources(), ["service.log", "agent.log"]);
    assert_eq!(Timeline::build(&dataset).width(), 1_000);
}

#[test]
fn error_filter_keeps_only_errors_in_timestamp_order() {
    // Arrange
    let mut content = lines_to_content(&service_lines());
    content.push('\n');
    content.push_str(&lines_to_content(&agent_lines()));
    let dataset = ingest_blocking(
        vec![SourceInput::inline("combined.log", content)],
        &IngestOptions::default(),
    )
    .unwrap();
    let errors_only = LogFilter {
        level: "Error".to_string(),
        ..LogFilter::default()
    };

    // Act
    let matches = filter(dataset.entries(), &errors_only, None);

    // Assert
    assert_eq!(matches.len(), 15);
    assert!(matches.iter().all(|e| e.trace_level() == "Error"));
    assert!(
        matches
            .windows(2)
            .all(|w| w[0].timestamp_ms() <= w[1].timestamp_ms())
    );
}

#[test]
fn unreadable_source_does_not_block_the_others() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let service = write_source(dir.path(), "service.log", &lines_to_content(&service_lines()));
    let agent = write_source(dir.path(), "agent.log", &lines_to_content(&agent_lines()));
    let missing = dir.path().join("rotated-away.log");

    // Act
    let dataset = ingest_blocking(
        vec![
            SourceInput::file(service),
            SourceInput::file(missing),
            SourceInput::file(agent),
        ],
        &IngestOptions::default(),
    )
    .unwrap();

    // Assert
    assert_eq!(dataset.len(), 150);
    assert_eq!(dataset.name(), "2 Log Files Merged");
    assert!(!dataset.sources().contains(&"rotated-away.log".to_string()));
}

#[test]
fn single_contributing_source_names_the_dataset() {
    // Arrange
    let sources = vec![
        SourceInput::inline("service.log", lines_to_content(&service_lines())),
        SourceInput::inline("empty.log", ""),
    ];

    // Act
    let dataset = ingest_blocking(sources, &IngestOptions::default()).unwrap();

    // Assert
    assert_eq!(dataset.name(), "service.log");
}

#[test]
fn all_sources_invalid_reports_empty_dataset() {
    // Arrange
    let sources = vec![
        SourceInput::inline("a.log", "garbage\n"),
        SourceInput::inline("b.log", r#"{"component":"Service","traceLevel":"Info"}"#),
    ];

    // Act
    let result = ingest_blocking(sources, &IngestOptions::default());

    // Assert
    assert!(matches!(result, Err(IngestError::EmptyDataset)));
}

#[test]
fn no_sources_reports_empty_dataset() {
    let result = ingest_blocking(Vec::new(), &IngestOptions::default());

    assert!(matches!(result, Err(IngestError::EmptyDataset)));
}
