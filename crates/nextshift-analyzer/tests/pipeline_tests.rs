use std::sync::Arc;
use std::time::Duration;

use nextshift_analyzer::{
    AnalysisConfig, AnalysisEvent, AnalysisStats, FileSet, MemoryContent, Pipeline, RunStatus,
    SourceFile,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn project(names: &[&str]) -> FileSet {
    names
        .iter()
        .map(|name| SourceFile::in_memory(name, format!("// {name}")))
        .collect()
}

fn numbered(count: usize) -> FileSet {
    (0..count)
        .map(|i| SourceFile::in_memory(format!("lib/module{i}.ts"), "export {}"))
        .collect()
}

fn progress_of(events: &[AnalysisEvent]) -> Vec<u8> {
    events
        .iter()
        .filter_map(|event| match event {
            AnalysisEvent::Progress { percent, .. } => Some(*percent),
            _ => None,
        })
        .collect()
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(7)]
#[case(100)]
#[tokio::test]
async fn test_progress_per_file_then_complete(#[case] count: usize) {
    let pipeline = Pipeline::new(AnalysisConfig::without_delays());
    let (events, stats) = pipeline
        .start(numbered(count))
        .await
        .unwrap()
        .collect()
        .await
        .unwrap();

    let percents = progress_of(&events);
    assert_eq!(percents.len(), count);
    assert_eq!(percents[0], 0);
    assert!(percents.windows(2).all(|w| w[0] < w[1]));
    assert!(percents.iter().all(|p| *p < 100));

    assert_eq!(events.iter().filter(|e| e.is_complete()).count(), 1);
    assert_eq!(events.last(), Some(&AnalysisEvent::Complete(stats)));
    assert_eq!(stats, AnalysisStats::estimate(count));
}

#[tokio::test]
async fn test_progress_non_decreasing_for_large_worklist() {
    let pipeline = Pipeline::new(AnalysisConfig::without_delays());
    let (events, _) = pipeline
        .start(numbered(250))
        .await
        .unwrap()
        .collect()
        .await
        .unwrap();

    let percents = progress_of(&events);
    assert_eq!(percents.len(), 250);
    assert!(percents.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(percents.last(), Some(&99));
}

#[tokio::test]
async fn test_progress_names_current_file() {
    let pipeline = Pipeline::new(AnalysisConfig::without_delays());
    let (events, _) = pipeline
        .start(project(&["next.config.js", "package.json"]))
        .await
        .unwrap()
        .collect()
        .await
        .unwrap();

    assert_eq!(
        events,
        vec![
            AnalysisEvent::Progress {
                current_file: "next.config.js".to_string(),
                percent: 0,
            },
            AnalysisEvent::Progress {
                current_file: "package.json".to_string(),
                percent: 50,
            },
            AnalysisEvent::Complete(AnalysisStats::estimate(2)),
        ]
    );
}

#[tokio::test]
async fn test_single_preview_from_first_component() {
    let first = MemoryContent::new("export default function Home() {}");
    let second = MemoryContent::new("export default function About() {}");

    let files = FileSet::new(vec![
        SourceFile::in_memory("package.json", "{}"),
        SourceFile::new("pages/index.tsx", Arc::new(first.clone())),
        SourceFile::new("pages/about.tsx", Arc::new(second.clone())),
    ]);

    let pipeline = Pipeline::new(AnalysisConfig::without_delays());
    let (events, _) = pipeline.start(files).await.unwrap().collect().await.unwrap();

    let previews: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            AnalysisEvent::PreviewCaptured(preview) => Some(preview),
            _ => None,
        })
        .collect();

    assert_eq!(previews.len(), 1);
    assert_eq!(previews[0].name, "pages/index.tsx");
    assert_eq!(previews[0].content, "export default function Home() {}");
    assert_eq!(first.read_count(), 1);
    assert_eq!(second.read_count(), 0);

    let snapshot = pipeline.snapshot().await;
    assert_eq!(snapshot.preview.as_ref(), Some(previews[0]));
}

#[tokio::test]
async fn test_preview_follows_its_progress_event() {
    let pipeline = Pipeline::new(AnalysisConfig::without_delays());
    let (events, _) = pipeline
        .start(project(&["README.md", "components/Button.jsx", "lib/db.ts"]))
        .await
        .unwrap()
        .collect()
        .await
        .unwrap();

    let position = events
        .iter()
        .position(|e| matches!(e, AnalysisEvent::PreviewCaptured(_)))
        .unwrap();
    assert_eq!(
        events[position - 1],
        AnalysisEvent::Progress {
            current_file: "components/Button.jsx".to_string(),
            percent: 33,
        }
    );
}

#[tokio::test]
async fn test_marker_in_file_name_counts_as_component() {
    let pipeline = Pipeline::new(AnalysisConfig::without_delays());
    let (events, _) = pipeline
        .start(project(&["pages/data.json", "app/blog/page.js"]))
        .await
        .unwrap()
        .collect()
        .await
        .unwrap();

    let preview = events.iter().find_map(|event| match event {
        AnalysisEvent::PreviewCaptured(preview) => Some(preview.name.as_str()),
        _ => None,
    });
    assert_eq!(preview, Some("app/blog/page.js"));
}

#[tokio::test]
async fn test_unreadable_candidate_yields_no_preview() {
    let fallback = MemoryContent::new("export default function Card() {}");
    let files = FileSet::new(vec![
        SourceFile::in_memory("assets/icon.component.svg", vec![0xff, 0xfe, 0x00, 0x9f]),
        SourceFile::new("components/Card.tsx", Arc::new(fallback.clone())),
    ]);

    let pipeline = Pipeline::new(AnalysisConfig::without_delays());
    let (events, stats) = pipeline.start(files).await.unwrap().collect().await.unwrap();

    assert!(!events
        .iter()
        .any(|e| matches!(e, AnalysisEvent::PreviewCaptured(_))));
    assert_eq!(fallback.read_count(), 0);
    assert_eq!(stats.total_files, 2);
    assert_eq!(pipeline.snapshot().await.preview, None);
}

#[tokio::test]
async fn test_no_component_no_preview() {
    let pipeline = Pipeline::new(AnalysisConfig::without_delays());
    let (events, _) = pipeline
        .start(project(&["package.json", "lib/api.ts"]))
        .await
        .unwrap()
        .collect()
        .await
        .unwrap();

    assert_eq!(events.len(), 3);
    assert!(events[2].is_complete());
}

#[tokio::test]
async fn test_empty_start_keeps_previous_state() {
    let pipeline = Pipeline::new(AnalysisConfig::without_delays());
    pipeline
        .start(project(&["pages/index.tsx"]))
        .await
        .unwrap()
        .finish()
        .await
        .unwrap();
    let before = pipeline.snapshot().await;

    assert!(pipeline.start(FileSet::default()).await.is_none());
    assert_eq!(pipeline.snapshot().await, before);
}

#[tokio::test]
async fn test_start_while_running_is_ignored() {
    let config = AnalysisConfig {
        file_delay_ms: 20,
        finalize_delay_ms: 20,
        ..AnalysisConfig::default()
    };
    let pipeline = Pipeline::new(config);

    let mut first = pipeline.start(numbered(5)).await.unwrap();
    assert_eq!(first.run(), 1);

    let event = first.next_event().await.unwrap();
    assert!(matches!(event, AnalysisEvent::Progress { percent: 0, .. }));
    assert_eq!(pipeline.status().await, RunStatus::Running);

    assert!(pipeline.start(numbered(2)).await.is_none());
    assert!(pipeline.clone().start(numbered(2)).await.is_none());

    let (rest, stats) = first.collect().await.unwrap();
    assert_eq!(progress_of(&rest).len(), 4);
    assert_eq!(stats.total_files, 5);

    let snapshot = pipeline.snapshot().await;
    assert_eq!(snapshot.run, 1);
    assert_eq!(snapshot.stats.total_files, 5);
}

#[tokio::test]
async fn test_snapshot_while_running() {
    let config = AnalysisConfig {
        file_delay_ms: 50,
        finalize_delay_ms: 0,
        ..AnalysisConfig::default()
    };
    let pipeline = Pipeline::new(config);
    let mut run = pipeline.start(numbered(4)).await.unwrap();

    run.next_event().await.unwrap();
    run.next_event().await.unwrap();

    let snapshot = pipeline.snapshot().await;
    assert_eq!(snapshot.status, RunStatus::Running);
    assert_eq!(snapshot.stats, AnalysisStats::default());
    assert!(snapshot.progress < 100);

    run.finish().await.unwrap();
    assert_eq!(pipeline.status().await, RunStatus::Complete);
}

#[tokio::test]
async fn test_new_run_replaces_previous_results() {
    let pipeline = Pipeline::new(AnalysisConfig::without_delays());

    let first = pipeline
        .start(project(&["pages/index.tsx", "pages/about.tsx"]))
        .await
        .unwrap()
        .finish()
        .await
        .unwrap();
    assert_eq!(first.total_files, 2);
    assert!(pipeline.snapshot().await.preview.is_some());

    let second = pipeline
        .start(numbered(10))
        .await
        .unwrap()
        .finish()
        .await
        .unwrap();

    let snapshot = pipeline.snapshot().await;
    assert_eq!(snapshot.run, 2);
    assert_eq!(snapshot.stats, second);
    assert_eq!(snapshot.stats.total_files, 10);
    assert_eq!(snapshot.preview, None);
}

#[tokio::test]
async fn test_delays_are_honored() {
    let config = AnalysisConfig {
        file_delay_ms: 30,
        finalize_delay_ms: 30,
        ..AnalysisConfig::default()
    };
    let pipeline = Pipeline::new(config);

    let started = tokio::time::Instant::now();
    pipeline
        .start(numbered(3))
        .await
        .unwrap()
        .finish()
        .await
        .unwrap();

    // two gaps between three files plus the finalize pause
    assert!(started.elapsed() >= Duration::from_millis(90));
}

#[tokio::test]
async fn test_dropped_receiver_still_completes() {
    let pipeline = Pipeline::new(AnalysisConfig::without_delays());

    let mut run = pipeline.start(numbered(20)).await.unwrap();
    run.next_event().await.unwrap();
    drop(run);

    for _ in 0..50 {
        if pipeline.status().await == RunStatus::Complete {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let snapshot = pipeline.snapshot().await;
    assert_eq!(snapshot.status, RunStatus::Complete);
    assert_eq!(snapshot.stats.total_files, 20);
}

#[tokio::test]
async fn test_undrained_handle_does_not_stall_run() {
    let pipeline = Pipeline::new(AnalysisConfig::without_delays());

    // Held but never read while the run works through more than 100 events
    let run = pipeline.start(numbered(150)).await.unwrap();

    for _ in 0..100 {
        if pipeline.status().await == RunStatus::Complete {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let snapshot = pipeline.snapshot().await;
    assert_eq!(snapshot.status, RunStatus::Complete);
    assert_eq!(snapshot.progress, 100);
    assert_eq!(snapshot.stats.total_files, 150);

    let next = pipeline.start(numbered(1)).await.unwrap();
    assert_eq!(next.run(), 2);

    let (events, stats) = run.collect().await.unwrap();
    assert_eq!(progress_of(&events).len(), 150);
    assert_eq!(events.last(), Some(&AnalysisEvent::Complete(stats)));
}
