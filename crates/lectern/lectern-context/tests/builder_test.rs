//! ContextBuilder against the in-memory research notebook fixture.
//!
//! Token counts come from `WordCounter` over compact JSON:
//! source:1 short 9 / long 27, insight:1 8, insight:2 5,
//! source:2 short 5 / long 23, insight:3 6, source:3 short 5 / long 9,
//! note:1 short 2 / long 8, note:2 short 2 / long 15.

use lectern_context::{
    build_mixed_context, build_notebook_context, build_source_context, ContextBuilder,
    ContextParams,
};
use lectern_core::errors::{LecternError, StorageError};
use lectern_core::models::{ContentMap, ContextConfig, ContextDepth, ContextItem, ItemType};
use lectern_core::tracing_setup::init_tracing_with_filter;
use test_fixtures::{InMemoryStore, WordCounter};

fn store() -> InMemoryStore {
    init_tracing_with_filter("lectern_context=debug");
    InMemoryStore::load("golden/research_notebook.json")
}

fn ids(items: &[ContextItem]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

// ─── Empty and single-source builds ───

#[tokio::test]
async fn no_targets_returns_empty_well_formed_response() {
    let store = store();
    let response = ContextBuilder::new(&store, &WordCounter, ContextParams::default())
        .build()
        .await
        .unwrap();

    assert_eq!(response.total_items, 0);
    assert_eq!(response.total_tokens, 0);
    assert!(response.sources.is_empty() && response.notes.is_empty() && response.insights.is_empty());
    assert!(store.calls().is_empty(), "no store access without targets");

    let json = serde_json::to_value(&response).unwrap();
    for key in ["sources", "notes", "insights", "total_tokens", "total_items", "metadata"] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }
}

#[tokio::test]
async fn source_at_insights_depth_adds_source_and_insights() {
    let store = store();
    let params = ContextParams::default().with_source_id("source:1");
    let response = ContextBuilder::new(&store, &WordCounter, params)
        .build()
        .await
        .unwrap();

    assert_eq!(ids(&response.sources), vec!["source:1"]);
    assert_eq!(ids(&response.insights), vec!["insight:1", "insight:2"]);
    assert_eq!(response.total_items, 3);
    assert_eq!(response.total_tokens, 9 + 8 + 5);
    assert_eq!(response.source_id.as_deref(), Some("source:1"));
    assert!(store.calls().contains(&"source_context source:1 short".to_string()));

    let insight = &response.insights[0].content;
    assert_eq!(insight["source_id"], "source:1");
    assert_eq!(insight["insight_type"], "summary");
}

#[tokio::test]
async fn bare_source_id_is_normalized() {
    let store = store();
    let params = ContextParams::default().with_source_id("1");
    let response = ContextBuilder::new(&store, &WordCounter, params)
        .build()
        .await
        .unwrap();

    assert_eq!(ids(&response.sources), vec!["source:1"]);
    assert!(store.calls().contains(&"get_source source:1".to_string()));
}

#[tokio::test]
async fn disabled_insight_flag_keeps_only_source() {
    let store = store();
    let params = ContextParams::default()
        .with_source_id("source:1")
        .with_include_insights(false);
    let response = ContextBuilder::new(&store, &WordCounter, params)
        .build()
        .await
        .unwrap();

    assert_eq!(response.total_items, 1);
    assert!(response.insights.is_empty());
    assert!(!store.calls().iter().any(|c| c.starts_with("source_insights")));
}

#[tokio::test]
async fn full_content_never_adds_insights() {
    let store = store();
    let config = ContextConfig::new().with_source("source:1", ContextDepth::FullContent);
    let params = ContextParams::default()
        .with_source_id("source:1")
        .with_include_insights(true)
        .with_context_config(Some(config));
    let response = ContextBuilder::new(&store, &WordCounter, params)
        .build()
        .await
        .unwrap();

    assert_eq!(ids(&response.sources), vec!["source:1"]);
    assert!(response.insights.is_empty());
    assert_eq!(response.total_tokens, 27);
    assert!(store.calls().contains(&"source_context source:1 long".to_string()));
}

// ─── Notebooks ───

#[tokio::test]
async fn notebook_defaults_expand_sources_and_notes() {
    let store = store();
    let params = ContextParams::default().with_notebook_id("notebook:1");
    let response = ContextBuilder::new(&store, &WordCounter, params)
        .build()
        .await
        .unwrap();

    assert_eq!(ids(&response.sources), vec!["source:1", "source:2"]);
    assert_eq!(ids(&response.notes), vec!["note:1"]);
    assert_eq!(ids(&response.insights), vec!["insight:1", "insight:2", "insight:3"]);
    assert_eq!(response.total_items, 6);
    assert_eq!(response.total_tokens, 41);
    assert_eq!(response.notebook_id.as_deref(), Some("notebook:1"));
    assert_eq!(response.metadata.source_count, 2);
    assert_eq!(response.metadata.note_count, 1);
    assert_eq!(response.metadata.insight_count, 3);

    let calls = store.calls();
    assert!(calls.contains(&"note_context note:1 long".to_string()));
    // The missing transitive source was looked up, then skipped.
    assert!(calls.contains(&"get_source source:missing".to_string()));
}

#[tokio::test]
async fn notebook_config_selects_members_and_depths() {
    let store = store();
    let config = ContextConfig::new()
        .with_source("source:1", ContextDepth::NotIn)
        .with_source("2", ContextDepth::FullContent)
        .with_note("note:2", ContextDepth::Insights);
    let params = ContextParams::default()
        .with_notebook_id("notebook:1")
        .with_context_config(Some(config));
    let response = ContextBuilder::new(&store, &WordCounter, params)
        .build()
        .await
        .unwrap();

    assert_eq!(ids(&response.sources), vec!["source:2"]);
    assert_eq!(ids(&response.notes), vec!["note:2"]);
    assert!(response.insights.is_empty());
    assert_eq!(response.total_tokens, 23 + 2);
    assert!(!store.calls().iter().any(|c| c.contains("source:1")), "not in must skip the fetch");
}

#[tokio::test]
async fn notebook_without_notes_when_disabled() {
    let store = store();
    let params = ContextParams::default()
        .with_notebook_id("notebook:1")
        .with_include_notes(false);
    let response = ContextBuilder::new(&store, &WordCounter, params)
        .build()
        .await
        .unwrap();

    assert!(response.notes.is_empty());
    assert_eq!(response.sources.len(), 2);
    assert!(!store.calls().iter().any(|c| c.starts_with("notebook_notes")));
}

#[tokio::test]
async fn empty_notebook_yields_empty_context() {
    let store = store();
    let response = build_notebook_context(&store, &WordCounter, "notebook:empty", None, None)
        .await
        .unwrap();
    assert_eq!(response.total_items, 0);
    assert_eq!(response.notebook_id.as_deref(), Some("notebook:empty"));
}

#[tokio::test]
async fn missing_notebook_is_not_found() {
    let store = store();
    let params = ContextParams::default().with_notebook_id("notebook:404");
    let err = ContextBuilder::new(&store, &WordCounter, params)
        .build()
        .await
        .unwrap_err();

    match err {
        LecternError::NotFound { entity, id } => {
            assert_eq!(entity, "notebook");
            assert_eq!(id, "notebook:404");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

// ─── Required lookups and failures ───

#[tokio::test]
async fn missing_top_level_source_is_not_found() {
    let store = store();
    let params = ContextParams::default().with_source_id("source:404");
    let err = ContextBuilder::new(&store, &WordCounter, params)
        .build()
        .await
        .unwrap_err();
    assert!(err.is_not_found(), "got {err:?}");
}

#[tokio::test]
async fn missing_explicit_note_is_not_found() {
    let store = store();
    let err = build_mixed_context(
        &store,
        &WordCounter,
        vec!["source:1".into()],
        vec!["note:404".into()],
        None,
        None,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, LecternError::NotFound { entity: "note", .. }));
}

#[tokio::test]
async fn storage_failure_mid_fetch_is_wrapped() {
    let store = store().failing("source:2");
    let params = ContextParams::default().with_notebook_id("notebook:1");
    let err = ContextBuilder::new(&store, &WordCounter, params)
        .build()
        .await
        .unwrap_err();

    match err {
        LecternError::AssemblyFailed { source } => {
            assert!(matches!(
                *source,
                LecternError::StorageError(StorageError::Backend { .. })
            ));
        }
        other => panic!("expected AssemblyFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn listing_failure_is_wrapped() {
    let store = store().failing("notebook:1");
    let params = ContextParams::default().with_notebook_id("notebook:1");
    let err = ContextBuilder::new(&store, &WordCounter, params)
        .build()
        .await
        .unwrap_err();
    assert!(matches!(err, LecternError::AssemblyFailed { .. }));
}

// ─── Pipeline through build ───

#[tokio::test]
async fn overlapping_parents_are_deduplicated() {
    let store = store();
    let params = ContextParams::default()
        .with_source_id("source:1")
        .with_notebook_id("notebook:1");
    let response = ContextBuilder::new(&store, &WordCounter, params)
        .build()
        .await
        .unwrap();

    assert_eq!(ids(&response.sources), vec!["source:1", "source:2"]);
    assert_eq!(ids(&response.insights), vec!["insight:1", "insight:2", "insight:3"]);
    assert_eq!(response.total_items, 6);
}

#[tokio::test]
async fn budget_truncates_greedily_by_priority() {
    let store = store();
    // Prioritized: source:1 9, source:2 5, note:1 8, insight:1 8, insight:2 5, insight:3 6.
    let response = build_notebook_context(&store, &WordCounter, "notebook:1", None, Some(28))
        .await
        .unwrap();

    assert_eq!(ids(&response.sources), vec!["source:1", "source:2"]);
    assert_eq!(ids(&response.notes), vec!["note:1"]);
    assert_eq!(ids(&response.insights), vec!["insight:2"]);
    assert_eq!(response.total_tokens, 27);
    assert_eq!(response.metadata.config.max_tokens, Some(28));
}

#[tokio::test]
async fn budget_below_every_item_is_empty_not_error() {
    let store = store();
    let response = build_source_context(&store, &WordCounter, "source:1", true, Some(1))
        .await
        .unwrap();
    assert_eq!(response.total_items, 0);
    assert_eq!(response.total_tokens, 0);
}

#[tokio::test]
async fn explicit_ids_use_configured_depths() {
    let store = store();
    let config = ContextConfig::new()
        .with_source("source:3", ContextDepth::FullContent)
        .with_note("note:2", ContextDepth::NotIn);
    let params = ContextParams::default()
        .with_source_ids(vec!["3".into()])
        .with_note_ids(vec!["note:1".into(), "note:2".into()])
        .with_context_config(Some(config));
    let response = ContextBuilder::new(&store, &WordCounter, params)
        .build()
        .await
        .unwrap();

    assert_eq!(ids(&response.sources), vec!["source:3"]);
    assert_eq!(response.sources[0].token_count, 9);
    assert_eq!(ids(&response.notes), vec!["note:1"]);
}

// ─── Convenience entry points ───

#[tokio::test]
async fn convenience_builders_match_direct_construction() {
    let store = store();

    let direct = ContextBuilder::new(
        &store,
        &WordCounter,
        ContextParams::default().with_notebook_id("notebook:1"),
    )
    .build()
    .await
    .unwrap();
    let via_helper = build_notebook_context(&store, &WordCounter, "notebook:1", None, None)
        .await
        .unwrap();
    assert_eq!(direct, via_helper);

    let direct = ContextBuilder::new(
        &store,
        &WordCounter,
        ContextParams::default()
            .with_source_id("source:2")
            .with_include_insights(false),
    )
    .build()
    .await
    .unwrap();
    let via_helper = build_source_context(&store, &WordCounter, "source:2", false, None)
        .await
        .unwrap();
    assert_eq!(direct, via_helper);

    let direct = ContextBuilder::new(
        &store,
        &WordCounter,
        ContextParams::default()
            .with_source_ids(vec!["source:3".into()])
            .with_note_ids(vec!["note:2".into()])
            .with_notebook_id("notebook:1"),
    )
    .build()
    .await
    .unwrap();
    let via_helper = build_mixed_context(
        &store,
        &WordCounter,
        vec!["source:3".into()],
        vec!["note:2".into()],
        Some("notebook:1"),
        None,
    )
    .await
    .unwrap();
    assert_eq!(direct, via_helper);
    assert_eq!(via_helper.notebook_id.as_deref(), Some("notebook:1"));
}

// ─── Manual pipeline ───

#[test]
fn manual_pipeline_follows_worked_example() {
    let store = InMemoryStore::new();
    let mut builder = ContextBuilder::new(&store, &WordCounter, ContextParams::default());
    let item = |id: &str, item_type, priority, tokens| {
        ContextItem::with_token_count(id, item_type, ContentMap::new(), tokens).with_priority(priority)
    };
    builder.add_item(item("a", ItemType::Note, 10, 3));
    builder.add_item(item("a", ItemType::Note, 9, 1));
    builder.add_item(item("b", ItemType::Source, 20, 3));
    builder.add_item(item("c", ItemType::Insight, 5, 1));

    assert_eq!(builder.remove_duplicates(), 1);
    builder.prioritize();
    assert_eq!(ids(builder.items()), vec!["b", "a", "c"]);
    assert_eq!(builder.truncate_to_fit(4), 1);

    let response = builder.format_response();
    assert_eq!(response.total_tokens, 4);
    assert_eq!(response.total_items, 2);
    assert_eq!(ids(&response.sources), vec!["b"]);
    assert_eq!(ids(&response.insights), vec!["c"]);
    assert!(response.notes.is_empty());
}

#[test]
fn format_response_is_repeatable() {
    let store = InMemoryStore::new();
    let mut builder = ContextBuilder::new(&store, &WordCounter, ContextParams::default());
    builder.add_item(ContextItem::with_token_count("s", ItemType::Source, ContentMap::new(), 2));

    let first = builder.format_response();
    let second = builder.format_response();
    assert_eq!(first, second);
    assert_eq!(builder.len(), 1);
}
