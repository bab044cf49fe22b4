use super::*;
use crate::error::FilterError;
use crate::host::mock::{HostCall, MockHost, MockPrompt, Report};
use crate::i18n::Language;

fn ids(raw: &[u64]) -> Vec<ElementId> {
    raw.iter().copied().map(ElementId::new).collect()
}

fn english() -> Messages {
    Messages::builtin(Language::English)
}

/// 全要素が可視・非アクティブのモデル
fn beam_model() -> MockHost {
    MockHost::new()
        .add_element(1, "BeamA", false, true)
        .add_element(2, "Post", false, true)
        .add_element(3, "beamB", false, true)
}

#[test]
fn test_end_to_end_matches_and_reactivates() {
    let messages = english();
    let mut host = beam_model();
    let mut prompt = MockPrompt::new().query("beam");

    let outcome = FilterSession::new(&mut host, &mut prompt, &messages)
        .run()
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::Done {
            source: SelectionSource::Visible,
            candidates: 3,
            matched: ids(&[1, 3]),
        }
    );
    assert_eq!(host.current_active(), ids(&[1, 3]));
    assert_eq!(
        host.calls,
        vec![
            HostCall::SuspendRefresh,
            HostCall::SetInactive(ids(&[1, 2, 3])),
            HostCall::SetActive(ids(&[1, 3])),
            HostCall::ResumeRefresh,
        ]
    );
    assert_eq!(prompt.reports, vec![Report::Info("2 Elements found".to_string())]);
    // 可視 = 全体なので対象確認はしない
    assert_eq!(prompt.questions, vec!["Enter search term".to_string()]);
}

#[test]
fn test_no_elements_reports_error_and_mutates_nothing() {
    let messages = english();
    let mut host = MockHost::new().add_element(1, "Hidden", false, false);
    let mut prompt = MockPrompt::new();

    let outcome = FilterSession::new(&mut host, &mut prompt, &messages)
        .run()
        .unwrap();

    assert_eq!(outcome, Outcome::NoElements);
    assert!(host.calls.is_empty());
    assert_eq!(
        prompt.reports,
        vec![Report::Error("No elements are active/visible!".to_string())]
    );
}

#[test]
fn test_active_subset_asks_and_filters_active_only() {
    let messages = english();
    let mut host = MockHost::new()
        .add_element(1, "BeamA", true, true)
        .add_element(2, "Post", false, true)
        .add_element(3, "beamB", false, true);
    let mut prompt = MockPrompt::new().answer(true).query("beam");

    let outcome = FilterSession::new(&mut host, &mut prompt, &messages)
        .run()
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::Done {
            source: SelectionSource::Active,
            candidates: 1,
            matched: ids(&[1]),
        }
    );
    assert_eq!(
        prompt.questions[0],
        "Should only active elements be considered?"
    );
}

#[test]
fn test_active_subset_declined_filters_visible() {
    let messages = english();
    let mut host = MockHost::new()
        .add_element(1, "BeamA", true, true)
        .add_element(2, "Post", false, true)
        .add_element(3, "beamB", false, true);
    let mut prompt = MockPrompt::new().answer(false).query("post");

    let outcome = FilterSession::new(&mut host, &mut prompt, &messages)
        .run()
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::Done {
            source: SelectionSource::Visible,
            candidates: 3,
            matched: ids(&[2]),
        }
    );
    assert_eq!(host.current_active(), ids(&[2]));
}

#[test]
fn test_zero_matches_reports_not_found() {
    let messages = english();
    let mut host = beam_model();
    let mut prompt = MockPrompt::new().query("rafter");

    let outcome = FilterSession::new(&mut host, &mut prompt, &messages)
        .run()
        .unwrap();

    assert!(matches!(outcome, Outcome::Done { ref matched, .. } if matched.is_empty()));
    assert!(host.current_active().is_empty());
    assert_eq!(prompt.reports, vec![Report::Info("Names not found".to_string())]);
}

#[test]
fn test_cancel_restores_previously_active_candidates() {
    let messages = english();
    let mut host = MockHost::new()
        .add_element(1, "BeamA", true, true)
        .add_element(2, "Post", true, true)
        .add_element(3, "beamB", false, true);
    let mut prompt = MockPrompt::new().answer(false).query("");

    let outcome = FilterSession::new(&mut host, &mut prompt, &messages)
        .run()
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::Cancelled {
            restored: ids(&[1, 2])
        }
    );
    assert_eq!(host.current_active(), ids(&[1, 2]));
    assert_eq!(host.calls.last(), Some(&HostCall::ResumeRefresh));
    assert!(prompt.reports.is_empty());
}

#[test]
fn test_cancel_without_restore_leaves_elements_inactive() {
    let messages = english();
    let mut host = MockHost::new()
        .add_element(1, "BeamA", true, true)
        .add_element(2, "Post", false, true);
    let mut prompt = MockPrompt::new().answer(true).query("");
    let options = SessionOptions {
        restore_on_cancel: false,
        ..SessionOptions::default()
    };

    let outcome = FilterSession::new(&mut host, &mut prompt, &messages)
        .with_options(options)
        .run()
        .unwrap();

    assert_eq!(outcome, Outcome::Cancelled { restored: vec![] });
    assert!(host.current_active().is_empty());
    assert_eq!(
        host.calls,
        vec![
            HostCall::SuspendRefresh,
            HostCall::SetInactive(ids(&[1])),
            HostCall::ResumeRefresh,
        ]
    );
}

#[test]
fn test_keep_policy_with_trailing_delimiter_matches_everything() {
    let messages = english();
    let mut host = beam_model();
    let mut prompt = MockPrompt::new().query("beam;");
    let options = SessionOptions {
        empty_terms: EmptyTermPolicy::Keep,
        ..SessionOptions::default()
    };

    let outcome = FilterSession::new(&mut host, &mut prompt, &messages)
        .with_options(options)
        .run()
        .unwrap();

    assert!(matches!(outcome, Outcome::Done { ref matched, .. } if *matched == ids(&[1, 2, 3])));
}

#[test]
fn test_invalid_pattern_leaves_active_elements_untouched() {
    let messages = english();
    let mut host = MockHost::new()
        .add_element(1, "BeamA", true, true)
        .add_element(2, "Post", true, true);
    let mut prompt = MockPrompt::new().query("beam");
    let options = SessionOptions {
        pattern: "(".to_string(),
        ..SessionOptions::default()
    };

    let err = FilterSession::new(&mut host, &mut prompt, &messages)
        .with_options(options)
        .run()
        .unwrap_err();

    assert!(matches!(err, FilterError::InvalidPattern(_)));
    assert_eq!(host.current_active(), ids(&[1, 2]));
    assert!(host.calls.is_empty());
    assert!(prompt.questions.is_empty());
}

#[test]
fn test_empty_pattern_leaves_active_elements_untouched() {
    let messages = english();
    let mut host = MockHost::new()
        .add_element(1, "BeamA", true, true)
        .add_element(2, "Post", false, true);
    let mut prompt = MockPrompt::new().answer(true).query("beam");
    let options = SessionOptions {
        pattern: String::new(),
        ..SessionOptions::default()
    };

    let err = FilterSession::new(&mut host, &mut prompt, &messages)
        .with_options(options)
        .run()
        .unwrap_err();

    assert!(matches!(err, FilterError::InvalidArgument(_)));
    assert_eq!(host.current_active(), ids(&[1]));
    assert!(host.calls.is_empty());
}

#[test]
fn test_prompt_failure_still_resumes_refresh() {
    let messages = english();
    let mut host = beam_model();
    // 検索テキストの回答がないので ask_string が失敗する
    let mut prompt = MockPrompt::new();

    let err = FilterSession::new(&mut host, &mut prompt, &messages)
        .run()
        .unwrap_err();

    assert!(matches!(err, FilterError::Prompt(_)));
    assert_eq!(
        host.calls,
        vec![
            HostCall::SuspendRefresh,
            HostCall::SetInactive(ids(&[1, 2, 3])),
            HostCall::ResumeRefresh,
        ]
    );
}

#[test]
fn test_localized_messages_are_used() {
    let messages = Messages::builtin(Language::German);
    let mut host = beam_model();
    let mut prompt = MockPrompt::new().query("post");

    FilterSession::new(&mut host, &mut prompt, &messages)
        .run()
        .unwrap();

    assert_eq!(prompt.questions, vec!["Suchbegriff eingeben".to_string()]);
    assert_eq!(
        prompt.reports,
        vec![Report::Info("1 Elemente gefunden".to_string())]
    );
}
