//! End-to-end session tests against the core library's public API.
//!
//! These walk through what a host does: explore both interactive modes, then
//! play quiz rounds and export the session.

use geocity_core::config::GeoConfig;
use geocity_core::explorer::{Explorer, Feedback};
use geocity_core::model::{Mode, Relationship, Theme};
use geocity_core::quiz::{QuizEngine, QuizPhase};
use geocity_core::report::SessionReport;
use geocity_core::source::ScriptedSource;
use geocity_core::{classify, evaluate};

#[test]
fn explorer_walkthrough() {
    let mut explorer = Explorer::new(Mode::Parallel).unwrap();
    assert_eq!(explorer.slider_range(), (-45.0, 45.0));

    // Learner drags toward zero, checking along the way
    for (angle, expected) in [(15.0, false), (5.0, false), (2.0, false), (1.0, true)] {
        explorer.set_angle(angle);
        assert_eq!(explorer.check().matched, expected, "at {angle}°");
    }
    assert_eq!(explorer.feedback(), Feedback::Success);

    explorer.switch_mode(Mode::Perpendicular).unwrap();
    assert_eq!(explorer.slider_range(), (0.0, 180.0));
    assert!(!explorer.check().matched);
    explorer.set_angle(89.0);
    assert!(explorer.check().matched);
}

#[test]
fn evaluator_scenarios() {
    assert!(evaluate(1.5, Relationship::Parallel).matched);
    assert!(!evaluate(2.0, Relationship::Parallel).matched);
    assert!(evaluate(89.0, Relationship::Perpendicular).matched);
    assert!(!evaluate(87.9, Relationship::Perpendicular).matched);
    assert_eq!(classify(-30.0), Relationship::Intersecting);
}

#[test]
fn scripted_quiz_session() {
    // parallel/road, intersecting/rail at -80+130=50°, perpendicular/road
    let source = ScriptedSource::new([0, 1, 2, 0, 130, 1, 1]);
    let mut engine = QuizEngine::new(GeoConfig::default(), source).unwrap();

    let first = *engine.round();
    assert_eq!(first.question_type, Relationship::Parallel);
    assert_eq!(first.theme, Theme::Road);
    assert_eq!(engine.submit_answer(Relationship::Parallel).is_correct, Some(true));

    let second = engine.generate_new_question();
    assert_eq!(second.question_type, Relationship::Intersecting);
    assert_eq!(second.display_angle, 50);
    assert_eq!(
        engine.submit_answer(Relationship::Perpendicular).is_correct,
        Some(false)
    );
    // duplicate press on the same round changes nothing
    engine.submit_answer(Relationship::Intersecting);
    assert_eq!(engine.phase(), QuizPhase::Answered);

    let third = engine.generate_new_question();
    assert_eq!(third.question_type, Relationship::Perpendicular);
    assert_eq!(third.display_angle, 90);
    engine.submit_answer(Relationship::Perpendicular);

    let score = engine.score();
    assert_eq!(score.score, 20);
    assert_eq!(score.total_possible, 30);

    let report = SessionReport::from_engine(&engine, None);
    assert_eq!(report.history.len(), 3);
    assert_eq!(report.stats.correct, 2);
    assert!((report.percentage() - 200.0 / 3.0).abs() < 1e-9);
    assert_eq!(report.stats.weakest(), Some(Relationship::Intersecting));
}
