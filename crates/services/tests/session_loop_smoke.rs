use lingua_core::model::{DifficultyTier, Progress, SectionId, SessionConfig};
use lingua_core::time::fixed_now;
use services::{AppServices, Clock, SessionPhase};

#[tokio::test]
async fn session_loop_persists_progress_and_unlocks() {
    let services =
        AppServices::in_memory(Clock::fixed(fixed_now()), SessionConfig::default(), "en_US")
            .unwrap();
    let loop_svc = services.session_loop();
    let progress = services.progress();

    let before = progress
        .sections_for_tier(DifficultyTier::Beginner)
        .await
        .unwrap();
    assert!(!before[0].is_locked());
    assert!(before[1].is_locked());

    let first = before[0].section.id().clone();
    let mut session = loop_svc.start_session(&first).unwrap();
    let total = before[0].section.words().len();

    let mut answered = 0;
    while session.current_word().is_some() {
        loop_svc.answer(&mut session, true).unwrap();
        answered += 1;
    }
    assert_eq!(answered, total);
    assert_eq!(loop_svc.snapshot(&session).phase, SessionPhase::Over);

    let summary = session.summary().unwrap();
    assert_eq!(summary.correct_words().len(), total);
    assert!((summary.accuracy() - 1.0).abs() < f64::EPSILON);

    loop_svc.flush().await;

    assert_eq!(
        progress.section_progress_of(&first).await.unwrap(),
        Progress::COMPLETE
    );
    let after = progress
        .sections_for_tier(DifficultyTier::Beginner)
        .await
        .unwrap();
    assert!(!after[1].is_locked());
    assert!(after[2].is_locked());
    assert!(
        progress
            .tier_progress(DifficultyTier::Beginner)
            .await
            .unwrap()
            .value()
            > 0.0
    );
}

#[tokio::test]
async fn undo_then_finish_restores_the_card() {
    let services =
        AppServices::in_memory(Clock::fixed(fixed_now()), SessionConfig::default(), "tr").unwrap();
    let loop_svc = services.session_loop();
    let id = SectionId::new("colors").unwrap();

    let mut session = loop_svc.start_session(&id).unwrap();
    let shown = session.current_word().cloned();
    loop_svc.answer(&mut session, false).unwrap();
    loop_svc.undo(&mut session).unwrap();

    let snap = loop_svc.snapshot(&session);
    assert_eq!(snap.current_word, shown);
    assert!(snap.is_animating_undo);
    assert_eq!(snap.total_attempts, 0);

    session.finish_undo_animation();
    assert!(!loop_svc.snapshot(&session).is_animating_undo);

    assert_eq!(
        services.preferences().language().await.unwrap(),
        lingua_core::model::Language::Tr
    );
}
