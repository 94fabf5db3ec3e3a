use amis_quiz::data::read_unit_embedded;
use amis_quiz::model::UnitId;
use amis_quiz::session::{AnswerOutcome, QUESTIONS_PER_ROUND, QuizSession};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A full round against the real Unit 33 catalog: since the pool holds
/// exactly 5 items, the draw is a permutation of the whole pool, and
/// answering everything correctly ends at 100 points.
#[test]
fn unit33_round_uses_the_whole_pool_and_scores_100() {
    let unit = read_unit_embedded(UnitId::Unit33);
    let mut rng = StdRng::seed_from_u64(33);
    let mut session = QuizSession::new(&unit.quiz_pool, &mut rng);

    let mut seen: Vec<String> = Vec::new();
    while let Some(question) = session.current_question() {
        seen.push(question.item.prompt.clone());
        let answer = question.item.answer.clone();

        // a wrong answer first: hint comes back, nothing moves
        let before = session.current_index();
        match session.submit_answer("絕對不是這個").unwrap() {
            AnswerOutcome::Incorrect { hint } => assert!(!hint.is_empty()),
            AnswerOutcome::Correct => panic!("nonsense answer graded as correct"),
        }
        assert_eq!(session.current_index(), before);

        assert_eq!(session.submit_answer(&answer), Some(AnswerOutcome::Correct));
    }

    assert!(session.is_complete());
    assert_eq!(session.score(), 100);
    assert_eq!(seen.len(), QUESTIONS_PER_ROUND);

    let mut expected: Vec<String> = unit.quiz_pool.iter().map(|q| q.prompt.clone()).collect();
    seen.sort();
    expected.sort();
    assert_eq!(seen, expected);
}

#[test]
fn restart_produces_a_fresh_round_for_both_units() {
    for id in [UnitId::Unit33, UnitId::Unit34] {
        let unit = read_unit_embedded(id);
        let mut rng = StdRng::seed_from_u64(id.number() as u64);
        let mut session = QuizSession::new(&unit.quiz_pool, &mut rng);

        while let Some(question) = session.current_question() {
            let answer = question.item.answer.clone();
            session.submit_answer(&answer);
        }
        assert_eq!(session.score(), 100);

        let old_id = session.session_id().to_string();
        session.restart(&unit.quiz_pool, &mut rng);
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_index(), 0);
        assert!(!session.is_complete());
        assert_ne!(session.session_id(), old_id);
        assert!(session.matches_pool(&unit.quiz_pool));
    }
}
