#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::{
        catalog::models::{Catalog, GameRecord},
        quiz::{
            error::QuizError,
            models::{DecoyStrategy, FinalScore},
            session::QuizSession,
        },
    };

    const ROUNDS: usize = 5;
    const DECOYS: usize = 3;

    fn record(title: &str, genre: &str) -> GameRecord {
        GameRecord {
            title: title.to_string(),
            genre: genre.to_string(),
            description: format!("Cryptic hint for {}", title),
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::from_records(vec![
            record("Doom", "shooter"),
            record("Halo", "shooter"),
            record("Pong", "arcade"),
            record("Tetris", "puzzle"),
            record("Myst", "puzzle"),
            record("Asteroids", "arcade"),
        ])
        .unwrap()
    }

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    /// Descriptions are unique per game in the fixture, so the round's
    /// description identifies the correct answer.
    fn correct_title(catalog: &Catalog, description: &str) -> String {
        catalog
            .games()
            .iter()
            .find(|g| g.description == description)
            .map(|g| g.title.clone())
            .expect("Round description should come from the catalog")
    }

    fn play_through(session: &mut QuizSession, catalog: &Catalog, rng: &mut impl Rng) {
        session.start(catalog, ROUNDS, rng).unwrap();

        for _ in 0..ROUNDS {
            let view = session
                .current_round(catalog, DECOYS, DecoyStrategy::Uniform, rng)
                .unwrap();
            let correct = correct_title(catalog, &view.description);

            session
                .submit_answer(&correct, catalog, DECOYS, DecoyStrategy::Uniform, rng)
                .unwrap();
            session.advance().unwrap();
        }
    }

    #[test]
    fn full_quiz_with_correct_answers() {
        let catalog = sample_catalog();
        let mut rng = rng(7);
        let mut session = QuizSession::new();

        let summary = session.start(&catalog, ROUNDS, &mut rng).unwrap();
        assert_eq!(summary.total_rounds, ROUNDS);

        for i in 0..ROUNDS {
            let view = session
                .current_round(&catalog, DECOYS, DecoyStrategy::Uniform, &mut rng)
                .unwrap();

            assert_eq!(view.index, i);
            assert_eq!(view.total_rounds, ROUNDS);
            assert_eq!(view.options.len(), DECOYS + 1);

            let correct = correct_title(&catalog, &view.description);
            assert!(view.options.contains(&correct));

            let result = session
                .submit_answer(&correct, &catalog, DECOYS, DecoyStrategy::Uniform, &mut rng)
                .unwrap();

            assert!(result.correct);
            assert_eq!(result.correct_title, correct);
            assert_eq!(result.score_so_far, i + 1);

            let outcome = session.advance().unwrap();
            assert_eq!(outcome.finished, i + 1 == ROUNDS);
        }

        let score = session.final_score().unwrap();
        assert_eq!(score.score, ROUNDS);
        assert_eq!(score.total_rounds, ROUNDS);
    }

    #[test]
    fn wrong_answer_reveals_correct_title() {
        let catalog = sample_catalog();
        let mut rng = rng(11);
        let mut session = QuizSession::new();

        session.start(&catalog, ROUNDS, &mut rng).unwrap();
        let view = session
            .current_round(&catalog, DECOYS, DecoyStrategy::Uniform, &mut rng)
            .unwrap();

        let correct = correct_title(&catalog, &view.description);
        let decoy = view
            .options
            .iter()
            .find(|title| **title != correct)
            .unwrap();

        let result = session
            .submit_answer(decoy, &catalog, DECOYS, DecoyStrategy::Uniform, &mut rng)
            .unwrap();

        assert!(!result.correct);
        assert_eq!(result.correct_title, correct);
        assert_eq!(result.score_so_far, 0);
    }

    #[test]
    fn second_submit_is_rejected() {
        let catalog = sample_catalog();
        let mut rng = rng(13);
        let mut session = QuizSession::new();

        session.start(&catalog, ROUNDS, &mut rng).unwrap();
        let view = session
            .current_round(&catalog, DECOYS, DecoyStrategy::Uniform, &mut rng)
            .unwrap();
        let correct = correct_title(&catalog, &view.description);

        let result = session
            .submit_answer(&correct, &catalog, DECOYS, DecoyStrategy::Uniform, &mut rng)
            .unwrap();
        assert_eq!(result.score_so_far, 1);

        let second = session.submit_answer(&correct, &catalog, DECOYS, DecoyStrategy::Uniform, &mut rng);
        assert!(matches!(second, Err(QuizError::AlreadyAnswered)));

        // Score was incremented exactly once
        session.advance().unwrap();
        let view = session
            .current_round(&catalog, DECOYS, DecoyStrategy::Uniform, &mut rng)
            .unwrap();
        assert_eq!(view.index, 1);
    }

    #[test]
    fn unknown_selection_leaves_round_open() {
        let catalog = sample_catalog();
        let mut rng = rng(17);
        let mut session = QuizSession::new();

        session.start(&catalog, ROUNDS, &mut rng).unwrap();
        let view = session
            .current_round(&catalog, DECOYS, DecoyStrategy::Uniform, &mut rng)
            .unwrap();

        let result = session.submit_answer(
            "Definitely Not A Game",
            &catalog,
            DECOYS,
            DecoyStrategy::Uniform,
            &mut rng,
        );
        assert!(matches!(result, Err(QuizError::UnknownSelection(_))));

        // The round is still answerable with a valid option
        let correct = correct_title(&catalog, &view.description);
        let result = session
            .submit_answer(&correct, &catalog, DECOYS, DecoyStrategy::Uniform, &mut rng)
            .unwrap();

        assert!(result.correct);
        assert_eq!(result.score_so_far, 1);
    }

    #[test]
    fn start_fails_on_undersized_catalog() {
        let catalog = Catalog::from_records(vec![
            record("Doom", "shooter"),
            record("Pong", "arcade"),
            record("Tetris", "puzzle"),
            record("Myst", "puzzle"),
        ])
        .unwrap();
        let mut rng = rng(1);
        let mut session = QuizSession::new();

        let result = session.start(&catalog, ROUNDS, &mut rng);
        assert!(matches!(result, Err(QuizError::InsufficientCatalog { .. })));
    }

    #[test]
    fn transitions_outside_valid_state_fail() {
        let catalog = sample_catalog();
        let mut rng = rng(1);
        let mut session = QuizSession::new();

        assert!(matches!(
            session.current_round(&catalog, DECOYS, DecoyStrategy::Uniform, &mut rng),
            Err(QuizError::InvalidState(_))
        ));
        assert!(matches!(
            session.submit_answer("Doom", &catalog, DECOYS, DecoyStrategy::Uniform, &mut rng),
            Err(QuizError::InvalidState(_))
        ));
        assert!(matches!(session.advance(), Err(QuizError::InvalidState(_))));
        assert!(matches!(
            session.final_score(),
            Err(QuizError::InvalidState(_))
        ));

        session.start(&catalog, ROUNDS, &mut rng).unwrap();

        // No restart mid-quiz, no advancing an unanswered round
        assert!(matches!(
            session.start(&catalog, ROUNDS, &mut rng),
            Err(QuizError::InvalidState(_))
        ));
        assert!(matches!(session.advance(), Err(QuizError::InvalidState(_))));
        assert!(matches!(
            session.final_score(),
            Err(QuizError::InvalidState(_))
        ));
    }

    #[test]
    fn round_is_cached_until_advance() {
        let catalog = sample_catalog();
        let mut rng = rng(23);
        let mut session = QuizSession::new();

        session.start(&catalog, ROUNDS, &mut rng).unwrap();

        let first = session
            .current_round(&catalog, DECOYS, DecoyStrategy::Uniform, &mut rng)
            .unwrap();
        let second = session
            .current_round(&catalog, DECOYS, DecoyStrategy::Uniform, &mut rng)
            .unwrap();

        assert_eq!(first.description, second.description);
        assert_eq!(first.options, second.options);
    }

    #[test]
    fn restart_after_finish_resets_score() {
        let catalog = sample_catalog();
        let mut rng = rng(29);
        let mut session = QuizSession::new();

        play_through(&mut session, &catalog, &mut rng);
        assert_eq!(session.final_score().unwrap().score, ROUNDS);

        session.start(&catalog, ROUNDS, &mut rng).unwrap();
        let view = session
            .current_round(&catalog, DECOYS, DecoyStrategy::Uniform, &mut rng)
            .unwrap();

        assert_eq!(view.index, 0);
        assert!(matches!(
            session.final_score(),
            Err(QuizError::InvalidState(_))
        ));
    }

    #[test]
    fn reset_returns_to_idle() {
        let catalog = sample_catalog();
        let mut rng = rng(31);
        let mut session = QuizSession::new();

        session.start(&catalog, ROUNDS, &mut rng).unwrap();
        session.reset();

        assert!(matches!(
            session.current_round(&catalog, DECOYS, DecoyStrategy::Uniform, &mut rng),
            Err(QuizError::InvalidState(_))
        ));

        session.start(&catalog, ROUNDS, &mut rng).unwrap();
    }

    #[test]
    fn result_messages_scale_with_score() {
        assert_eq!(FinalScore::from_score(5, 5).emoji, "🏆");
        assert_eq!(FinalScore::from_score(4, 5).emoji, "🌟");
        assert_eq!(FinalScore::from_score(3, 5).emoji, "👾");
        assert_eq!(FinalScore::from_score(2, 5).emoji, "🕹️");
        assert_eq!(FinalScore::from_score(0, 5).emoji, "📺");
    }
}
