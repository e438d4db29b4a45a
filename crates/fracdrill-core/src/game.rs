//! Game drivers.
//!
//! A driver turns user actions (`on_start`, `on_answer_*`, `on_advance`,
//! `on_restart`) into session transitions and renderer calls. It owns the
//! session, the renderer and, for the benchmark quiz, the cue sink and the
//! auto-advance timer.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::Instant;

use crate::error::{BankError, SessionError};
use crate::model::{ProblemTemplate, QuizItem, QuizKind};
use crate::report::SessionSummary;
use crate::session::{Advance, Answer, ArithmeticSession, BenchmarkSession, Phase};
use crate::source::ProblemSource;
use crate::timer::AdvanceTimer;
use crate::traits::{Cue, CueSink, QuestionView, Renderer};

const CORRECT_MESSAGE: &str = "Correct!";

// ---------------------------------------------------------------------------
// Benchmark quiz
// ---------------------------------------------------------------------------

/// Drives the multiple-choice benchmark quiz.
pub struct BenchmarkGame<R: Renderer, C: CueSink> {
    session: BenchmarkSession,
    renderer: R,
    cues: C,
    timer: AdvanceTimer,
    started_at: Option<DateTime<Utc>>,
    summary: Option<SessionSummary>,
}

impl<R: Renderer, C: CueSink> BenchmarkGame<R, C> {
    pub fn new(
        items: Vec<QuizItem>,
        renderer: R,
        cues: C,
        advance_delay: Duration,
    ) -> Result<Self, BankError> {
        Ok(Self {
            session: BenchmarkSession::new(items)?,
            renderer,
            cues,
            timer: AdvanceTimer::new(advance_delay),
            started_at: None,
            summary: None,
        })
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn session(&self) -> &BenchmarkSession {
        &self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn cues(&self) -> &C {
        &self.cues
    }

    /// Summary of the last finished session, cleared on restart.
    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }

    pub fn advance_delay(&self) -> Duration {
        self.timer.delay()
    }

    /// When the pending auto-advance is due, if one is scheduled.
    pub fn pending_advance(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    pub fn on_start(&mut self) -> Result<(), SessionError> {
        self.session.start()?;
        self.started_at = Some(Utc::now());
        self.summary = None;
        tracing::info!(questions = self.session.total(), "benchmark quiz started");
        self.render_current();
        Ok(())
    }

    /// Select option `index` (0-3). Ignored while the previous answer's
    /// feedback is still showing.
    pub fn on_answer_selected(&mut self, index: usize) -> Result<Answer, SessionError> {
        let outcome = self.session.select(index)?;
        if let Answer::Scored { correct, expected } = &outcome {
            if let Err(e) = self.cues.play(Cue::for_answer(*correct)) {
                tracing::warn!(error = %e, "answer cue was not played");
            }
            let message = if *correct {
                CORRECT_MESSAGE.to_string()
            } else {
                format!("Incorrect. The answer is {expected}.")
            };
            self.renderer.render_feedback(*correct, &message);
            self.timer.schedule();
        }
        Ok(outcome)
    }

    /// Move past the answered question. Cancels any pending auto-advance.
    pub fn on_advance(&mut self) -> Result<Advance, SessionError> {
        self.timer.cancel();
        let step = self.session.advance()?;
        match step {
            Advance::Next { .. } => self.render_current(),
            Advance::Finished { score, total } => {
                let summary = SessionSummary::new(
                    QuizKind::Benchmark,
                    self.started_at.unwrap_or_else(Utc::now),
                    Utc::now(),
                    score,
                    total,
                    self.session.attempts().to_vec(),
                );
                tracing::info!(score, total, grade = ?summary.grade, "benchmark quiz finished");
                self.renderer
                    .render_final_score(score, total, &summary.message);
                self.summary = Some(summary);
            }
        }
        Ok(step)
    }

    /// Back to the start screen, dropping any pending auto-advance.
    pub fn on_restart(&mut self) {
        if self.timer.cancel() {
            tracing::debug!("pending advance cancelled by restart");
        }
        self.session.restart();
        self.started_at = None;
        self.summary = None;
    }

    fn render_current(&mut self) {
        if let Some(item) = self.session.current_item() {
            let view = QuestionView {
                kind: QuizKind::Benchmark,
                number: self.session.current_index() + 1,
                total: self.session.total(),
                prompt: item.text.clone(),
                options: item.options.to_vec(),
            };
            self.renderer.render_question(&view);
        }
    }
}

// ---------------------------------------------------------------------------
// Arithmetic quiz
// ---------------------------------------------------------------------------

/// Drives the free-text arithmetic quiz.
pub struct ArithmeticGame<R: Renderer, S: ProblemSource> {
    session: ArithmeticSession,
    renderer: R,
    source: S,
    started_at: Option<DateTime<Utc>>,
    summary: Option<SessionSummary>,
}

impl<R: Renderer, S: ProblemSource> ArithmeticGame<R, S> {
    pub fn new(bank: Vec<ProblemTemplate>, renderer: R, source: S) -> Result<Self, BankError> {
        Ok(Self {
            session: ArithmeticSession::new(bank)?,
            renderer,
            source,
            started_at: None,
            summary: None,
        })
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn session(&self) -> &ArithmeticSession {
        &self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }

    /// True while a problem is showing and has not been answered.
    pub fn awaiting_answer(&self) -> bool {
        self.session.phase() == Phase::InProgress && !self.session.has_answered()
    }

    pub fn on_start(&mut self) -> Result<(), SessionError> {
        self.session.start(&mut self.source)?;
        self.started_at = Some(Utc::now());
        self.summary = None;
        tracing::info!(rounds = self.session.total(), "arithmetic quiz started");
        self.render_current();
        Ok(())
    }

    pub fn on_answer_submitted(&mut self, text: &str) -> Result<Answer, SessionError> {
        let outcome = self.session.submit(text)?;
        if let Answer::Scored { correct, expected } = &outcome {
            let message = if *correct {
                CORRECT_MESSAGE.to_string()
            } else {
                format!("Not quite. The answer is {expected}.")
            };
            self.renderer.render_feedback(*correct, &message);
        }
        Ok(outcome)
    }

    pub fn on_advance(&mut self) -> Result<Advance, SessionError> {
        let step = self.session.advance(&mut self.source)?;
        match step {
            Advance::Next { .. } => self.render_current(),
            Advance::Finished { score, total } => {
                let summary = SessionSummary::new(
                    QuizKind::Arithmetic,
                    self.started_at.unwrap_or_else(Utc::now),
                    Utc::now(),
                    score,
                    total,
                    self.session.attempts().to_vec(),
                );
                tracing::info!(score, total, grade = ?summary.grade, "arithmetic quiz finished");
                self.renderer
                    .render_final_score(score, total, &summary.message);
                self.summary = Some(summary);
            }
        }
        Ok(step)
    }

    pub fn on_restart(&mut self) {
        self.session.restart();
        self.started_at = None;
        self.summary = None;
    }

    fn render_current(&mut self) {
        if let Some(problem) = self.session.current() {
            let view = QuestionView {
                kind: QuizKind::Arithmetic,
                number: self.session.question_number(),
                total: self.session.total(),
                prompt: problem.template.expression(),
                options: Vec::new(),
            };
            self.renderer.render_question(&view);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::{arithmetic_bank, benchmark_bank, QUESTION_CAP};
    use crate::grade::Grade;
    use crate::mock::{RecordingCues, RecordingRenderer, Rendered};
    use crate::source::ScriptedSource;

    fn benchmark_game(
        cues: RecordingCues,
        delay_ms: u64,
    ) -> BenchmarkGame<RecordingRenderer, RecordingCues> {
        BenchmarkGame::new(
            benchmark_bank(),
            RecordingRenderer::new(),
            cues,
            Duration::from_millis(delay_ms),
        )
        .unwrap()
    }

    #[test]
    fn start_renders_first_question() {
        let mut game = benchmark_game(RecordingCues::new(), 1500);
        game.on_start().unwrap();

        let questions = game.renderer().questions();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].number, 1);
        assert_eq!(questions[0].total, 10);
        assert_eq!(questions[0].options.len(), 4);
    }

    #[test]
    fn answer_plays_cue_and_schedules_advance() {
        let mut game = benchmark_game(RecordingCues::new(), 1500);
        game.on_start().unwrap();
        game.on_answer_selected(1).unwrap();

        assert_eq!(game.cues().played(), &[Cue::Correct]);
        assert!(game.pending_advance().is_some());
        assert_eq!(
            game.renderer().last(),
            Some(&Rendered::Feedback {
                correct: true,
                message: "Correct!".into()
            })
        );
    }

    #[test]
    fn answers_during_pending_advance_are_ignored() {
        let mut game = benchmark_game(RecordingCues::new(), 1500);
        game.on_start().unwrap();
        game.on_answer_selected(0).unwrap();
        let rendered = game.renderer().calls().len();

        assert_eq!(game.on_answer_selected(1).unwrap(), Answer::Ignored);
        assert_eq!(game.renderer().calls().len(), rendered);
        assert_eq!(game.cues().played().len(), 1);
        assert_eq!(game.session().score(), 0);
    }

    #[test]
    fn blocked_cues_do_not_affect_scoring() {
        let mut game = benchmark_game(RecordingCues::refusing(), 0);
        game.on_start().unwrap();
        while game.phase() == Phase::InProgress {
            let correct = game.session().current_item().unwrap().correct_index;
            game.on_answer_selected(correct).unwrap();
            game.on_advance().unwrap();
        }

        assert_eq!(game.session().score(), 10);
        assert_eq!(game.cues().played().len(), 10);
        assert_eq!(
            game.renderer().last(),
            Some(&Rendered::FinalScore {
                score: 10,
                total: 10,
                message: "Excellent! You've mastered benchmark fractions!".into()
            })
        );
        let summary = game.summary().unwrap();
        assert_eq!(summary.attempts.len(), 10);
    }

    #[test]
    fn restart_cancels_pending_advance() {
        let mut game = benchmark_game(RecordingCues::new(), 1500);
        game.on_start().unwrap();
        game.on_answer_selected(2).unwrap();
        assert!(game.pending_advance().is_some());

        game.on_restart();
        assert!(game.pending_advance().is_none());
        assert_eq!(game.phase(), Phase::NotStarted);

        game.on_start().unwrap();
        assert_eq!(game.session().score(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn timer_driven_advance_moves_to_next_question() {
        let mut game = benchmark_game(RecordingCues::new(), 1500);
        game.on_start().unwrap();
        game.on_answer_selected(1).unwrap();

        crate::timer::wait_for(game.pending_advance()).await;
        let step = game.on_advance().unwrap();

        assert_eq!(step, Advance::Next { number: 2 });
        assert!(game.pending_advance().is_none());
        assert_eq!(game.renderer().questions().len(), 2);
    }

    #[test]
    fn wrong_answer_names_the_right_option() {
        let mut game = benchmark_game(RecordingCues::new(), 0);
        game.on_start().unwrap();
        game.on_answer_selected(3).unwrap();
        assert_eq!(
            game.renderer().last(),
            Some(&Rendered::Feedback {
                correct: false,
                message: "Incorrect. The answer is 0.5 and 50%.".into()
            })
        );
    }

    #[test]
    fn arithmetic_game_runs_twenty_rounds() {
        let mut game = ArithmeticGame::new(
            arithmetic_bank(),
            RecordingRenderer::new(),
            ScriptedSource::new(vec![0, 1, 2, 3, 4, 5, 6, 7]),
        )
        .unwrap();
        game.on_start().unwrap();

        let mut rounds = 0;
        while game.phase() == Phase::InProgress {
            assert!(game.awaiting_answer());
            let answer = game.session().current().unwrap().answer.clone();
            game.on_answer_submitted(&answer).unwrap();
            assert!(!game.awaiting_answer());
            game.on_advance().unwrap();
            rounds += 1;
        }

        assert_eq!(rounds, QUESTION_CAP);
        assert_eq!(game.renderer().questions().len(), QUESTION_CAP);
        assert_eq!(
            game.renderer().last(),
            Some(&Rendered::FinalScore {
                score: 20,
                total: 20,
                message: Grade::Excellent.message(QuizKind::Arithmetic).into()
            })
        );
        assert_eq!(game.summary().unwrap().score, 20);
    }

    #[test]
    fn arithmetic_wrong_answer_reveals_canonical_form() {
        let mut game = ArithmeticGame::new(
            arithmetic_bank(),
            RecordingRenderer::new(),
            ScriptedSource::new(vec![1]),
        )
        .unwrap();
        game.on_start().unwrap();
        assert_eq!(game.renderer().questions()[0].prompt, "5/6 + 7/6");

        game.on_answer_submitted("12/6").unwrap();
        assert_eq!(
            game.renderer().last(),
            Some(&Rendered::Feedback {
                correct: false,
                message: "Not quite. The answer is 2.".into()
            })
        );
    }

    #[test]
    fn arithmetic_restart_clears_summary() {
        let mut game = ArithmeticGame::new(
            arithmetic_bank(),
            RecordingRenderer::new(),
            ScriptedSource::new(vec![2]),
        )
        .unwrap();
        game.on_start().unwrap();
        for _ in 0..QUESTION_CAP {
            game.on_answer_submitted("7/10").unwrap();
            game.on_advance().unwrap();
        }
        assert!(game.summary().is_some());
        assert_eq!(game.phase(), Phase::Finished);

        game.on_restart();
        assert!(game.summary().is_none());
        assert_eq!(game.phase(), Phase::NotStarted);
    }
}
