// src/quiz.rs
//
// Motor de una sesión de quiz: preguntas en orden fijo, una respuesta por
// hueco, y al acabar se avisa una sola vez al almacén del perfil.

use crate::error::QuizError;
use crate::model::Quiz;

/// Quien recibe el aviso de "quiz completado"
pub trait CompletionRecorder {
    fn record_quiz_completed(&mut self, quiz_id: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    InProgress {
        current: usize,
        answers: Vec<Option<usize>>,
    },
    Completed {
        answers: Vec<Option<usize>>,
    },
}

/// Resultado de `advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Next(usize),
    Completed,
}

/// Fila de la revisión final
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerReview {
    pub question: String,
    pub selected: Option<usize>,
    pub correct: bool,
    pub correct_option: String,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: Quiz,
    state: SessionState,
}

impl QuizSession {
    /// El catálogo garantiza al menos una pregunta por quiz
    pub fn new(quiz: Quiz) -> Self {
        let answers = vec![None; quiz.questions.len()];
        Self {
            quiz,
            state: SessionState::InProgress { current: 0, answers },
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, SessionState::Completed { .. })
    }

    pub fn total_questions(&self) -> usize {
        self.quiz.questions.len()
    }

    /// Índice de la pregunta actual; `None` una vez completado
    pub fn current_index(&self) -> Option<usize> {
        match &self.state {
            SessionState::InProgress { current, .. } => Some(*current),
            SessionState::Completed { .. } => None,
        }
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index()
            .is_some_and(|i| i + 1 == self.total_questions())
    }

    pub fn answers(&self) -> &[Option<usize>] {
        match &self.state {
            SessionState::InProgress { answers, .. } | SessionState::Completed { answers } => {
                answers
            }
        }
    }

    pub fn current_answer(&self) -> Option<usize> {
        let i = self.current_index()?;
        self.answers().get(i).copied().flatten()
    }

    pub fn select_answer(&mut self, option: usize) -> Result<(), QuizError> {
        let SessionState::InProgress { current, answers } = &mut self.state else {
            return Err(QuizError::AlreadyCompleted);
        };
        let options = self
            .quiz
            .questions
            .get(*current)
            .map_or(0, |q| q.options.len());
        if option >= options {
            return Err(QuizError::OptionOutOfRange {
                index: option,
                options,
            });
        }
        answers[*current] = Some(option);
        Ok(())
    }

    /// Avanza a la siguiente pregunta, o completa el quiz si era la última.
    /// Con la respuesta actual sin marcar no cambia nada.
    pub fn advance(&mut self, recorder: &mut dyn CompletionRecorder) -> Result<Advance, QuizError> {
        let SessionState::InProgress { current, answers } = &mut self.state else {
            return Err(QuizError::AlreadyCompleted);
        };
        if answers.get(*current).copied().flatten().is_none() {
            return Err(QuizError::Unanswered);
        }

        if *current + 1 < self.quiz.questions.len() {
            *current += 1;
            return Ok(Advance::Next(*current));
        }

        let answers = std::mem::take(answers);
        self.state = SessionState::Completed { answers };
        recorder.record_quiz_completed(&self.quiz.id);
        log::info!(
            "Quiz {} completado: {}/{}",
            self.quiz.id,
            self.score(),
            self.total_questions()
        );
        Ok(Advance::Completed)
    }

    /// Aciertos; los huecos sin responder cuentan como fallo
    pub fn score(&self) -> usize {
        self.quiz
            .questions
            .iter()
            .zip(self.answers())
            .filter(|(q, a)| **a == Some(q.correct_answer))
            .count()
    }

    pub fn percentage(&self) -> u32 {
        let total = self.total_questions().max(1);
        (100.0 * self.score() as f64 / total as f64).round() as u32
    }

    /// Progreso de la barra mientras se responde ("Question i of n")
    pub fn position_percentage(&self) -> u32 {
        let total = self.total_questions().max(1);
        let shown = self.current_index().map_or(total, |i| i + 1);
        (100.0 * shown as f64 / total as f64).round() as u32
    }

    pub fn feedback(&self) -> &'static str {
        match self.percentage() {
            p if p >= 80 => "Amazing work! 🌟",
            p if p >= 60 => "Great job! 🎉",
            _ => "Good try! Keep learning! 💪",
        }
    }

    pub fn results(&self) -> Vec<AnswerReview> {
        self.quiz
            .questions
            .iter()
            .zip(self.answers())
            .map(|(q, a)| AnswerReview {
                question: q.prompt.clone(),
                selected: *a,
                correct: *a == Some(q.correct_answer),
                correct_option: q.correct_option().unwrap_or_default().to_owned(),
            })
            .collect()
    }
}
