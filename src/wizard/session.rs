use crate::criteria::{AnswerSet, Criterion};
use crate::scoring::{self, Assessment};

/// The two modes of a wizard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Collecting,
    ShowingResult,
}

/// Discrete events the display layer sends into the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    ToggleAnswer(String),
    ChangeFunderName(String),
    Next,
    Previous,
    StartOver,
}

/// One in-memory assessment session: the current step, the answers collected
/// so far, the funder name, and the assessment once the last step is passed.
///
/// The criterion set must be non-empty; the CLI validates it before a
/// session is constructed.
#[derive(Debug, Clone)]
pub struct Session {
    criteria: Vec<Criterion>,
    step: usize,
    answers: AnswerSet,
    funder_name: String,
    result: Option<Assessment>,
    mode: Mode,
}

impl Session {
    pub fn new(criteria: Vec<Criterion>) -> Self {
        let answers = AnswerSet::new(&criteria);
        Self {
            criteria,
            step: 0,
            answers,
            funder_name: String::new(),
            result: None,
            mode: Mode::Collecting,
        }
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn step_count(&self) -> usize {
        self.criteria.len()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn funder_name(&self) -> &str {
        &self.funder_name
    }

    pub fn result(&self) -> Option<&Assessment> {
        self.result.as_ref()
    }

    pub fn current_criterion(&self) -> &Criterion {
        &self.criteria[self.step]
    }

    pub fn answer(&self, id: &str) -> bool {
        self.answers.get(id)
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Fraction of the wizard completed, for the progress gauge.
    pub fn progress(&self) -> f64 {
        (self.step + 1) as f64 / self.criteria.len() as f64
    }

    /// Record an answer. Unknown ids are ignored; once a result is showing
    /// the answers are frozen so the stored assessment cannot go stale.
    pub fn set_answer(&mut self, id: &str, value: bool) {
        if self.mode == Mode::ShowingResult {
            return;
        }
        self.answers.set(id, value);
    }

    pub fn toggle_answer(&mut self, id: &str) {
        if self.mode == Mode::ShowingResult {
            return;
        }
        self.answers.toggle(id);
    }

    /// Replace the funder name verbatim, no trimming or validation.
    pub fn set_funder_name(&mut self, name: String) {
        if self.mode == Mode::ShowingResult {
            return;
        }
        self.funder_name = name;
    }

    /// Move to the next step. At the last step, run the scoring engine once
    /// and switch to ShowingResult. No-op while a result is showing.
    pub fn advance(&mut self) {
        if self.mode == Mode::ShowingResult {
            return;
        }
        if self.step + 1 < self.criteria.len() {
            self.step += 1;
        } else {
            self.result = Some(scoring::assess(&self.answers, &self.funder_name));
            self.mode = Mode::ShowingResult;
        }
    }

    /// Move to the previous step; no-op at step 0 and while a result is showing.
    pub fn retreat(&mut self) {
        if self.mode == Mode::Collecting && self.step > 0 {
            self.step -= 1;
        }
    }

    /// Discard everything and return to the first step.
    pub fn reset(&mut self) {
        self.step = 0;
        self.answers.clear();
        self.funder_name.clear();
        self.result = None;
        self.mode = Mode::Collecting;
    }

    /// Route a display-layer event to the operation it triggers.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::ToggleAnswer(id) => self.toggle_answer(&id),
            SessionEvent::ChangeFunderName(name) => self.set_funder_name(name),
            SessionEvent::Next => self.advance(),
            SessionEvent::Previous => self.retreat(),
            SessionEvent::StartOver => self.reset(),
        }
    }
}
