//! Round state machine

use super::{GameState, GuessError, HighScoreStore, RoundSummary, SessionConfig, UsedWord};
use crate::core::{MIN_WORD_LEN, RootWord};
use crate::dictionary::WordValidator;
use crate::enumerate::{EnumerationTask, PossibleWordSet};
use log::{debug, info, warn};
use std::sync::Arc;

/// Guess that resets the stored high score instead of being played
pub const RESET_COMMAND: &str = "XXX";

/// Outcome of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Guess was valid and scored
    Accepted(UsedWord),
    /// The reset command cleared the stored high score
    HighScoreReset,
}

/// A player's session: one round at a time, plus the high score
///
/// ```
/// use std::sync::Arc;
/// use word_scramble::core::RootWord;
/// use word_scramble::dictionary::WordListValidator;
/// use word_scramble::game::{GameSession, MemoryHighScore, SessionConfig, Submission};
///
/// let validator = Arc::new(WordListValidator::new("en", ["drink", "king"]));
/// let mut session = GameSession::new(
///     SessionConfig::default(),
///     validator,
///     Box::new(MemoryHighScore::default()),
/// );
///
/// session.start_round(RootWord::new("drinking").unwrap());
/// let accepted = session.submit_guess("Drink").unwrap();
/// assert!(matches!(accepted, Submission::Accepted(ref w) if w.score == 6));
/// assert!(session.submit_guess("drink").is_err());
/// ```
pub struct GameSession {
    config: SessionConfig,
    validator: Arc<dyn WordValidator>,
    high_scores: Box<dyn HighScoreStore>,
    high_score: u32,
    state: GameState,
    root: Option<RootWord>,
    used_words: Vec<UsedWord>,
    score: u32,
    time_remaining: u32,
    enumeration: Option<EnumerationTask>,
    summary: Option<RoundSummary>,
}

impl GameSession {
    /// Create a session; the high score is read from `high_scores` once
    #[must_use]
    pub fn new(
        config: SessionConfig,
        validator: Arc<dyn WordValidator>,
        high_scores: Box<dyn HighScoreStore>,
    ) -> Self {
        let high_score = high_scores.load();
        Self {
            time_remaining: config.round_seconds,
            config,
            validator,
            high_scores,
            high_score,
            state: GameState::NotStarted,
            root: None,
            used_words: Vec::new(),
            score: 0,
            enumeration: None,
            summary: None,
        }
    }

    /// Begin a round on `root`
    ///
    /// Resets the timer, accepted words and score, and starts enumerating
    /// the possible answers in the background. A round still in progress is
    /// abandoned and its enumeration discarded.
    pub fn start_round(&mut self, root: RootWord) {
        if let Some(stale) = self.enumeration.take() {
            stale.cancel();
        }

        info!("Starting round with root word {root}");
        self.enumeration = Some(EnumerationTask::spawn(
            root.clone(),
            Arc::clone(&self.validator),
            self.config.locale.clone(),
        ));
        self.root = Some(root);
        self.used_words.clear();
        self.score = 0;
        self.time_remaining = self.config.round_seconds;
        self.summary = None;
        self.state = GameState::InProgress;
    }

    /// Check a guess against every rule without recording it
    ///
    /// Returns the normalized guess when it would be accepted.
    ///
    /// # Errors
    ///
    /// Returns the first rule the guess breaks, in order: repeated, not
    /// makeable from the root, too short, not a real word. Outside a round
    /// the error is `GuessError::NotInProgress`.
    pub fn check_guess(&self, raw: &str) -> Result<String, GuessError> {
        let root = match (&self.state, &self.root) {
            (GameState::InProgress, Some(root)) => root,
            _ => return Err(GuessError::NotInProgress),
        };

        validate_guess(
            raw,
            root,
            &self.used_words,
            &*self.validator,
            &self.config.locale,
        )
    }

    /// Play a guess
    ///
    /// The literal [`RESET_COMMAND`] resets the stored high score in any
    /// state and is never scored.
    ///
    /// # Errors
    ///
    /// Returns the failed rule as described in [`GameSession::check_guess`];
    /// the session is left unchanged.
    pub fn submit_guess(&mut self, raw: &str) -> Result<Submission, GuessError> {
        if raw.trim() == RESET_COMMAND {
            self.reset_high_score();
            return Ok(Submission::HighScoreReset);
        }

        let word = self.check_guess(raw).inspect_err(|e| {
            debug!("Rejected guess {raw:?}: {}", e.title());
        })?;

        let used = UsedWord::new(word);
        self.score += used.score;
        self.used_words.insert(0, used.clone());
        debug!("Accepted {} for {} points", used.word, used.score);

        Ok(Submission::Accepted(used))
    }

    /// Advance the round timer by one second
    ///
    /// Ends the round when the timer reaches zero. Does nothing outside a
    /// round.
    pub fn tick(&mut self) -> GameState {
        if self.state == GameState::InProgress {
            self.time_remaining = self.time_remaining.saturating_sub(1);
            if self.time_remaining == 0 {
                self.end_round();
            }
        }
        self.state
    }

    /// End the round now
    ///
    /// Collects the possible answers (partial if enumeration has not
    /// finished) and records a new high score. Does nothing outside a round.
    pub fn end_round(&mut self) {
        if self.state != GameState::InProgress {
            return;
        }
        self.state = GameState::Over;
        self.time_remaining = 0;

        let possible = match (self.enumeration.take(), &self.root) {
            (Some(task), _) => task.finish(),
            (None, Some(root)) => PossibleWordSet::empty(root.clone()),
            (None, None) => return,
        };

        if self.score > self.high_score {
            info!("New high score {} (was {})", self.score, self.high_score);
            self.high_score = self.score;
            self.persist_high_score();
        }

        info!(
            "Round over: {} points, {} of {} possible words found",
            self.score,
            self.used_words.len(),
            possible.len()
        );

        self.summary = Some(RoundSummary {
            possible,
            used_words: self.used_words.clone(),
            score: self.score,
            high_score: self.high_score,
        });
    }

    /// Whether the background enumeration has already completed
    pub fn possible_words_ready(&mut self) -> bool {
        match self.enumeration.as_mut() {
            Some(task) => task.try_result().is_some(),
            None => self.summary.is_some(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn root_word(&self) -> Option<&RootWord> {
        self.root.as_ref()
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[UsedWord] {
        &self.used_words
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn high_score(&self) -> u32 {
        self.high_score
    }

    #[must_use]
    pub const fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Answers for the finished round; `None` until the round is over
    #[must_use]
    pub const fn summary(&self) -> Option<&RoundSummary> {
        self.summary.as_ref()
    }

    fn reset_high_score(&mut self) {
        info!("Resetting high score (was {})", self.high_score);
        self.high_score = 0;
        self.persist_high_score();
    }

    fn persist_high_score(&mut self) {
        if let Err(e) = self.high_scores.save(self.high_score) {
            warn!("{e}");
        }
    }
}

/// Normalize `raw` and run the four guess rules against `root`
///
/// Rules short-circuit in this order: not already used (nor the root word
/// itself), makeable from the root's letters, at least three letters long,
/// accepted by `validator`.
///
/// # Errors
///
/// Returns the first rule the guess breaks.
///
/// # Examples
/// ```
/// use word_scramble::core::RootWord;
/// use word_scramble::dictionary::WordListValidator;
/// use word_scramble::game::{GuessError, validate_guess};
///
/// let root = RootWord::new("drinking").unwrap();
/// let validator = WordListValidator::new("en", ["drink"]);
///
/// assert_eq!(validate_guess(" Drink ", &root, &[], &validator, "en"), Ok("drink".into()));
/// assert!(matches!(
///     validate_guess("dringk", &root, &[], &validator, "en"),
///     Err(GuessError::NotReal { .. })
/// ));
/// ```
pub fn validate_guess<V>(
    raw: &str,
    root: &RootWord,
    used_words: &[UsedWord],
    validator: &V,
    locale: &str,
) -> Result<String, GuessError>
where
    V: WordValidator + ?Sized,
{
    let word = raw.trim().to_lowercase();

    let is_original = word != root.text() && !used_words.iter().any(|u| u.word == word);
    if !is_original {
        return Err(GuessError::Repeated { word });
    }

    if !root.can_spell(&word) {
        return Err(GuessError::Unmakeable {
            word,
            root: root.text().to_string(),
        });
    }

    if word.len() < MIN_WORD_LEN {
        return Err(GuessError::TooShort { word });
    }

    if !validator.is_real(&word, locale) {
        return Err(GuessError::NotReal { word });
    }

    Ok(word)
}
