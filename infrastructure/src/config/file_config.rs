//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! `into_setup` converts them into validated domain types; the built-in
//! defaults reproduce the canonical regulation-vs-autonomy debate.

use debate_domain::{Debater, Judge, JudgeProfile, KeywordScoring, RoleId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors: file loading plus the setup validations the
/// debate loop itself does not perform.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("A debate requires exactly two participants, got {0}")]
    WrongParticipantCount(usize),

    #[error("Participant id used twice: {0}")]
    DuplicateParticipant(String),

    #[error("first_speaker '{0}' does not match any participant")]
    UnknownFirstSpeaker(String),
}

/// Raw debate settings from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    /// Number of rounds to run
    pub rounds: u32,
    /// Participant id that opens the debate
    pub first_speaker: String,
    /// Directory for the topology diagram artifacts
    pub output_dir: String,
}

impl Default for FileDebateConfig {
    fn default() -> Self {
        Self {
            rounds: 8,
            first_speaker: "Scientist".to_string(),
            output_dir: "dag_output".to_string(),
        }
    }
}

/// Raw participant definition from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileParticipantConfig {
    /// Role id, unique per debate
    pub id: String,
    /// Display label
    #[serde(default)]
    pub label: Option<String>,
    /// Scripted utterances, one per round this side speaks
    pub script: Vec<String>,
}

impl FileParticipantConfig {
    fn new(id: &str, script: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            label: None,
            script: script.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn into_debater(self) -> Debater {
        let label = self.label.unwrap_or_else(|| self.id.clone());
        Debater::new(self.id, label, self.script)
    }
}

/// Raw judge settings from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileJudgeConfig {
    /// Role that wins ties
    pub favored: String,
    /// Reason string attached when the favored role wins
    pub favored_reason: String,
    pub challenger: String,
    /// Reason string attached when the challenger wins
    pub challenger_reason: String,
    /// Per-role keyword lists for the scoring heuristic
    pub keywords: BTreeMap<String, Vec<String>>,
}

impl Default for FileJudgeConfig {
    fn default() -> Self {
        let mut keywords = BTreeMap::new();
        keywords.insert(
            "Scientist".to_string(),
            ["risk", "safety", "harm", "regulated", "medical", "control", "trust"]
                .map(String::from)
                .to_vec(),
        );
        keywords.insert(
            "Philosopher".to_string(),
            ["freedom", "autonomy", "progress", "philosoph", "innovation", "ethic", "stifle"]
                .map(String::from)
                .to_vec(),
        );

        Self {
            favored: "Scientist".to_string(),
            favored_reason: "Presented more grounded, risk-based arguments aligned with public safety principles.".to_string(),
            challenger: "Philosopher".to_string(),
            challenger_reason: "Emphasized autonomy and philosophical arguments more strongly."
                .to_string(),
            keywords,
        }
    }
}

impl FileJudgeConfig {
    fn into_judge(self) -> Judge {
        let keywords = self
            .keywords
            .into_iter()
            .map(|(role, words)| (RoleId::new(role), words))
            .collect();

        Judge::new(
            JudgeProfile::new(self.favored, self.favored_reason),
            JudgeProfile::new(self.challenger, self.challenger_reason),
            Box::new(KeywordScoring::new(keywords)),
        )
    }
}

/// Everything the binary needs to wire up a debate, converted and
/// validated from a [`FileConfig`].
pub struct DebateSetup {
    /// Opens the debate; speaks the odd rounds
    pub first: Debater,
    /// Speaks the even rounds
    pub second: Debater,
    pub judge: Judge,
    pub rounds: u32,
    pub output_dir: PathBuf,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Debate settings
    pub debate: FileDebateConfig,
    /// Exactly two participants
    pub participants: Vec<FileParticipantConfig>,
    /// Judge settings
    pub judge: FileJudgeConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            debate: FileDebateConfig::default(),
            participants: vec![
                FileParticipantConfig::new(
                    "Scientist",
                    &[
                        "AI must be regulated due to high-risk applications.",
                        "Medicine is regulated to protect humans; AI impacts can be similar.",
                        "A framework like FDA can prevent harmful AI releases.",
                        "Regulation ensures transparency and accountability.",
                    ],
                ),
                FileParticipantConfig::new(
                    "Philosopher",
                    &[
                        "Regulation could stifle philosophical progress and autonomy.",
                        "Ethics evolve faster than laws; strict control may hinder adaptation.",
                        "Creative AI breakthroughs often come from freedom, not control.",
                        "History shows overregulation often delays societal evolution.",
                    ],
                ),
            ],
            judge: FileJudgeConfig::default(),
        }
    }
}

impl FileConfig {
    /// Convert into validated domain types.
    ///
    /// Rejects the configurations the round loop has no defined behavior
    /// for: anything other than two participants with distinct ids, or a
    /// `first_speaker` naming neither of them. Round-count validation is
    /// left to `TurnOrder`.
    pub fn into_setup(self) -> Result<DebateSetup, ConfigError> {
        let [first_cfg, second_cfg] = match <[FileParticipantConfig; 2]>::try_from(self.participants)
        {
            Ok(pair) => pair,
            Err(participants) => {
                return Err(ConfigError::WrongParticipantCount(participants.len()));
            }
        };

        if first_cfg.id == second_cfg.id {
            return Err(ConfigError::DuplicateParticipant(first_cfg.id));
        }

        let (first_cfg, second_cfg) = if first_cfg.id == self.debate.first_speaker {
            (first_cfg, second_cfg)
        } else if second_cfg.id == self.debate.first_speaker {
            (second_cfg, first_cfg)
        } else {
            return Err(ConfigError::UnknownFirstSpeaker(
                self.debate.first_speaker.clone(),
            ));
        };

        Ok(DebateSetup {
            first: first_cfg.into_debater(),
            second: second_cfg.into_debater(),
            judge: self.judge.into_judge(),
            rounds: self.debate.rounds,
            output_dir: PathBuf::from(self.debate.output_dir),
        })
    }
}
