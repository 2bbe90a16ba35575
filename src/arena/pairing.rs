use crate::ai::{Agent, ConsoleAgent, GreedyAgent, RandomAgent};

/// Kind of player seated at one side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    Human,
    Greedy,
    Random,
}

impl AgentKind {
    /// Build a fresh agent. Random agents use `seed` when given.
    /// Humans play on stdin/stdout.
    pub fn build(self, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            AgentKind::Human => Box::new(ConsoleAgent::stdio()),
            AgentKind::Greedy => Box::new(GreedyAgent::new()),
            AgentKind::Random => match seed {
                Some(seed) => Box::new(RandomAgent::with_seed(seed)),
                None => Box::new(RandomAgent::new()),
            },
        }
    }
}

/// Who plays whom. The first side named moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Pairing {
    HumanVsRandom,
    #[default]
    AiVsRandom,
    RandomVsRandom,
}

impl Pairing {
    /// `(first side, second side)`.
    pub fn sides(self) -> (AgentKind, AgentKind) {
        match self {
            Pairing::HumanVsRandom => (AgentKind::Human, AgentKind::Random),
            Pairing::AiVsRandom => (AgentKind::Greedy, AgentKind::Random),
            Pairing::RandomVsRandom => (AgentKind::Random, AgentKind::Random),
        }
    }

    pub fn has_human(self) -> bool {
        self.sides().0 == AgentKind::Human || self.sides().1 == AgentKind::Human
    }

    pub fn label(self) -> &'static str {
        match self {
            Pairing::HumanVsRandom => "human-vs-random",
            Pairing::AiVsRandom => "ai-vs-random",
            Pairing::RandomVsRandom => "random-vs-random",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sides() {
        assert_eq!(
            Pairing::AiVsRandom.sides(),
            (AgentKind::Greedy, AgentKind::Random)
        );
        assert!(Pairing::HumanVsRandom.has_human());
        assert!(!Pairing::RandomVsRandom.has_human());
    }

    #[test]
    fn test_build_names() {
        assert_eq!(AgentKind::Greedy.build(None).name(), "Greedy");
        assert_eq!(AgentKind::Random.build(Some(1)).name(), "Random");
    }

    #[test]
    fn test_serde_names() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            pairing: Pairing,
        }
        let w: Wrapper = toml::from_str(r#"pairing = "random-vs-random""#).unwrap();
        assert_eq!(w.pairing, Pairing::RandomVsRandom);
        assert_eq!(Pairing::HumanVsRandom.label(), "human-vs-random");
    }
}
