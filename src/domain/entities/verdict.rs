/// Review outcomes the service is known to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Approved,
    Reviewing,
    Rejected,
}

impl Verdict {
    pub const ALL: [Verdict; 3] = [Verdict::Approved, Verdict::Reviewing, Verdict::Rejected];

    /// Resolve a raw status code. Unknown codes yield `None`; callers decide
    /// how to surface the miss.
    pub fn from_status(status: &str) -> Option<Self> {
        match status {
            "approved" => Some(Verdict::Approved),
            "reviewing" => Some(Verdict::Reviewing),
            "rejected" => Some(Verdict::Rejected),
            _ => None,
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            Verdict::Approved => "approved",
            Verdict::Reviewing => "reviewing",
            Verdict::Rejected => "rejected",
        }
    }

    /// Canonical sentence shown to the user.
    pub fn sentence(&self) -> &'static str {
        match self {
            Verdict::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Verdict::Reviewing => "Работа взята на проверку ревьюером.",
            Verdict::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// Table lookup from status code straight to its verdict sentence.
pub fn verdict_sentence(status: &str) -> Option<&'static str> {
    Verdict::from_status(status).map(|v| v.sentence())
}
