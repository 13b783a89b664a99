use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AutoAction {
    Play { indices: Vec<usize> },
    Discard { indices: Vec<usize> },
    NewRun,
}

impl AutoAction {
    pub fn stable_key(&self) -> String {
        match self {
            Self::Play { indices } => format!("play:{indices:?}"),
            Self::Discard { indices } => format!("discard:{indices:?}"),
            Self::NewRun => "new_run".to_string(),
        }
    }

    pub fn short_label(&self) -> String {
        match self {
            Self::Play { indices } => format!("play {indices:?}"),
            Self::Discard { indices } => format!("discard {indices:?}"),
            Self::NewRun => "new_run".to_string(),
        }
    }
}
