use crate::define_index_newtype;

define_index_newtype!(LocationIdx, Location);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    Center,
    Hub,
}

/// A warehouse center or the destination hub.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    external_id: String,
    kind: LocationKind,
}

impl Location {
    pub fn center(external_id: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            kind: LocationKind::Center,
        }
    }

    pub fn hub(external_id: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            kind: LocationKind::Hub,
        }
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn is_hub(&self) -> bool {
        self.kind == LocationKind::Hub
    }
}
