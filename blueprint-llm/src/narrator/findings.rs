use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum FindingType {
    ModuleDocstring,
    FunctionDef,
    ClassDef,
    Import,
    Entrypoint,
    NetworkCall,
    DbCall,
    FsIo,
    SubprocessCall,
}

impl FindingType {
    pub fn is_io(self) -> bool {
        matches!(
            self,
            FindingType::NetworkCall | FindingType::DbCall | FindingType::FsIo | FindingType::SubprocessCall
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Finding {
    pub line: usize,
    pub typ: FindingType,
    /// Defined, imported or called name
    pub subject: Option<String>,
    /// Enclosing function of a call
    pub owner: Option<String>,
    /// Parameters of a function, methods of a class
    pub notes: Vec<String>,
    pub text: Option<String>,
}

impl Finding {
    pub fn new(line: usize, typ: FindingType) -> Self {
        Self {
            line,
            typ,
            subject: None,
            owner: None,
            notes: vec![],
            text: None,
        }
    }

    pub fn with_subject(mut self, subject: String) -> Self {
        self.subject = Some(subject);
        self
    }

    pub fn with_owner(mut self, owner: String) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn with_text(mut self, text: String) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes = notes;
        self
    }
}
