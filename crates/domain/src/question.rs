use super::QueryOptions;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RECORD_TYPE: &str = "A";

/// A single logical DNS question (name + record type mnemonic).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    #[serde(default)]
    pub name: String,

    /// Case-insensitive mnemonic such as "A", "aaaa" or "TXT".
    #[serde(rename = "type", default = "default_record_type")]
    pub record_type: String,

    /// Per-question options. Only the system driver honours them; the DoH
    /// driver applies the call-level options to the whole batch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<QueryOptions>,
}

impl Question {
    pub fn new(name: impl Into<String>, record_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            options: None,
        }
    }

    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn has_empty_name(&self) -> bool {
        self.name.is_empty()
    }

    /// Record type to put on the wire; an empty mnemonic falls back to "A".
    pub fn effective_type(&self) -> &str {
        if self.record_type.is_empty() {
            DEFAULT_RECORD_TYPE
        } else {
            &self.record_type
        }
    }
}

fn default_record_type() -> String {
    DEFAULT_RECORD_TYPE.to_string()
}

/// Input of a socket query: one name with a separate type, or an ordered
/// batch of questions each carrying its own type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Single {
        name: String,
        record_type: Option<String>,
    },
    Batch(Vec<Question>),
}

impl Lookup {
    pub fn single(name: impl Into<String>, record_type: impl Into<String>) -> Self {
        Lookup::Single {
            name: name.into(),
            record_type: Some(record_type.into()),
        }
    }

    pub fn batch(questions: impl IntoIterator<Item = Question>) -> Self {
        Lookup::Batch(questions.into_iter().collect())
    }

    pub fn is_batch(&self) -> bool {
        matches!(self, Lookup::Batch(_))
    }

    /// Number of results a query for this lookup yields when answers are
    /// aligned per question.
    pub fn len(&self) -> usize {
        match self {
            Lookup::Single { .. } => 1,
            Lookup::Batch(questions) => questions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalizes to a list of questions; a single name becomes a
    /// one-element batch.
    pub fn into_questions(self) -> Vec<Question> {
        match self {
            Lookup::Single { name, record_type } => vec![Question::new(
                name,
                record_type.unwrap_or_else(default_record_type),
            )],
            Lookup::Batch(questions) => questions,
        }
    }
}

impl From<&str> for Lookup {
    fn from(name: &str) -> Self {
        Lookup::Single {
            name: name.to_string(),
            record_type: None,
        }
    }
}

impl From<String> for Lookup {
    fn from(name: String) -> Self {
        Lookup::Single {
            name,
            record_type: None,
        }
    }
}

impl From<Question> for Lookup {
    fn from(question: Question) -> Self {
        Lookup::Batch(vec![question])
    }
}

impl From<Vec<Question>> for Lookup {
    fn from(questions: Vec<Question>) -> Self {
        Lookup::Batch(questions)
    }
}
