//! Word polarity lexicon.
//!
//! Tab-separated `word<TAB>polarity` rows without a header, polarity an
//! integer from -5 to +5 (AFINN layout). Words are stored lowercase.

use crate::error::ResourceError;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::debug;

const BUNDLED_LEXICON: &str = include_str!("../resources/afinn.tsv");

pub const MIN_POLARITY: i32 = -5;
pub const MAX_POLARITY: i32 = 5;

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    polarities: HashMap<String, i32>,
}

impl Lexicon {
    pub fn bundled() -> Result<Self, ResourceError> {
        Self::from_reader("bundled lexicon", BUNDLED_LEXICON.as_bytes())
    }

    pub fn from_path(path: &Path) -> Result<Self, ResourceError> {
        let file = std::fs::File::open(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(&path.display().to_string(), file)
    }

    pub fn from_reader<R: Read>(resource: &str, reader: R) -> Result<Self, ResourceError> {
        let mut tsv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut polarities = HashMap::new();

        for result in tsv_reader.records() {
            let record = result.map_err(|e| parse_error(resource, &e))?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let (word, polarity): (String, i32) = record
                .deserialize(None)
                .map_err(|e| parse_error(resource, &e))?;

            if !(MIN_POLARITY..=MAX_POLARITY).contains(&polarity) {
                return Err(ResourceError::Parse {
                    resource: resource.to_string(),
                    line,
                    message: format!("polarity {} of '{}' is outside {}..={}", polarity, word, MIN_POLARITY, MAX_POLARITY),
                });
            }

            polarities.insert(word.to_lowercase(), polarity);
        }

        if polarities.is_empty() {
            return Err(ResourceError::Empty { resource: resource.to_string() });
        }

        debug!(count = polarities.len(), "Loaded sentiment lexicon");
        Ok(Self { polarities })
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, i32)>) -> Self {
        Self {
            polarities: pairs.into_iter().map(|(w, p)| (w.to_lowercase(), p)).collect(),
        }
    }

    pub fn polarity(&self, word: &str) -> Option<i32> {
        self.polarities.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.polarities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polarities.is_empty()
    }
}

fn parse_error(resource: &str, error: &csv::Error) -> ResourceError {
    ResourceError::Parse {
        resource: resource.to_string(),
        line: error.position().map(|p| p.line()).unwrap_or(0),
        message: error.to_string(),
    }
}
