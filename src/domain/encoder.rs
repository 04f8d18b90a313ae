// src/domain/encoder.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("unseen {field} category: {value:?}")]
pub struct UnseenCategory {
    pub field: String,
    pub value: String,
}

/// Maps a fixed set of labels to dense integer codes.
///
/// Codes follow the sorted order of the labels seen at fit time. The encoder
/// is frozen after `fit`; unseen labels are rejected rather than defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelEncoder {
    field: String,
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn fit<'a>(field: &str, labels: impl IntoIterator<Item = &'a str>) -> Self {
        let classes: BTreeSet<&str> = labels.into_iter().collect();

        Self {
            field: field.to_string(),
            classes: classes.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn transform(&self, label: &str) -> Result<usize, UnseenCategory> {
        self.classes
            .binary_search_by(|c| c.as_str().cmp(label))
            .map_err(|_| UnseenCategory {
                field: self.field.clone(),
                value: label.to_string(),
            })
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}
