//! Load order of httpd configuration files
//!
//! httpd reads the main file top to bottom and pulls in the `conf.d`
//! fragments, alphabetically, at the inclusion directive. The merged view
//! therefore folds the documents as
//!
//! ```text
//! [main head] + fragments sorted by (file_name, file_path) + [main tail]
//! ```

use serde::Serialize;
use snap_parsers::{HttpdConf, HttpdSettings, Section};

/// One slot of the merge: which file contributed which tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigData {
    pub file_name: Option<String>,
    pub file_path: Option<String>,
    pub data: Section,
}

impl ConfigData {
    fn from_doc(doc: &HttpdConf, data: &Section) -> Self {
        Self {
            file_name: doc.file_name().map(str::to_string),
            file_path: doc.file_path().map(str::to_string),
            data: data.clone(),
        }
    }
}

/// Arrange `docs` in the order httpd applies them.
///
/// The first document named [`HttpdSettings::main_file_name`] is the main
/// file. Any further document with that name is ordered like a fragment.
/// Without a main file the result is just the sorted fragments.
pub fn priority_order(docs: &[HttpdConf], settings: &HttpdSettings) -> Vec<ConfigData> {
    let main_at = docs
        .iter()
        .position(|doc| doc.file_name() == Some(settings.main_file_name.as_str()));

    let mut others: Vec<&HttpdConf> = docs
        .iter()
        .enumerate()
        .filter(|(idx, _)| Some(*idx) != main_at)
        .map(|(_, doc)| doc)
        .collect();
    for doc in &others {
        if doc.file_name() == Some(settings.main_file_name.as_str()) {
            tracing::warn!(
                file_path = ?doc.file_path(),
                "Additional main configuration file ordered as a fragment"
            );
        }
    }
    others.sort_by(|a, b| {
        (a.file_name(), a.file_path()).cmp(&(b.file_name(), b.file_path()))
    });

    let mut slots = Vec::with_capacity(others.len() + 2);
    let main = main_at.map(|idx| &docs[idx]);
    if let Some(main) = main {
        slots.push(ConfigData::from_doc(main, main.head()));
    }
    slots.extend(others.iter().map(|doc| ConfigData::from_doc(doc, doc.data())));
    if let Some(main) = main {
        slots.push(ConfigData::from_doc(main, main.tail()));
    }

    tracing::debug!(
        main = ?main.and_then(HttpdConf::file_path),
        fragments = others.len(),
        "Ordered httpd configuration files"
    );
    slots
}
