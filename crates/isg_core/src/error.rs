use thiserror::Error;

use crate::Label;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The language has no label set, or its set lacks the label.
    #[error("unsupported language for i18n: {language} (label {label:?})")]
    UnsupportedLanguage { language: String, label: Label },
}
