use html_escape::decode_html_entities;

use crate::vrt::error::VrtError;

// Coarse part-of-speech class of a token. Spacing only depends on this,
// never on the full grammatical tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Word,
    Number,
    Punctuation,
}

impl TokenClass {
    // Total: every unrecognized grammatical tag counts as a word.
    pub fn classify(class_tag: &str) -> Self {
        match class_tag {
            "PUNCT" => Self::Punctuation,
            "NUM" => Self::Number,
            _ => Self::Word,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "WORD" => Some(Self::Word),
            "NUM" => Some(Self::Number),
            "PUNCT" => Some(Self::Punctuation),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub content: String,
    pub class: TokenClass,
}

// One token per line, at least five tab-separated fields:
// index, surface form, lemma, class tag, rest (ignored)
pub fn parse_vrt_line(line: &str) -> Result<Token, VrtError> {
    let fields: Vec<&str> = line.splitn(5, '\t').collect();
    if fields.len() < 5 {
        return Err(VrtError::MalformedLine(line.to_owned()));
    }

    // Change &amp; to & and other HTML entities to their original form
    // as required by https://www.kielipankki.fi/support/vrt-format/
    let content = decode_html_entities(fields[1]).into_owned();
    let class = TokenClass::classify(fields[3]);

    Ok(Token { content, class })
}
