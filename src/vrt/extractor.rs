use regex::Regex;

use crate::vrt::{error::VrtError, sentence_parser::parse_vrt_sentence};

#[derive(Debug, Clone)]
pub struct TagConfig {
    // Tells to look for <sentence>...</sentence> regions.
    pub sentence_tag: String,
    // Tells to look for <paragraph>...</paragraph> regions. Paragraphs are
    // assumed to contain sentences. Only used when `paragraphs` is set.
    pub paragraph_tag: String,
    // If set, the contents are assumed to contain multiple paragraphs.
    // Otherwise the contents are assumed to contain only sentences.
    pub paragraphs: bool,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            sentence_tag: "sentence".to_owned(),
            paragraph_tag: "paragraph".to_owned(),
            paragraphs: false,
        }
    }
}

// Non-greedy so that adjacent regions are not merged; (?s) because regions
// span newlines.
fn region_pattern(tag: &str) -> Result<Regex, VrtError> {
    let pattern = format!(r"(?s)<{0}>(.*?)</{0}>", regex::escape(tag));
    Ok(Regex::new(&pattern)?)
}

fn region_contents<'t>(pattern: &Regex, contents: &'t str) -> Vec<&'t str> {
    pattern
        .captures_iter(contents)
        .map(|captures| captures.get(1).unwrap().as_str())
        .collect()
}

// Iterates over the sentences of a VRT document. Sentences of one paragraph
// are separated by single spaces, and every paragraph (or the whole
// document, when paragraph mode is off) ends with a newline.
pub fn iter_vrt<'t>(contents: &'t str, config: &TagConfig) -> Result<FragmentStream<'t>, VrtError> {
    let sentence_pattern = region_pattern(&config.sentence_tag)?;

    let units = if config.paragraphs {
        let paragraph_pattern = region_pattern(&config.paragraph_tag)?;
        region_contents(&paragraph_pattern, contents)
    } else {
        vec![contents]
    };

    Ok(FragmentStream {
        sentence_tag: config.sentence_tag.clone(),
        sentence_pattern,
        units: units.into_iter(),
        sentences: Vec::new().into_iter(),
        pending: None,
        done: false,
    })
}

// Lazy stream of output fragments: assembled sentences, single-space
// sentence separators and newline unit terminators. Each call assembles at
// most one sentence; after yielding an error the stream is exhausted.
#[derive(Debug)]
pub struct FragmentStream<'t> {
    sentence_tag: String,
    sentence_pattern: Regex,
    units: std::vec::IntoIter<&'t str>,
    sentences: std::vec::IntoIter<&'t str>,
    pending: Option<&'static str>,
    done: bool,
}

impl<'t> Iterator for FragmentStream<'t> {
    type Item = Result<String, VrtError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if let Some(separator) = self.pending.take() {
            return Some(Ok(separator.to_owned()));
        }

        loop {
            if let Some(block) = self.sentences.next() {
                return match parse_vrt_sentence(block) {
                    Ok(sentence) => {
                        self.pending = Some(if self.sentences.as_slice().is_empty() {
                            "\n"
                        } else {
                            " "
                        });
                        Some(Ok(sentence))
                    }
                    Err(err) => {
                        self.done = true;
                        Some(Err(err))
                    }
                };
            }

            let unit = match self.units.next() {
                Some(unit) => unit,
                None => return None,
            };

            let blocks = region_contents(&self.sentence_pattern, unit);
            if blocks.is_empty() {
                // At least one sentence is mandatory per unit.
                self.done = true;
                return Some(Err(VrtError::NoSentenceFound(self.sentence_tag.clone())));
            }
            self.sentences = blocks.into_iter();
        }
    }
}
