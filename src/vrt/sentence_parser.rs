use crate::vrt::{
    error::VrtError,
    line_parser::{parse_vrt_line, Token, TokenClass},
};

// Spacing decisions for one sentence. The quotation flags toggle on every
// occurrence of their character inside a token's content, not only when the
// token is exactly that character: a quote may start or end within a word
// (e.g. a token `"le`).
#[derive(Debug, Default)]
struct SpacingState {
    previous: Option<String>,
    previous_class: Option<TokenClass>,
    before_previous_class: Option<TokenClass>,

    inside_double_quotes: bool,
    inside_single_quotes: bool,
    inside_curly_double_quotes: bool,
}

impl SpacingState {
    fn push(&mut self, sentence: &mut String, content: &str, class: TokenClass) {
        // By default each token is separated from the previous one with a
        // space.
        let mut space_before = matches!(self.previous.as_deref(), Some(p) if !p.is_empty());

        // Whether one of the previous-token rules already settled the
        // spacing; a settled decision is not overridden by the parenthesis
        // rule below.
        let mut settled = false;

        match self.previous.as_deref() {
            // After an opening parenthesis or a slash there is no space
            // Example: "km/h"
            Some("(") | Some("/") => {
                space_before = false;
                settled = true;
            }
            // Immediately after an opening quote there is no space
            // Example: 'Foo "bar" baz' (at 'b')
            Some("\"") if self.inside_double_quotes => {
                space_before = false;
                settled = true;
            }
            Some("”") if self.inside_curly_double_quotes => {
                space_before = false;
                settled = true;
            }
            Some("'") if self.inside_single_quotes => {
                space_before = false;
                settled = true;
            }
            _ => {}
        }

        if content.contains('"') {
            // A closing quote hugs the preceding text
            // Example: 'foo "bar" baz' (at 'r')
            if self.inside_double_quotes {
                space_before = false;
            }
            self.inside_double_quotes = !self.inside_double_quotes;
        } else if content.contains('”') {
            if self.inside_curly_double_quotes {
                space_before = false;
            }
            self.inside_curly_double_quotes = !self.inside_curly_double_quotes;
        } else if content.contains('\'') {
            if self.inside_single_quotes {
                space_before = false;
            }
            self.inside_single_quotes = !self.inside_single_quotes;
        } else if class == TokenClass::Punctuation && !settled {
            // Punctuation hugs the preceding token, except an opening
            // parenthesis which is preceded by a space
            // Example: "Foo (bar) baz"
            space_before = content == "(";
        }

        // A punctuation token between two number tokens forms a decimal
        // group. The lookback is exactly two tokens; longer chains are out
        // of scope.
        // Example: "6,3"
        if class == TokenClass::Number
            && self.previous_class == Some(TokenClass::Punctuation)
            && self.before_previous_class == Some(TokenClass::Number)
        {
            space_before = false;
        }

        // The first token never gets a leading space.
        if space_before && self.previous.is_some() {
            sentence.push(' ');
        }
        sentence.push_str(content);

        self.before_previous_class = self.previous_class;
        self.previous = Some(content.to_owned());
        self.previous_class = Some(class);
    }
}

// Assembles the natural-language sentence from its classified tokens.
pub fn assemble_sentence(tokens: &[Token]) -> String {
    let mut state = SpacingState::default();
    let mut sentence = String::new();

    for token in tokens {
        state.push(&mut sentence, &token.content, token.class);
    }

    sentence
}

// Assembles a sentence from raw (content, class name) pairs. Class names
// must be one of "WORD", "NUM" or "PUNCT"; anything else means the
// classifier contract was broken upstream.
pub fn form_sentence(parts: &[(&str, &str)]) -> Result<String, VrtError> {
    let mut state = SpacingState::default();
    let mut sentence = String::new();

    for &(content, class_name) in parts {
        let class = TokenClass::from_name(class_name)
            .ok_or_else(|| VrtError::UnknownTokenClass(class_name.to_owned()))?;
        state.push(&mut sentence, content, class);
    }

    Ok(sentence)
}

// Parses the token lines of one sentence region into plain text. Blank
// lines are ignored; a region without a single token line is an input
// error, not an empty sentence.
pub fn parse_vrt_sentence(vrt_block: &str) -> Result<String, VrtError> {
    let mut state = SpacingState::default();
    let mut sentence = String::new();
    let mut token_count = 0;

    for line in vrt_block.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let token = parse_vrt_line(line)?;
        state.push(&mut sentence, &token.content, token.class);
        token_count += 1;
    }

    if token_count == 0 {
        return Err(VrtError::EmptySentence);
    }

    Ok(sentence)
}
