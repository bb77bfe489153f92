// Conversion of VRT (VeRticalized Text) corpora into plain text, following
// the format described at https://www.kielipankki.fi/support/vrt-format/
//
// One grammatical token per line, tab-delimited; sentences (and optionally
// paragraphs) are wrapped in XML-style tags. The annotation strips natural
// spacing and quoting, so the text is reconstructed heuristically from the
// token content and a coarse part-of-speech class.
//
// The reconstruction does not handle all special cases:
// - there are numerous different quotation marks in the world which are not
//   handled correctly
// - urls are not handled correctly either

pub mod error;
pub mod extractor;
pub mod line_parser;
pub mod sentence_parser;
