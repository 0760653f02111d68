//! Multi-document YAML splitting.
//!
//! Repository definition files hold one record per YAML document. This module
//! splits such a file into its documents without decoding them, so each record
//! can be decoded (and reported) on its own and in file order.
//!
//! A delimiter is a line consisting exactly of `---`. A trailing `\r` is
//! tolerated so CRLF files split the same way. Documents that are empty or
//! contain only whitespace are dropped.
//!
//! # Example
//!
//! ```rust
//! use prodman::documents::split_documents;
//!
//! let input = b"name: a\n---\nname: b\n---\n";
//! let docs = split_documents(input);
//! assert_eq!(docs, vec![&b"name: a"[..], &b"name: b"[..]]);
//! ```

use crate::constants::DOCUMENT_DELIMITER;

/// Split `input` into its YAML documents, in order.
///
/// The returned slices borrow from `input`. The newline ending a document's
/// last line (the one directly before a delimiter) is not part of the document.
/// Never fails; empty input or input made only of delimiters yields an empty
/// vector.
#[must_use]
pub fn split_documents(input: &[u8]) -> Vec<&[u8]> {
    let mut documents = Vec::new();
    let mut doc_start = 0;
    let mut line_start = 0;

    loop {
        let line_end = input[line_start..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(input.len(), |offset| line_start + offset);

        if is_delimiter(&input[line_start..line_end]) {
            // Exclude the newline that precedes the delimiter line
            let doc_end = line_start.saturating_sub(1).max(doc_start);
            push_document(&mut documents, &input[doc_start..doc_end]);
            doc_start = (line_end + 1).min(input.len());
        }

        if line_end >= input.len() {
            break;
        }
        line_start = line_end + 1;
    }

    push_document(&mut documents, &input[doc_start..]);
    documents
}

fn is_delimiter(line: &[u8]) -> bool {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    line == DOCUMENT_DELIMITER.as_bytes()
}

fn push_document<'a>(documents: &mut Vec<&'a [u8]>, document: &'a [u8]) {
    if !document.iter().all(u8::is_ascii_whitespace) {
        documents.push(document);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_strs<'a>(docs: &[&'a [u8]]) -> Vec<&'a str> {
        docs.iter().map(|d| std::str::from_utf8(d).unwrap()).collect()
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(split_documents(b"").is_empty());
    }

    #[test]
    fn test_single_document_without_delimiter() {
        let docs = split_documents(b"format: raw\ntype: hosted\nname: cos-A\n");
        assert_eq!(as_strs(&docs), vec!["format: raw\ntype: hosted\nname: cos-A\n"]);
    }

    #[test]
    fn test_documents_keep_order() {
        let input = b"name: first\n---\nname: second\n---\nname: third";
        let docs = split_documents(input);
        assert_eq!(as_strs(&docs), vec!["name: first", "name: second", "name: third"]);
    }

    #[test]
    fn test_leading_delimiter_is_ignored() {
        let docs = split_documents(b"---\nname: a\n---\nname: b\n");
        assert_eq!(as_strs(&docs), vec!["name: a", "name: b\n"]);
    }

    #[test]
    fn test_only_delimiters_yields_nothing() {
        assert!(split_documents(b"---\n---\n---").is_empty());
        assert!(split_documents(b"---").is_empty());
    }

    #[test]
    fn test_whitespace_documents_are_dropped() {
        let docs = split_documents(b"  \n\t\n---\nname: a\n---\n\n\n");
        assert_eq!(as_strs(&docs), vec!["name: a"]);
    }

    #[test]
    fn test_delimiter_must_be_whole_line() {
        let input = b"name: a\n----\nnote: --- inline\n--- # comment\n";
        let docs = split_documents(input);
        assert_eq!(docs.len(), 1);
    }

    #[test]
    fn test_crlf_delimiter() {
        let docs = split_documents(b"name: a\r\n---\r\nname: b\r\n");
        assert_eq!(as_strs(&docs), vec!["name: a\r", "name: b\r\n"]);
    }

    #[test]
    fn test_join_then_split_recovers_documents() {
        let originals = [
            "format: raw\ntype: hosted\nname: cos-A",
            "format: raw\ntype: group\nname: g",
            "name: z",
        ];
        let joined = originals.join(&format!("\n{DOCUMENT_DELIMITER}\n"));

        let docs = split_documents(joined.as_bytes());
        assert_eq!(as_strs(&docs), originals.to_vec());

        // Reassembling with the same delimiter gives back the same bytes
        let rejoined = as_strs(&docs).join(&format!("\n{DOCUMENT_DELIMITER}\n"));
        assert_eq!(rejoined, joined);
    }

    #[test]
    fn test_split_is_deterministic() {
        let input = b"a: 1\n---\nb: 2\n";
        assert_eq!(split_documents(input), split_documents(input));
    }
}
