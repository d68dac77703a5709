//! Outbound message codec: line-aware chunking and TwiML envelopes.

use quick_xml::escape::escape;

/// Twilio's per-message body limit, in characters.
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 1600;

/// One transport message.
///
/// `line_break_after` records whether a newline separated this chunk from
/// the next one in the original text; it is false after a hard split and
/// on the last chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub text: String,
    pub line_break_after: bool,
}

/// Split `text` into the fewest chunks of at most `max_len` characters,
/// breaking on newlines. A line longer than `max_len` is hard-split.
///
/// Always returns at least one chunk; empty input yields one empty chunk.
pub fn chunk(text: &str, max_len: usize) -> Vec<Chunk> {
    let max_len = max_len.max(1);
    let mut chunks = Vec::new();
    // (text, char count) of the chunk being filled
    let mut current: Option<(String, usize)> = None;

    for line in text.split('\n') {
        let line_len = line.chars().count();

        if let Some((buf, len)) = current.as_mut() {
            if *len + 1 + line_len <= max_len {
                buf.push('\n');
                buf.push_str(line);
                *len += 1 + line_len;
                continue;
            }
        }
        if let Some((buf, _)) = current.take() {
            chunks.push(Chunk {
                text: buf,
                line_break_after: true,
            });
        }

        if line_len <= max_len {
            current = Some((line.to_string(), line_len));
            continue;
        }

        let chars: Vec<char> = line.chars().collect();
        let mut pieces = chars.chunks(max_len).peekable();
        while let Some(piece) = pieces.next() {
            let piece: String = piece.iter().collect();
            if pieces.peek().is_some() {
                chunks.push(Chunk {
                    text: piece,
                    line_break_after: false,
                });
            } else {
                let len = piece.chars().count();
                current = Some((piece, len));
            }
        }
    }

    if let Some((buf, _)) = current {
        chunks.push(Chunk {
            text: buf,
            line_break_after: false,
        });
    }
    chunks
}

/// Reassemble chunks into the original text.
pub fn rejoin(chunks: &[Chunk]) -> String {
    let mut text = String::new();
    for chunk in chunks {
        text.push_str(&chunk.text);
        if chunk.line_break_after {
            text.push('\n');
        }
    }
    text
}

/// Wrap each chunk in a `<Message>` inside a TwiML `<Response>`.
pub fn encode(chunks: &[Chunk]) -> String {
    let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?><Response>"#);
    for chunk in chunks {
        xml.push_str("<Message>");
        xml.push_str(&escape(chunk.text.as_str()));
        xml.push_str("</Message>");
    }
    xml.push_str("</Response>");
    xml
}

/// Chunk and encode a reply in one step.
pub fn encode_reply(text: &str, max_len: usize) -> String {
    encode(&chunk(text, max_len))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(chunks: &[Chunk]) -> Vec<&str> {
        chunks.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn short_text_is_one_chunk() {
        let chunks = chunk("1. Kharif\n2. Rabi", 100);
        assert_eq!(texts(&chunks), ["1. Kharif\n2. Rabi"]);
        assert!(!chunks[0].line_break_after);
    }

    #[test]
    fn empty_input_yields_one_empty_chunk() {
        let chunks = chunk("", 10);
        assert_eq!(texts(&chunks), [""]);
        assert_eq!(rejoin(&chunks), "");
    }

    #[test]
    fn packs_lines_greedily() {
        let chunks = chunk("aaaa\nbbbb\ncccc\ndd", 9);
        assert_eq!(texts(&chunks), ["aaaa\nbbbb", "cccc\ndd"]);
        assert!(chunks[0].line_break_after);
    }

    #[test]
    fn long_line_is_hard_split() {
        let chunks = chunk("ab\nabcdefghij\nxy", 4);
        assert_eq!(texts(&chunks), ["ab", "abcd", "efgh", "ij", "xy"]);
        assert_eq!(
            chunks.iter().map(|c| c.line_break_after).collect::<Vec<_>>(),
            [true, false, false, true, false]
        );
        assert_eq!(rejoin(&chunks), "ab\nabcdefghij\nxy");
    }

    #[test]
    fn limits_count_characters_not_bytes() {
        let text = "गेहूं\nचना";
        let chunks = chunk(text, 9);
        assert_eq!(chunks.len(), 1);
        assert_eq!(rejoin(&chunk(text, 3)), text);
    }

    #[test]
    fn every_chunk_fits_and_rejoins() {
        let text = "line one\n\n\nline two is longer than the limit\n\ntrailing\n";
        for max in 1..=40 {
            let chunks = chunk(text, max);
            assert!(chunks.iter().all(|c| c.text.chars().count() <= max), "max {max}");
            assert_eq!(rejoin(&chunks), text, "max {max}");
        }
    }

    #[test]
    fn zero_limit_is_treated_as_one() {
        let chunks = chunk("abc", 0);
        assert_eq!(texts(&chunks), ["a", "b", "c"]);
    }

    #[test]
    fn encode_escapes_reserved_characters() {
        let xml = encode(&chunk(r#"Crop "Tom & Jerry's" <x>"#, 100));
        assert_eq!(
            xml,
            r#"<?xml version="1.0" encoding="UTF-8"?><Response><Message>Crop &quot;Tom &amp; Jerry&apos;s&quot; &lt;x&gt;</Message></Response>"#
        );
    }

    #[test]
    fn encode_one_message_per_chunk() {
        let xml = encode_reply("aaaa\nbbbb", 4);
        assert_eq!(xml.matches("<Message>").count(), 2);
    }
}
