use itertools::Itertools;

const PROSODY_RATE: &str = "0.9";
const LINE_BREAK: &str = "500ms";

/// Builds the SSML script for `lyrics`: every non-blank line is slowed down
/// slightly and followed by a fixed pause, all inside a single voice envelope.
pub fn create_ssml(lyrics: &str, voice_name: &str) -> String {
    let lines = lyrics
        .split("\n\n")
        .filter(|section| !section.trim().is_empty())
        .flat_map(|section| section.split('\n'))
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            format!(
                r#"<prosody rate="{PROSODY_RATE}">{}</prosody><break time="{LINE_BREAK}"/>"#,
                escape(line)
            )
        })
        .join(" ");

    format!(
        r#"<speak version="1.0" xmlns="http://www.w3.org/2001/10/synthesis" xml:lang="en-US"><voice name="{voice_name}">{lines}</voice></speak>"#
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOICE: &str = "en-US-AriaNeural";

    #[test]
    fn test_blank_lines_are_dropped() {
        let ssml = create_ssml("line one\n\nline two\nline three", VOICE);

        assert_eq!(
            ssml,
            concat!(
                r#"<speak version="1.0" xmlns="http://www.w3.org/2001/10/synthesis" xml:lang="en-US">"#,
                r#"<voice name="en-US-AriaNeural">"#,
                r#"<prosody rate="0.9">line one</prosody><break time="500ms"/> "#,
                r#"<prosody rate="0.9">line two</prosody><break time="500ms"/> "#,
                r#"<prosody rate="0.9">line three</prosody><break time="500ms"/>"#,
                r#"</voice></speak>"#
            )
        );
        assert_eq!(ssml.matches("<speak").count(), 1);
        assert_eq!(ssml.matches("<voice").count(), 1);
    }

    #[test]
    fn test_whitespace_only_sections_and_lines() {
        let ssml = create_ssml("CHORUS\n   \n\n\n\n  \n\nVERSE 1\n", VOICE);

        assert_eq!(ssml.matches("<prosody").count(), 2);
        assert_eq!(ssml.matches(r#"<break time="500ms"/>"#).count(), 2);
        let chorus = ssml.find(">CHORUS<").unwrap();
        let verse = ssml.find(">VERSE 1<").unwrap();
        assert!(chorus < verse);
    }

    #[test]
    fn test_empty_lyrics_keep_the_envelope() {
        let ssml = create_ssml("\n\n", VOICE);
        assert!(ssml.ends_with(r#"<voice name="en-US-AriaNeural"></voice></speak>"#));
        assert!(!ssml.contains("<prosody"));
    }

    #[test]
    fn test_markup_characters_are_escaped() {
        let ssml = create_ssml("rock & roll <3", VOICE);
        assert!(ssml.contains(r#"<prosody rate="0.9">rock &amp; roll &lt;3</prosody>"#));
    }
}
