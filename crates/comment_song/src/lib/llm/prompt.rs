use itertools::Itertools;

use crate::sentiment::{Comment, Sentiment, SentimentCounts};

/// How comments are embedded into the lyrics prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PromptStrategy {
    /// Every comment, with instructions to reuse its exact phrases
    #[default]
    VerbatimQuotes,
    /// The first few comments as examples, asking for the overall themes
    ThematicSummary,
}

impl PromptStrategy {
    /// Comments shown to the model in thematic mode.
    pub const THEMATIC_EXAMPLES: usize = 3;

    pub fn build_prompt(
        &self,
        comments: &[Comment],
        counts: &SentimentCounts,
        dominant: Sentiment,
    ) -> String {
        let analysis = sentiment_section(counts, dominant);
        match self {
            PromptStrategy::VerbatimQuotes => {
                let all_comments = comments
                    .iter()
                    .map(|c| format!("- {} ({})", c.text, c.sentiment))
                    .join("\n");

                format!(
                    "Based on the following YouTube comments and their sentiment analysis, write a song that incorporates the actual comments and captures the overall mood.

{analysis}

All Comments (use these exact phrases in your lyrics):
{all_comments}

Please write a song with:
1. A catchy chorus that reflects the dominant sentiment and uses actual phrases from the comments
2. At least two verses that incorporate exact quotes from the comments
3. A poetic style that matches the overall mood
4. Clear separation between chorus and verses
5. IMPORTANT: Use the exact phrases from the comments, but you can:
   - Split them into different lines
   - Repeat key phrases
   - Combine parts of different comments
   - Add connecting words to make it flow

Format the output with clear section headers (CHORUS, VERSE 1, VERSE 2, etc.)."
                )
            }
            PromptStrategy::ThematicSummary => {
                let examples = comments
                    .iter()
                    .take(Self::THEMATIC_EXAMPLES)
                    .map(|c| format!("- {}", c.text))
                    .join("\n");

                format!(
                    "Based on the following sentiment analysis of YouTube comments, write a song that captures the overall mood of the audience.

{analysis}

Example comments:
{examples}

Please write a song with:
1. A catchy chorus that reflects the dominant sentiment
2. At least two verses that explore the themes raised in the comments
3. A poetic style that matches the overall mood
4. Clear separation between chorus and verses

Format the output with clear section headers (CHORUS, VERSE 1, VERSE 2, etc.)."
                )
            }
        }
    }
}

fn sentiment_section(counts: &SentimentCounts, dominant: Sentiment) -> String {
    format!(
        "Sentiment Analysis:
- Positive comments: {}
- Neutral comments: {}
- Negative comments: {}
- Mixed sentiment comments: {}
Dominant sentiment: {dominant}",
        counts.positive, counts.neutral, counts.negative, counts.mixed
    )
}
