use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use comment_song::{
    azure_openai::AzureOpenAIClient,
    config::{AzureOpenAIConfig, SpeechConfig, TextAnalyticsConfig, YouTubeConfig},
    sentiment::azure::TextAnalyticsClient,
    tracing::init_tracing_subscriber,
    tts::azure_speech::AzureSpeechClient,
    yt::{client::YouTubeClient, CommentOrder, DEFAULT_MAX_RESULTS},
    AudioOutcome, PromptStrategy, SongPipelineBuilder,
};

#[derive(Parser)]
#[command(
    name = "comment-song",
    about = "Writes a song from the comments of a YouTube video"
)]
struct Cli {
    /// YouTube video ID, prompted for when omitted
    #[arg(long)]
    video_id: Option<String>,

    /// YouTube Data API key
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    youtube_api_key: Option<String>,

    /// Azure AI Language endpoint
    #[arg(long, env = "TEXT_ANALYTICS_ENDPOINT")]
    text_analytics_endpoint: Option<String>,

    /// Azure AI Language key
    #[arg(long, env = "TEXT_ANALYTICS_KEY", hide_env_values = true)]
    text_analytics_key: Option<String>,

    /// Azure OpenAI key
    #[arg(long, env = "AZURE_OPENAI_KEY", hide_env_values = true)]
    azure_openai_key: Option<String>,

    /// Azure OpenAI resource endpoint
    #[arg(long, env = "AZURE_OPENAI_ENDPOINT")]
    azure_openai_endpoint: Option<String>,

    /// Chat model deployment name
    #[arg(long, env = "AZURE_OPENAI_MODEL")]
    azure_openai_model: Option<String>,

    /// Azure OpenAI API version
    #[arg(long, env = "AZURE_OPENAI_VERSION", default_value = AzureOpenAIConfig::DEFAULT_API_VERSION)]
    azure_openai_version: String,

    /// Sampling temperature for the lyrics
    #[arg(long, env = "AZURE_OPENAI_TEMPERATURE", default_value_t = AzureOpenAIConfig::DEFAULT_TEMPERATURE)]
    temperature: f32,

    /// Token limit for the lyrics
    #[arg(long, env = "AZURE_OPENAI_MAX_TOKENS", default_value_t = AzureOpenAIConfig::DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Azure Speech key
    #[arg(long, env = "AZURE_SPEECH_KEY", hide_env_values = true)]
    azure_speech_key: Option<String>,

    /// Azure Speech region, e.g. westeurope
    #[arg(long, env = "AZURE_SPEECH_REGION")]
    azure_speech_region: Option<String>,

    /// Number of comment threads to fetch
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS, value_parser = clap::value_parser!(u32).range(1..=100))]
    max_results: u32,

    /// Comment ordering
    #[arg(long, value_enum, default_value_t = CommentOrder::Relevance)]
    order: CommentOrder,

    /// How comments are worked into the lyrics prompt
    #[arg(long, value_enum, default_value_t = PromptStrategy::VerbatimQuotes)]
    prompt_strategy: PromptStrategy,

    /// Also sing the lyrics into this MP3 file
    #[arg(long)]
    audio_output: Option<PathBuf>,
}

fn prompt_video_id() -> anyhow::Result<String> {
    print!("Enter YouTube video ID: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;

    let video_id = line.trim();
    anyhow::ensure!(!video_id.is_empty(), "No video ID given");
    Ok(video_id.to_string())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // every client is configured up front so missing credentials fail before any prompt
    let youtube = YouTubeClient::new(YouTubeConfig::new(cli.youtube_api_key)?);
    let text_analytics = TextAnalyticsClient::new(TextAnalyticsConfig::new(
        cli.text_analytics_endpoint,
        cli.text_analytics_key,
    )?);
    let openai_config = AzureOpenAIConfig::new(
        cli.azure_openai_key,
        cli.azure_openai_endpoint,
        cli.azure_openai_model,
    )?
    .with_api_version(cli.azure_openai_version)
    .with_temperature(cli.temperature)
    .with_max_tokens(cli.max_tokens);
    let lyricist = AzureOpenAIClient::new(openai_config).with_strategy(cli.prompt_strategy);
    let speech = cli
        .audio_output
        .is_some()
        .then(|| {
            SpeechConfig::new(cli.azure_speech_key, cli.azure_speech_region)
                .map(AzureSpeechClient::new)
        })
        .transpose()?;

    let mut builder = SongPipelineBuilder::new()
        .comment_source(youtube)
        .sentiment_service(text_analytics)
        .lyrics_generator(lyricist)
        .speech_synthesizer(speech)
        .max_results(cli.max_results)
        .order(cli.order);
    if let Some(path) = cli.audio_output {
        builder = builder.audio_output(path);
    }
    let pipeline = builder.build();

    let video_id = match cli.video_id {
        Some(id) => id,
        None => prompt_video_id()?,
    };

    let video = pipeline.fetch_video(&video_id).await?;
    println!("\nVideo Details:");
    println!("Title: {}", video.snippet.title);
    println!(
        "Views: {}",
        video.statistics.view_count.as_deref().unwrap_or("hidden")
    );

    println!("\nFetching comments...");
    let threads = pipeline.fetch_comments(&video_id).await?;

    println!("\nAnalyzing sentiment of {} comments...", threads.len());
    let report = pipeline.classify(&threads).await?;
    for comment in &report.comments {
        let scores = &comment.confidence_scores;
        println!("\nComment by {}:", comment.author);
        println!("{}", comment.text);
        println!(
            "Sentiment: {} (positive: {:.2}, neutral: {:.2}, negative: {:.2})",
            comment.sentiment, scores.positive, scores.neutral, scores.negative
        );
    }
    for failure in &report.failed_batches {
        println!(
            "\nSkipped batch {} ({} comments): {}",
            failure.batch, failure.size, failure.reason
        );
    }

    println!("\nSentiment Summary:");
    for (sentiment, count) in report.counts.iter() {
        println!("{sentiment}: {count}");
    }
    println!("Dominant sentiment: {}", report.counts.dominant());

    println!("\nGenerating lyrics...");
    let lyrics = pipeline.compose(&report).await?;
    let banner = "=".repeat(50);
    println!("\n{banner}\nGENERATED SONG LYRICS\n{banner}\n");
    println!("{lyrics}");

    match pipeline.narrate(&lyrics).await {
        Some(AudioOutcome::Completed(path)) => {
            println!("\nAudio generated successfully: {}", path.display())
        }
        Some(AudioOutcome::Canceled { reason, details }) => {
            println!("\nSpeech synthesis canceled: {reason}");
            if let Some(details) = details {
                println!("Error details: {details}");
            }
        }
        Some(AudioOutcome::Failed(reason)) => println!("\nError generating audio: {reason}"),
        None => {}
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    if let Err(e) = run(cli).await {
        tracing::error!(error = ?e, "Pipeline failed");
        println!("An error occurred: {e:#}");
    }

    Ok(())
}
