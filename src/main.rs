//! Future You - terminal front-end.
//!
//! Walks the screen flow over stdin/stdout: registration, level selection,
//! one typed conversation per level with a live emotion feed, per-level
//! feedback, and the future-self prediction once all five levels are done.

use std::error::Error;
use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use future_you::adapters::emotion::{CameraEmotionSource, SimulatedEmotionSource};
use future_you::adapters::narrative::PooledNarrative;
use future_you::adapters::prediction::TemplatePrediction;
use future_you::adapters::speech::{ElevenLabsConfig, ElevenLabsSynthesizer, NullAudioSink};
use future_you::adapters::storage::FileStateStore;
use future_you::adapters::vision::{RemoteAnalyzerConfig, RemoteFrameAnalyzer, StaticFrameSource};
use future_you::application::{ProgressionService, Registration};
use future_you::config::AppConfig;
use future_you::domain::progression::{ProgressionError, Screen};
use future_you::domain::session::{
    script_for, InteractionMode, Level, SessionProgress, SessionRecord,
};
use future_you::domain::session::feedback::metric_insights;
use future_you::ports::{
    AudioSink, EmotionFeed, EmotionSource, SpeechSynthesizer, VoiceSettings,
};

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let store = Arc::new(FileStateStore::new(&config.storage.data_dir));
    let mut service = ProgressionService::restore_or_new(store).await?;

    let synthesizer = speech_synthesizer(&config);
    let sink = NullAudioSink::new();
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    loop {
        match service.state().screen() {
            Screen::Welcome => {
                println!("\n=== Future You ===");
                println!("Five guided conversations, one prediction of who you may become.");
                if prompt(&mut input, "Press Enter to begin... ").await?.is_none() {
                    break;
                }
                service.start()?;
            }

            Screen::Registration => {
                let Some(form) = read_registration(&mut input).await? else {
                    break;
                };
                if let Err(err) = service.register(form).await {
                    println!("{}", err);
                }
            }

            Screen::LevelSelect => {
                print_level_menu(&service);
                let Some(line) = prompt(&mut input, "Choose a level (q to quit): ").await? else {
                    break;
                };
                let line = line.trim();
                if line.eq_ignore_ascii_case("q") {
                    break;
                }
                match parse_level(line) {
                    Ok(level) => match service.select_level(level) {
                        Ok(()) => {}
                        Err(err @ ProgressionError::LevelLocked { .. }) => println!("{}", err),
                        Err(err) => return Err(err.into()),
                    },
                    Err(message) => println!("{}", message),
                }
            }

            Screen::Interaction => {
                let Some(record) =
                    run_interaction(&mut input, &service, &config, synthesizer.as_deref(), &sink)
                        .await?
                else {
                    break;
                };
                service.complete_session(record).await?;
            }

            Screen::Feedback => {
                print_feedback(&service);
                if prompt(&mut input, "Press Enter to continue... ").await?.is_none() {
                    break;
                }
                service.continue_from_feedback()?;
            }

            Screen::Prediction => {
                print_prediction(&service)?;
                let Some(answer) = prompt(&mut input, "Start over? [y/N]: ").await? else {
                    break;
                };
                if answer.trim().eq_ignore_ascii_case("y") {
                    service.restart().await?;
                } else {
                    break;
                }
            }
        }
    }

    println!("\nGoodbye.");
    Ok(())
}

/// Prints a prompt and reads one line; `None` means stdin closed.
async fn prompt(input: &mut Input, text: &str) -> Result<Option<String>, Box<dyn Error>> {
    print!("{}", text);
    std::io::stdout().flush()?;
    Ok(input.next_line().await?)
}

async fn read_registration(input: &mut Input) -> Result<Option<Registration>, Box<dyn Error>> {
    println!("\n--- Registration ---");
    let Some(name) = prompt(input, "Your name: ").await? else {
        return Ok(None);
    };
    let Some(age_line) = prompt(input, "Your age: ").await? else {
        return Ok(None);
    };
    let age = age_line.trim().parse::<u32>().unwrap_or(0);
    let Some(profession) = prompt(input, "Your profession: ").await? else {
        return Ok(None);
    };
    let Some(horizon_line) = prompt(input, "Years to predict (5/10/15/20): ").await? else {
        return Ok(None);
    };
    let horizon_years = horizon_line.trim().parse::<u32>().unwrap_or(0);

    Ok(Some(Registration {
        name: name.trim().to_string(),
        age,
        profession: profession.trim().to_string(),
        horizon_years,
    }))
}

fn parse_level(line: &str) -> Result<Level, String> {
    let number = line
        .parse::<u8>()
        .map_err(|_| format!("'{}' is not a level number", line))?;
    Level::try_new(number).map_err(|err| err.to_string())
}

fn print_level_menu(service: &ProgressionService) {
    let state = service.state();
    println!("\n--- Levels ---");
    for level in Level::all() {
        let script = script_for(level);
        let marker = if state.completed_levels().contains(&level) {
            "done"
        } else if state.is_available(level) {
            "open"
        } else {
            "locked"
        };
        println!("  {}. {:<22} [{}] {}", level, script.title, marker, script.duration);
    }
}

/// Runs one typed conversation. Returns `None` when stdin closed.
async fn run_interaction(
    input: &mut Input,
    service: &ProgressionService,
    config: &AppConfig,
    synthesizer: Option<&dyn SpeechSynthesizer>,
    sink: &NullAudioSink,
) -> Result<Option<SessionRecord>, Box<dyn Error>> {
    let mut session = service.interaction(InteractionMode::Conversation)?;
    let script = script_for(session.level());
    println!("\n=== Level {}: {} ===", session.level(), script.title);
    println!("{} ({})", script.description, script.duration);

    let feed = start_emotion_feed(config).await?;
    let narrative = PooledNarrative::conversation();

    let record = loop {
        let prompt_text = session.current_prompt();
        println!("\nAI: {}", prompt_text);
        speak(synthesizer, sink, prompt_text).await;

        let Some(answer) = prompt(input, "> ").await? else {
            feed.shutdown().await;
            return Ok(None);
        };
        session.observe(feed.latest());
        match session.advance(&answer, &narrative) {
            Ok(SessionProgress::NextPrompt(_)) => {}
            Ok(SessionProgress::Completed(record)) => break record,
            Err(err) => println!("{}", err),
        }
    };

    feed.shutdown().await;
    Ok(Some(record))
}

/// Starts the configured emotion source, degrading to the simulation when
/// the camera-backed source cannot be acquired.
async fn start_emotion_feed(config: &AppConfig) -> Result<EmotionFeed, Box<dyn Error>> {
    let source = emotion_source(config);
    match source.start().await {
        Ok(feed) => Ok(feed),
        Err(err) => {
            warn!(%err, "emotion source unavailable; continuing with simulated samples");
            let fallback = SimulatedEmotionSource::new(config.session.emotion_tick());
            Ok(fallback.start().await?)
        }
    }
}

fn emotion_source(config: &AppConfig) -> Arc<dyn EmotionSource> {
    match config.vision.api_key.as_deref().filter(|k| !k.is_empty()) {
        Some(key) => {
            let analyzer = RemoteFrameAnalyzer::new(
                RemoteAnalyzerConfig::new(key)
                    .with_base_url(config.vision.base_url.clone())
                    .with_timeout(config.vision.timeout()),
            );
            Arc::new(CameraEmotionSource::new(
                Arc::new(StaticFrameSource::new()),
                Arc::new(analyzer),
                config.vision.analysis_interval(),
            ))
        }
        None => Arc::new(SimulatedEmotionSource::new(config.session.emotion_tick())),
    }
}

fn speech_synthesizer(config: &AppConfig) -> Option<Arc<dyn SpeechSynthesizer>> {
    let key = config.speech.api_key.as_deref().filter(|k| !k.is_empty())?;
    let synthesizer = ElevenLabsSynthesizer::new(
        ElevenLabsConfig::new(key)
            .with_voice_id(config.speech.voice_id.clone())
            .with_base_url(config.speech.base_url.clone())
            .with_timeout(config.speech.timeout()),
    );
    Some(Arc::new(synthesizer))
}

/// Voices one prompt when synthesis is configured. Failures skip playback
/// and keep the conversation going.
async fn speak(synthesizer: Option<&dyn SpeechSynthesizer>, sink: &NullAudioSink, text: &str) {
    let Some(synthesizer) = synthesizer else {
        return;
    };
    match synthesizer.synthesize(text, &VoiceSettings::default()).await {
        Ok(clip) => match sink.play(clip).await {
            Ok(playback) => playback.finished().await,
            Err(err) => warn!(%err, "audio playback failed; skipping"),
        },
        Err(err) => warn!(%err, "speech synthesis failed; skipping playback"),
    }
}

fn print_feedback(service: &ProgressionService) {
    let Some(record) = service.state().displayed_record() else {
        return;
    };
    println!("\n--- Level {} feedback ---", record.level());
    println!("AI: {}", record.ai_response());
    println!("{}", record.feedback());
    for insight in metric_insights(record.emotions()) {
        println!(
            "  {:<13} {:>5.1}  [{}]  {}",
            insight.metric, insight.value, insight.grade, insight.insight
        );
    }
}

fn print_prediction(service: &ProgressionService) -> Result<(), Box<dyn Error>> {
    let prediction = service.prediction(&TemplatePrediction::new())?;
    let user = service.state().user();
    let horizon = user.map(|u| u.horizon().to_string()).unwrap_or_default();

    println!("\n=== Your future self, {} from now ===", horizon);
    println!("Career stage: {}", prediction.career_stage());
    println!("\nPersonality development:");
    for statement in prediction.personality_development() {
        println!("  - {}", statement);
    }
    println!("\nEmotional intelligence:\n  {}", prediction.emotional_intelligence());
    println!("\nGrowth roadmap:");
    for (index, step) in prediction.growth_roadmap().iter().enumerate() {
        println!("  {}. {}", index + 1, step);
    }
    println!("\nConfidence: {}", prediction.confidence_score());
    Ok(())
}
