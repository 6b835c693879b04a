//! Command-line front end.

use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::errors::AppError;
use crate::mood::classifier::{
    mood_from_image_class, mood_from_text_scores, LabelScore, IMAGE_CLASS_LABELS,
};
use crate::mood::Mood;
use crate::recommendations::types::{DEFAULT_CSV_PATH, DEFAULT_TRACKS_PER_LANGUAGE};
use crate::recommendations::{self, Preference, RecommendationRequest, Track};
use crate::spotify::{CatalogTrack, SpotifyClient, SpotifyCredentials};

/// moodtunes - music recommendations for how you feel
#[derive(Parser, Debug)]
#[command(name = "moodtunes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend tracks for a mood
    Recommend(RecommendArgs),

    /// Print the canonical form of a mood, or of a classifier's output
    Mood {
        /// Mood word(s), or the text that was classified when --scores is given
        text: Vec<String>,

        /// Text classifier scores as JSON, e.g. '[{"label":"joy","score":0.9}]'
        #[arg(long, value_name = "JSON", conflicts_with = "image_class")]
        scores: Option<String>,

        /// Facial classifier argmax index (0-6)
        #[arg(long, value_name = "INDEX")]
        image_class: Option<usize>,
    },

    /// Run a raw catalog search (useful for checking credentials)
    Search {
        query: String,

        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,

        #[command(flatten)]
        credentials: CredentialArgs,
    },
}

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Detected or described mood, e.g. "happy", "sadness"
    #[arg(short, long)]
    pub mood: String,

    /// Preferred language (repeatable; defaults to english)
    #[arg(short = 'l', long = "lang", value_name = "LANGUAGE")]
    pub languages: Vec<String>,

    /// Maximum tracks per language
    #[arg(short = 'n', long, default_value_t = DEFAULT_TRACKS_PER_LANGUAGE)]
    pub per_language: usize,

    /// Source to try first: "external" (Spotify, with dataset fallback) or "csv"
    #[arg(long, default_value = "external", value_name = "SOURCE")]
    pub prefer: Preference,

    /// Local track-feature dataset
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CSV_PATH)]
    pub csv: PathBuf,

    /// Seed for dataset sampling (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub credentials: CredentialArgs,
}

/// Explicit credentials; anything left out is read from the environment.
#[derive(Args, Debug, Default)]
pub struct CredentialArgs {
    /// Spotify client ID (overrides SPOTIPY_CLIENT_ID)
    #[arg(long)]
    pub client_id: Option<String>,

    /// Spotify client secret (overrides SPOTIPY_CLIENT_SECRET)
    #[arg(long)]
    pub client_secret: Option<String>,
}

impl CredentialArgs {
    pub fn resolve(&self) -> SpotifyCredentials {
        SpotifyCredentials {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
        }
        .with_fallback(SpotifyCredentials::from_env())
    }
}

impl Cli {
    /// Default log filter for the verbosity flags.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[derive(Serialize)]
struct RecommendationOutput<'a> {
    mood: &'a Mood,
    tracks: &'a [Track],
}

pub fn run(cli: &Cli) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Recommend(args) => run_recommend(args, &mut out),
        Command::Mood {
            text,
            scores,
            image_class,
        } => {
            let mood = resolve_mood(&text.join(" "), scores.as_deref(), *image_class)?;
            writeln!(out, "{}", mood)?;
            Ok(())
        }
        Command::Search {
            query,
            limit,
            credentials,
        } => {
            let client = SpotifyClient::new(&credentials.resolve())?;
            let tracks = client.search_tracks(query, *limit)?;
            write_catalog(&mut out, &tracks)
        }
    }
}

/// Mood from typed text, text-classifier scores, or a facial class index.
pub fn resolve_mood(
    text: &str,
    scores: Option<&str>,
    image_class: Option<usize>,
) -> Result<Mood, AppError> {
    if let Some(json) = scores {
        let scores: Vec<LabelScore> = serde_json::from_str(json)
            .map_err(|e| AppError::Input(format!("bad --scores JSON: {}", e)))?;
        return Ok(mood_from_text_scores(text, &scores));
    }

    if let Some(index) = image_class {
        return mood_from_image_class(index).ok_or_else(|| {
            AppError::Input(format!(
                "image class {} out of range (0-{})",
                index,
                IMAGE_CLASS_LABELS.len() - 1
            ))
        });
    }

    Ok(Mood::canonicalize(text))
}

fn run_recommend(args: &RecommendArgs, out: &mut impl Write) -> Result<(), AppError> {
    let mood = Mood::canonicalize(&args.mood);
    let request = RecommendationRequest::new(args.mood.clone(), args.languages.clone())
        .with_tracks_per_language(args.per_language)
        .with_preference(args.prefer)
        .with_csv_path(&args.csv);

    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    };

    let tracks = recommendations::recommend(&request, &args.credentials.resolve(), &mut *rng)?;

    if args.json {
        let body = serde_json::to_string_pretty(&RecommendationOutput {
            mood: &mood,
            tracks: &tracks,
        })?;
        writeln!(out, "{}", body)?;
        return Ok(());
    }

    write_tracks(out, &mood, &tracks)
}

/// Human-readable listing, one track per entry.
pub fn write_tracks(out: &mut impl Write, mood: &Mood, tracks: &[Track]) -> Result<(), AppError> {
    writeln!(out, "Detected mood: {}", mood)?;

    if tracks.is_empty() {
        writeln!(out, "No recommendations found for selected languages/mood.")?;
        return Ok(());
    }

    for (i, track) in tracks.iter().enumerate() {
        writeln!(
            out,
            "{:>2}. {} - {} [{}]",
            i + 1,
            track.track.as_deref().unwrap_or("Unknown"),
            track.artist.as_deref().unwrap_or("Unknown"),
            track.language
        )?;
        if let Some(url) = &track.preview_url {
            writeln!(out, "    preview: {}", url)?;
        }
        if let Some(url) = &track.album_image_url {
            writeln!(out, "    cover:   {}", url)?;
        }
    }
    Ok(())
}

fn write_catalog(out: &mut impl Write, tracks: &[CatalogTrack]) -> Result<(), AppError> {
    for track in tracks {
        writeln!(
            out,
            "{}  {} - {}",
            track.id.as_deref().unwrap_or("-"),
            track.name.as_deref().unwrap_or("Unknown"),
            track.artist_line()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(title: Option<&str>, preview: Option<&str>) -> Track {
        Track {
            track: title.map(str::to_string),
            artist: None,
            id: Some("id".to_string()),
            preview_url: preview.map(str::to_string),
            album_image_url: None,
            language: "hindi".to_string(),
        }
    }

    #[test]
    fn test_parse_recommend_args() {
        let cli = Cli::try_parse_from([
            "moodtunes", "-v", "recommend", "--mood", "Happy", "-l", "hindi", "-l", "english",
            "-n", "3", "--prefer", "csv", "--seed", "4",
        ])
        .unwrap();

        assert_eq!(cli.log_filter(), "info");
        match cli.command {
            Command::Recommend(args) => {
                assert_eq!(args.mood, "Happy");
                assert_eq!(args.languages, vec!["hindi", "english"]);
                assert_eq!(args.per_language, 3);
                assert_eq!(args.prefer, Preference::CsvOnly);
                assert_eq!(args.seed, Some(4));
                assert_eq!(args.csv, PathBuf::from(DEFAULT_CSV_PATH));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_preference() {
        let parsed = Cli::try_parse_from(["moodtunes", "recommend", "-m", "sad", "--prefer", "radio"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_explicit_credentials_win() {
        let args = CredentialArgs {
            client_id: Some("flag-id".to_string()),
            client_secret: Some("flag-secret".to_string()),
        };
        let creds = args.resolve();
        assert_eq!(creds.client_id(), Some("flag-id"));
        assert_eq!(creds.client_secret(), Some("flag-secret"));
    }

    #[test]
    fn test_write_tracks() {
        let mut buf = Vec::new();
        let tracks = vec![
            track(Some("Kesariya"), Some("https://p.scdn.co/k")),
            track(None, None),
        ];
        write_tracks(&mut buf, &Mood::Joy, &tracks).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Detected mood: joy\n"));
        assert!(text.contains(" 1. Kesariya - Unknown [hindi]"));
        assert!(text.contains("    preview: https://p.scdn.co/k"));
        assert!(text.contains(" 2. Unknown - Unknown [hindi]"));
    }

    #[test]
    fn test_resolve_mood_sources() {
        assert_eq!(resolve_mood("  Scared ", None, None).unwrap(), Mood::Fear);
        assert_eq!(resolve_mood("", None, Some(4)).unwrap(), Mood::Sadness);
        assert!(resolve_mood("", None, Some(9)).is_err());

        let json = r#"[{"label":"surprise","score":0.2},{"label":"anger","score":0.8}]"#;
        assert_eq!(resolve_mood("why is it late", Some(json), None).unwrap(), Mood::Anger);
        assert_eq!(resolve_mood("", Some(json), None).unwrap(), Mood::Neutral);
        assert!(matches!(
            resolve_mood("text", Some("not json"), None),
            Err(AppError::Input(_))
        ));
    }

    #[test]
    fn test_write_no_tracks() {
        let mut buf = Vec::new();
        write_tracks(&mut buf, &Mood::Neutral, &[]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("No recommendations found"));
    }
}
