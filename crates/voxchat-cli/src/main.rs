//! voxchat CLI - ask a question by voice, get an LLM answer

use clap::{Parser, Subcommand};
use voxchat_core::ExecutionMode;

mod app;
mod commands;

#[derive(Parser)]
#[command(name = "voxchat")]
#[command(version)]
#[command(about = "Transcribe an audio question and answer it with an LLM", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (show request and timing details)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Transcribe an audio file and print the model's answer
    Run {
        /// Path to the audio file (WAV 16kHz mono for local mode)
        audio_file_path: String,

        /// Where transcription runs
        #[arg(long, default_value = "remote")]
        transcribe_mode: ExecutionMode,

        /// Where answering runs
        #[arg(long, default_value = "remote")]
        answer_mode: ExecutionMode,

        /// Path to a whisper.cpp model file (local transcription)
        #[arg(long)]
        whisper_model: Option<String>,

        /// Local LLM invocation, space-separated (e.g. "ollama run mistral")
        #[arg(long)]
        llm_command: Option<String>,

        /// Wall-clock bound on local answering, in seconds
        #[arg(long, default_value = "300")]
        timeout: u64,
    },
}

#[tokio::main]
async fn main() {
    // Pick up OPENAI_API_KEY and friends from a .env file if present
    dotenvy::dotenv().ok();

    // Usage problems (missing audio path, bad flags) exit 1 like every
    // other failure, not clap's default 2.
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        use clap::error::ErrorKind;
        let _ = e.print();
        match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => std::process::exit(0),
            _ => std::process::exit(1),
        }
    });
    voxchat_core::set_verbose(cli.verbose);

    match cli.command {
        Commands::Run {
            audio_file_path,
            transcribe_mode,
            answer_mode,
            whisper_model,
            llm_command,
            timeout,
        } => {
            let options = app::RunOptions {
                transcribe_mode,
                answer_mode,
                whisper_model,
                llm_command,
                timeout_secs: timeout,
            };
            if let Err(e) = commands::run::run(&audio_file_path, options).await {
                eprintln!("Error: {e:#}");
                std::process::exit(1);
            }
        }
    }
}
