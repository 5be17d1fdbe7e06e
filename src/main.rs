use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod analysis;
mod batch;
mod oracle;
mod output;
mod report;
mod resolver;
mod script;
mod stats;

use analysis::Analyzer;
use batch::{render_summary, BatchProcessor};
use oracle::LinguaOracle;
use output::{OutputMode, OutputWriter};
use report::ReportComposer;

#[derive(Parser)]
#[command(name = "lingolens")]
#[command(about = "Detect languages and compute text statistics", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    plain: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a piece of text (argument or stdin)
    Analyze {
        /// Text to analyze; reads stdin when omitted
        text: Option<String>,

        /// Show the full multi-section report
        #[arg(short, long)]
        detailed: bool,

        /// Entries kept in the frequency tables
        #[arg(long, default_value = "10")]
        top_k: usize,

        /// Second-language probability above which text counts as multilingual
        #[arg(long, default_value = "0.15")]
        threshold: f64,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Analyze the contents of a file
    File {
        /// Path to the file
        path: PathBuf,

        /// Entries kept in the frequency tables
        #[arg(long, default_value = "10")]
        top_k: usize,

        /// Second-language probability above which text counts as multilingual
        #[arg(long, default_value = "0.15")]
        threshold: f64,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Detect languages across every text file in a directory
    Batch {
        /// Directory to scan recursively
        dir: PathBuf,

        /// File extensions to include (default: txt, md, csv, log, json)
        #[arg(short, long)]
        ext: Vec<String>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Run the multi-language detection demo
    Demo,

    /// List supported languages grouped by region
    Languages,
}

/// Demo inputs with the language a correct detector should name.
const DEMO_SAMPLES: &[(&str, &str)] = &[
    ("Hello, how are you today? This is a sample English text.", "English"),
    ("Bonjour, comment allez-vous? Ceci est un exemple de texte français.", "French"),
    ("Hola, ¿cómo estás? Este es un texto de ejemplo en español.", "Spanish"),
    ("Guten Tag, wie geht es Ihnen? Dies ist ein deutscher Beispieltext.", "German"),
    ("Ciao, come stai? Questo è un testo di esempio in italiano.", "Italian"),
    ("Olá, como você está? Este é um texto de exemplo em português.", "Portuguese"),
    ("Привет, как дела? Это пример текста на русском языке.", "Russian"),
    ("こんにちは、お元気ですか？これは日本語のサンプルテキストです。", "Japanese"),
    ("你好，你好吗？这是一个中文示例文本。", "Chinese"),
    ("안녕하세요, 어떻게 지내세요? 이것은 한국어 샘플 텍스트입니다.", "Korean"),
    ("مرحبا، كيف حالك؟ هذا نص عربي للتجربة.", "Arabic"),
    ("नमस्ते, आप कैसे हैं? यह हिंदी में एक नमूना पाठ है।", "Hindi"),
    ("Hallo, hoe gaat het? Dit is een Nederlandse voorbeeldtekst.", "Dutch"),
    ("Hej, hur mår du? Det här är en svensk exempeltext.", "Swedish"),
    ("Cześć, jak się masz? To jest przykładowy polski tekst.", "Polish"),
    ("Merhaba, nasılsın? Bu bir Türkçe örnek metindir.", "Turkish"),
    ("Xin chào, bạn khỏe không? Đây là văn bản mẫu tiếng Việt.", "Vietnamese"),
    ("สวัสดี คุณเป็นอย่างไรบ้าง? นี่คือข้อความตัวอย่างภาษาไทย", "Thai"),
    ("Halo, apa kabar? Ini adalah contoh teks bahasa Indonesia.", "Indonesian"),
    ("שלום, מה שלומך? זהו טקסט לדוגמה בעברית.", "Hebrew"),
    ("Γεια σου, πώς είσαι; Αυτό είναι ένα ελληνικό δείγμα κειμένου.", "Greek"),
    ("Ahoj, jak se máš? Toto je ukázkový český text.", "Czech"),
    ("Здравей, как си? Това е примерен български текст.", "Bulgarian"),
    ("Kamusta ka? Ito ay isang halimbawang teksto sa Tagalog.", "Tagalog"),
    ("Habari, habari gani? Huu ni mfano wa maandishi ya Kiswahili.", "Swahili"),
];

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mode = if cli.plain {
        OutputMode::Plain
    } else {
        OutputMode::auto()
    };

    match cli.command {
        Commands::Analyze {
            text,
            detailed,
            top_k,
            threshold,
            format,
        } => {
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            if text.trim().is_empty() {
                anyhow::bail!("no text to analyze");
            }

            let oracle = load_oracle();
            let analyzer = Analyzer::new(&oracle)
                .with_top_k(top_k)
                .with_threshold(threshold);
            let analysis = analyzer.analyze(&text);

            if format == "json" || mode == OutputMode::Json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                let composer = ReportComposer::new(mode.colored());
                if detailed {
                    println!("{}", composer.compose(&analysis));
                } else {
                    println!("{}", composer.quick_summary(&text, &analysis));
                }
            }
            Ok(())
        }

        Commands::File {
            path,
            top_k,
            threshold,
            format,
        } => {
            let writer = OutputWriter::new(mode);
            let bytes = fs::read(&path)
                .map_err(|e| anyhow::anyhow!("could not read {}: {}", path.display(), e))?;
            let text = String::from_utf8_lossy(&bytes).into_owned();
            writer.success(&format!(
                "File loaded: {} ({} characters)",
                path.display(),
                text.chars().count()
            ));

            let oracle = load_oracle();
            let analyzer = Analyzer::new(&oracle)
                .with_top_k(top_k)
                .with_threshold(threshold);
            let analysis = analyzer.analyze(&text);

            if format == "json" || mode == OutputMode::Json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                println!("{}", ReportComposer::new(mode.colored()).compose(&analysis));
            }
            Ok(())
        }

        Commands::Batch { dir, ext, format } => {
            let writer = OutputWriter::new(mode);
            info!("Scanning directory: {}", dir.display());

            let oracle = load_oracle();
            let processor = BatchProcessor::new(&oracle).with_extensions(ext);
            let summary = processor.process(&dir)?;

            if format == "json" || mode == OutputMode::Json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                if summary.unreadable > 0 {
                    writer.warn(&format!("{} files could not be read", summary.unreadable));
                }
                writer.section("BATCH PROCESSING SUMMARY");
                println!("{}", render_summary(&summary));
            }
            Ok(())
        }

        Commands::Demo => {
            run_demo(mode);
            Ok(())
        }

        Commands::Languages => {
            print_languages(mode);
            Ok(())
        }
    }
}

fn load_oracle() -> LinguaOracle {
    info!("Loading language models...");
    LinguaOracle::new()
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

fn run_demo(mode: OutputMode) {
    let writer = OutputWriter::new(mode);
    writer.section(&format!(
        "MULTI-LANGUAGE DETECTION DEMO ({} languages)",
        DEMO_SAMPLES.len()
    ));

    let oracle = load_oracle();
    let analyzer = Analyzer::new(&oracle);
    let mut correct = 0usize;

    for (text, expected) in DEMO_SAMPLES {
        let analysis = analyzer.analyze(text);
        let (detected, confidence) = match &analysis.language {
            Some(language) => (language.name.clone(), language.confidence * 100.0),
            None => ("Unknown".to_string(), 0.0),
        };

        let hit = detected.to_lowercase().contains(&expected.to_lowercase());
        if hit {
            correct += 1;
        }

        let line = format!(
            "{:<12} → {:<22} ({:.1}%)",
            expected, detected, confidence
        );
        if hit {
            writer.success(&line);
        } else {
            writer.error(&line);
        }
    }

    let accuracy = correct as f64 / DEMO_SAMPLES.len() as f64 * 100.0;
    println!();
    writer.kv(
        "Results",
        &format!(
            "{}/{} correct ({:.1}% accuracy)",
            correct,
            DEMO_SAMPLES.len(),
            accuracy
        ),
    );
}

fn print_languages(mode: OutputMode) {
    let writer = OutputWriter::new(mode);
    writer.section(&format!(
        "SUPPORTED LANGUAGES ({} total)",
        resolver::supported_language_count()
    ));

    for (group, codes) in resolver::LANGUAGE_GROUPS {
        if mode.colored() {
            println!("{}", format!("{} Languages:", group).cyan());
        } else {
            println!("{} Languages:", group);
        }
        let names: Vec<String> = codes.iter().map(|code| resolver::language_name(code)).collect();
        for row in names.chunks(4) {
            let cells: Vec<String> = row.iter().map(|name| format!("{:<18}", name)).collect();
            println!("  {}", cells.join(" | "));
        }
        println!();
    }
}
