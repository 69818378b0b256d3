use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use pdf_bujo::{ITALIC_FONT_FILE, JournalOptions, REGULAR_FONT_FILE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bujo", about = "Generate the bullet journal PDF", version)]
struct Cli {
    /// Directory holding EBGaramond-Regular.ttf and EBGaramond-Italic.ttf
    #[arg(long)]
    font_dir: Option<PathBuf>,

    /// Output PDF file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON options file (flags override its values)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reference PDF to compare page count and sizes against
    #[arg(long)]
    reference: Option<PathBuf>,

    /// Check page count and page size before saving
    #[arg(long)]
    verify: bool,
}

impl Cli {
    async fn options(&self) -> Result<JournalOptions> {
        let mut options = match &self.config {
            Some(path) => JournalOptions::load(path)
                .await
                .with_context(|| format!("loading {}", path.display()))?,
            None => JournalOptions::default(),
        };

        if let Some(dir) = &self.font_dir {
            options.regular_font = dir.join(REGULAR_FONT_FILE);
            options.italic_font = dir.join(ITALIC_FONT_FILE);
        }
        if let Some(output) = &self.output {
            options.output = output.clone();
        }
        if self.verify {
            options.verify_output = true;
        }
        if let Some(reference) = &self.reference {
            options.reference = Some(reference.clone());
        }

        Ok(options)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let options = cli.options().await?;

    let report = pdf_bujo::generate(&options).await?;
    println!("Bullet journal generated:");
    println!("  Pages: {}", report.pages);
    println!("  Primitives: {}", report.primitives);
    println!("  Links: {}", report.links);
    println!("  Size: {} bytes", report.bytes);
    println!("Saved → {}", report.output.display());

    if let Some(parity) = &report.parity {
        println!("Reference comparison:");
        println!(
            "  Pages: {} generated, {} reference",
            parity.generated_pages, parity.reference_pages
        );
        println!("  Size mismatches: {}", parity.size_mismatches.len());
    }

    Ok(())
}
