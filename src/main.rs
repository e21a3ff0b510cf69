use anyhow::Context as _;
use ayat_render::{BidiMode, FontContext, RenderConfig, ShapingOptions, VerseImageGenerator};
use ayat_wallpaper::{all_surahs, BatchDriver, CorpusCache, CorpusStore, DriverOptions, HttpProvider, SURAH_COUNT};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "ayat-wallpaper", version, about = "Generate one wallpaper per ayah of the Quran")]
struct Cli {
    /// Only generate these surahs (1-114). Defaults to all of them.
    #[arg(long = "surah", value_parser = clap::value_parser!(u32).range(1..=SURAH_COUNT as i64))]
    surahs: Vec<u32>,

    /// Keep wallpapers that already exist instead of re-rendering them.
    #[arg(long)]
    skip_existing: bool,

    /// How Arabic text is put into visual order.
    #[arg(long, value_enum, default_value_t = BidiChoice::Full)]
    bidi: BidiChoice,

    /// Keep vowel marks instead of stripping them before shaping.
    #[arg(long)]
    keep_harakat: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BidiChoice {
    /// Unicode bidirectional algorithm
    Full,
    /// Plain character reversal
    Reverse,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let font = FontContext::initialize_fonts().context("load wallpaper font")?;
    if !font.has_glyph('\u{FE8F}') {
        log::warn!(
            "Font {} has no Arabic presentation forms, Arabic text will not render",
            font.font_name
        );
    }

    let options = DriverOptions {
        shaping: ShapingOptions {
            bidi: match cli.bidi {
                BidiChoice::Full => BidiMode::Full,
                BidiChoice::Reverse => BidiMode::Reverse,
            },
            delete_harakat: !cli.keep_harakat,
        },
        skip_existing: cli.skip_existing,
        ..DriverOptions::default()
    };

    let provider = HttpProvider::new().context("build HTTP client")?;
    let store = CorpusStore::new(CorpusCache::default(), provider);
    let generator = VerseImageGenerator::new(font, RenderConfig::default());
    let mut driver = BatchDriver::new(generator, options);

    let chapters: Vec<u32> = if cli.surahs.is_empty() {
        all_surahs().collect()
    } else {
        cli.surahs
    };

    let summary = driver
        .run(&store, chapters)
        .context("wallpaper generation aborted")?;

    log::info!(
        "Done: {} wallpapers written to {}, {} skipped",
        summary.rendered,
        driver.options().output_dir.display(),
        summary.skipped
    );
    Ok(())
}
