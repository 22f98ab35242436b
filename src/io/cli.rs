//! Command-line interface for batch converting images into map-art blueprints

use crate::catalog::palette::build_palette;
use crate::catalog::rules::CatalogRules;
use crate::imaging::resample::load_source;
use crate::io::configuration::{
    DEFAULT_LANG_FILE, DEFAULT_TEXTURES_DIR, PREVIEW_FILE, SUPPORTED_EXTENSIONS,
    TRANSLATION_NAMESPACE,
};
use crate::io::error::{MapArtError, Result, invalid_parameter};
use crate::io::export::{output_dir_for, save_outputs};
use crate::io::progress::{ProgressManager, Stage};
use crate::io::translation::{SuffixDescriptors, TranslationTable};
use crate::pipeline::converter::{Conversion, Converter};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "mapart")]
#[command(
    author,
    version,
    about = "Convert images into block map-art blueprints with texture previews"
)]
/// Command-line arguments for the map-art converter
pub struct Cli {
    /// Input image file or directory of images
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Blueprint width in blocks; height follows the aspect ratio
    #[arg(short, long)]
    pub width: u32,

    /// Directory of block textures used for the palette and preview
    #[arg(short, long, default_value = DEFAULT_TEXTURES_DIR)]
    pub textures: PathBuf,

    /// Language file with localized block names
    #[arg(short, long, default_value = DEFAULT_LANG_FILE)]
    pub lang: PathBuf,

    /// JSON file overriding the whitelist, blacklist or swatch size
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Root folder for outputs (defaults to beside each input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Convert even if an output folder already holds a preview
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing outputs should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Catalog rules from `--rules`, or the built-in lists
    ///
    /// # Errors
    ///
    /// Returns an error if the rules file cannot be read or parsed
    pub fn catalog_rules(&self) -> Result<CatalogRules> {
        self.rules
            .as_deref()
            .map_or_else(|| Ok(CatalogRules::default()), CatalogRules::from_json_file)
    }
}

/// Orchestrates batch conversion with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Build the palette once, then convert every target image
    ///
    /// A failing image is logged and counted; the remaining images are
    /// still converted.
    ///
    /// # Errors
    ///
    /// Returns an error if the target or rules are invalid, the palette
    /// is empty, or any conversion failed
    pub fn process(&mut self) -> Result<()> {
        if self.cli.width == 0 {
            return Err(invalid_parameter(
                "width",
                &self.cli.width,
                &"width must be a positive number of blocks",
            ));
        }

        let files = self.collect_files()?;
        if files.is_empty() {
            tracing::info!("nothing to convert");
            return Ok(());
        }

        let rules = self.cli.catalog_rules()?;
        let palette = Arc::new(build_palette(&self.cli.textures, &rules)?);
        let translations = TranslationTable::load(&self.cli.lang, TRANSLATION_NAMESPACE);
        let suffixes = SuffixDescriptors::default();
        let mut converter = Converter::new(palette, &self.cli.textures, rules.swatch_size);

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut failed = 0;
        for file in &files {
            let start_time = Instant::now();
            if let Some(ref pm) = self.progress_manager {
                pm.start_file(file);
            }

            let result = self.process_file(file, &mut converter, &translations, &suffixes);
            if let Err(ref e) = result {
                failed += 1;
                tracing::error!(input = %file.display(), error = %e, "conversion failed");
            } else {
                tracing::info!(
                    input = %file.display(),
                    elapsed_ms = start_time.elapsed().as_millis() as u64,
                    "conversion finished"
                );
            }

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_file(result.is_ok());
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        let stats = converter.compositor().cache_stats();
        tracing::debug!(
            hits = stats.hits,
            misses = stats.misses,
            missing = stats.missing,
            "texture cache"
        );

        if failed > 0 {
            return Err(MapArtError::ConversionFailures {
                failed,
                total: files.len(),
            });
        }
        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_supported_image(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"unsupported image format",
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let read_error = |e| MapArtError::FileSystem {
                path: target.clone(),
                operation: "read input directory",
                source: e,
            };
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).map_err(read_error)? {
                let path = entry.map_err(read_error)?.path();
                if path.is_file() && is_supported_image(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let preview = self.output_dir(input_path).join(PREVIEW_FILE);
        if preview.exists() {
            tracing::info!(input = %input_path.display(), "skipping, output exists");
            false
        } else {
            true
        }
    }

    fn process_file(
        &self,
        input_path: &Path,
        converter: &mut Converter,
        translations: &TranslationTable,
        suffixes: &SuffixDescriptors,
    ) -> Result<()> {
        self.set_stage(Stage::Matching);
        let source = load_source(input_path)?;
        let blueprint = converter.match_blocks(&source, self.cli.width)?;

        for (name, count) in blueprint.material_counts() {
            tracing::debug!(block = %name, count, "material");
        }

        self.set_stage(Stage::Stitching);
        let preview = converter.render(&blueprint)?;

        self.set_stage(Stage::Saving);
        let conversion = Conversion { blueprint, preview };
        let output_dir = self.output_dir(input_path);
        save_outputs(&conversion, &output_dir, translations, suffixes)?;
        Ok(())
    }

    fn set_stage(&self, stage: Stage) {
        if let Some(ref pm) = self.progress_manager {
            pm.set_stage(stage);
        }
    }

    fn output_dir(&self, input_path: &Path) -> PathBuf {
        output_dir_for(input_path, self.cli.output.as_deref())
    }
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}
