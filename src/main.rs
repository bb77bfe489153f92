use anyhow::{bail, ensure, Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use std::{
    env,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use vrt2txt::vrt::extractor::{iter_vrt, FragmentStream, TagConfig};

struct Args {
    input_path: String,
    output_path: Option<String>,
    config: TagConfig,
}

fn get_args() -> Result<Args> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optflag("p", "paragraphs", "input wraps sentences in paragraph tags");
    opts.optopt("", "sentence-tag", "name of the sentence tag", "TAG");
    opts.optopt("", "paragraph-tag", "name of the paragraph tag", "TAG");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    let input_path = matches
        .free
        .get(0)
        .context("path to a .vrt file or a directory of .vrt files is required")?
        .clone();
    let output_path = matches.free.get(1).map(|s| s.clone());

    let mut config = TagConfig::default();
    config.paragraphs = matches.opt_present("p");
    if let Some(tag) = matches.opt_str("sentence-tag") {
        config.sentence_tag = tag;
    }
    if let Some(tag) = matches.opt_str("paragraph-tag") {
        config.paragraph_tag = tag;
    }

    Ok(Args {
        input_path,
        output_path,
        config,
    })
}

enum TextOut {
    Stdout,
    Directory { root: PathBuf },
}

impl TextOut {
    fn init_directory(root: &str) -> Result<Self> {
        let root = PathBuf::from(root);
        fs::create_dir(&root).context("Failed to create output directory")?;

        Ok(Self::Directory { root })
    }

    // Writes the fragments one by one; the stream is never collected.
    fn save_corpus_txt(&self, file_stem: &str, fragments: FragmentStream) -> Result<()> {
        match &self {
            TextOut::Stdout => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                for fragment in fragments {
                    out.write_all(fragment?.as_bytes())?;
                }
            }

            TextOut::Directory { root } => {
                let txt_path = root.join(format!("{}.txt", file_stem));
                let mut out = BufWriter::new(File::create(&txt_path)?);
                for fragment in fragments {
                    out.write_all(fragment?.as_bytes())?;
                }
                out.flush()?;
            }
        }

        Ok(())
    }
}

fn main() -> Result<()> {
    let args = get_args()?;

    let input_path = PathBuf::from(&args.input_path);
    ensure!(
        input_path.exists(),
        "File not found: {}",
        input_path.display()
    );

    if input_path.is_dir() {
        let output_path = args
            .output_path
            .as_deref()
            .context("output directory is required when converting a directory")?;
        let out = TextOut::init_directory(output_path)
            .with_context(|| format!("Failed to create output directory: {}", output_path))?;

        let mut vrt_paths = Vec::new();
        for entry in fs::read_dir(&input_path)? {
            let path = entry?.path();
            if is_vrt_file(&path) {
                vrt_paths.push(path);
            }
        }
        vrt_paths.sort();
        ensure!(
            !vrt_paths.is_empty(),
            "No .vrt files found in: {}",
            input_path.display()
        );

        println!("Processing corpus files...");

        let pb = create_progress_bar(vrt_paths.len() as u64);
        for path in vrt_paths.iter().progress_with(pb) {
            convert_file(path, &out, &args.config)
                .with_context(|| format!("Failed to convert: {}", path.display()))?;
        }

        println!("Finished.");
    } else {
        let out = match &args.output_path {
            Some(output_path) => TextOut::init_directory(output_path)
                .with_context(|| format!("Failed to create output directory: {}", output_path))?,
            None => TextOut::Stdout,
        };

        convert_file(&input_path, &out, &args.config)
            .with_context(|| format!("Failed to convert: {}", input_path.display()))?;
    }

    Ok(())
}

fn is_vrt_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|extension| extension.to_str())
            .map_or(false, |extension| extension.eq_ignore_ascii_case("vrt"))
}

fn convert_file(path: &Path, out: &TextOut, config: &TagConfig) -> Result<()> {
    let bytes = fs::read(path)?;
    // Strips a BOM and replaces invalid sequences.
    let contents = encoding_rs::UTF_8.decode(&bytes).0;

    let fragments = iter_vrt(&contents, config)?;

    let file_stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .context("Invalid file name")?;

    out.save_corpus_txt(file_stem, fragments)
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
