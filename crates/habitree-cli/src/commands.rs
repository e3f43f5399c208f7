//! One-shot subcommands. Each returns the text to print so it can be tested
//! without a terminal.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use habitree_engine::parsing::book_link::{
    Segment, parse_book_links, render_book_links, render_book_links_html, strip_book_links,
};
use habitree_engine::title::decompose_title;

pub const USAGE: &str = "\
Usage:
  habitree-cli title <title...>        split a book title into title and subtitle
  habitree-cli links <note-file>       list book links with byte offsets
  habitree-cli render <note-file> [--html]
                                       show a note as text and link segments
  habitree-cli strip <note-file>       replace book links with their labels
  habitree-cli view [notes-folder]     browse notes (folder defaults to config)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Title(String),
    Links(PathBuf),
    Render { path: PathBuf, html: bool },
    Strip(PathBuf),
    View(Option<PathBuf>),
    Help,
}

impl Command {
    /// Parses arguments without the program name.
    pub fn parse(args: &[String]) -> Result<Self> {
        let Some((name, rest)) = args.split_first() else {
            return Ok(Command::View(None));
        };

        let command = match (name.as_str(), rest) {
            ("help" | "-h" | "--help", _) => Command::Help,
            ("title", []) => bail!("title: missing <title>"),
            ("title", words) => Command::Title(words.join(" ")),
            ("links", [path]) => Command::Links(path.into()),
            ("render", [path]) => Command::Render {
                path: path.into(),
                html: false,
            },
            ("render", [a, b]) if a == "--html" || b == "--html" => {
                let path = if a == "--html" { b } else { a };
                Command::Render {
                    path: path.into(),
                    html: true,
                }
            }
            ("strip", [path]) => Command::Strip(path.into()),
            ("view", []) => Command::View(None),
            ("view", [path]) => Command::View(Some(path.into())),
            (other, _) if !matches!(other, "links" | "render" | "strip" | "view") => {
                bail!("unknown command '{other}'")
            }
            (other, _) => bail!("{other}: wrong number of arguments"),
        };
        Ok(command)
    }
}

pub fn title(text: &str) -> String {
    let parts = decompose_title(text);
    format!(
        "title:    {}\nsubtitle: {}\n",
        parts.main_title,
        parts.subtitle.as_deref().unwrap_or("(none)")
    )
}

pub fn links(content: &str) -> String {
    let mut out = String::new();
    for link in parse_book_links(content) {
        let _ = writeln!(
            out,
            "{}..{}\t{}\t{}",
            link.span.start,
            link.span.end,
            link.display_text,
            link.href()
        );
    }
    out
}

pub fn render(content: &str, html: bool) -> String {
    if html {
        return render_book_links_html(content);
    }

    let mut out = String::new();
    for segment in render_book_links(content) {
        let _ = match segment {
            Segment::Text(text) => writeln!(out, "text  {text:?}"),
            Segment::Link { display_text, .. } => writeln!(
                out,
                "link  {display_text:?} -> {}",
                segment.href().unwrap_or_default()
            ),
        };
    }
    out
}

pub fn strip(content: &str) -> String {
    strip_book_links(content)
}

pub fn read_note(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading note {}", path.display()))
}
