//! Folio CLI - list, check and render showcase manifests.

use clap::{Parser, Subcommand, ValueEnum};
use folio_core::{html, render_html, Brick, BrickError, Rect, RecordingCanvas, Widget};
use folio_manifest::{ManifestError, Showcase};
use folio_widgets::ProjectDetail;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Render portfolio project detail panels from a showcase manifest")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the projects in a manifest
    List {
        /// Path to manifest file (.yaml, .yml, .toml, .json)
        manifest: PathBuf,
    },

    /// Check manifest validity
    Check {
        /// Path to manifest file
        manifest: PathBuf,
    },

    /// Render a project's detail panel
    Render {
        /// Path to manifest file
        manifest: PathBuf,

        /// Project to render, by name
        #[arg(short, long, conflicts_with = "index")]
        project: Option<String>,

        /// Project to render, by position in the manifest
        #[arg(short, long)]
        index: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,

        /// Viewport width in CSS pixels
        #[arg(long, default_value_t = 1280.0)]
        viewport: f32,

        /// Viewport height used for canvas renders
        #[arg(long, default_value_t = 900.0)]
        height: f32,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// What `render` produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Standalone HTML page with inline stylesheet
    Html,
    /// Stylesheet only
    Css,
    /// JSON draw commands from a canvas render
    Commands,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error(transparent)]
    Brick(#[from] BrickError),
    #[error("failed to serialize draw commands: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("no project named '{0}'")]
    ProjectNotFound(String),
    #[error("project index {index} out of range ({len} projects)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("viewport dimensions must be finite and positive (got {width}x{height})")]
    InvalidViewport { width: f32, height: f32 },
}

/// Options for one render.
#[derive(Debug, Clone)]
struct RenderOptions {
    project: Option<String>,
    index: Option<usize>,
    format: OutputFormat,
    viewport: f32,
    height: f32,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::List { manifest } => list(&manifest),
        Commands::Check { manifest } => check(&manifest),
        Commands::Render {
            manifest,
            project,
            index,
            format,
            viewport,
            height,
            output,
        } => {
            let options = RenderOptions {
                project,
                index,
                format,
                viewport,
                height,
            };
            render(&manifest, &options).and_then(|out| emit(&out, output.as_deref()))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn list(path: &Path) -> Result<(), CliError> {
    let showcase = Showcase::load(path)?;
    let mut stdout = std::io::stdout().lock();
    for line in list_lines(&showcase) {
        writeln!(stdout, "{line}").map_err(|source| CliError::Write {
            path: "stdout".to_string(),
            source,
        })?;
    }
    Ok(())
}

fn list_lines(showcase: &Showcase) -> Vec<String> {
    showcase
        .projects
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{i}\t{}", p.name))
        .collect()
}

fn check(path: &Path) -> Result<(), CliError> {
    let showcase = Showcase::load(path)?;
    let theme = showcase.theme()?;
    tracing::info!(path = %path.display(), "manifest valid");
    println!("Manifest valid!");
    println!("  Projects: {}", showcase.projects.len());
    println!(
        "  Theme: {}",
        if theme.name.is_empty() {
            "(default)"
        } else {
            theme.name.as_str()
        }
    );
    Ok(())
}

fn render(path: &Path, options: &RenderOptions) -> Result<String, CliError> {
    let showcase = Showcase::load(path)?;
    render_showcase(&showcase, options)
}

fn render_showcase(showcase: &Showcase, options: &RenderOptions) -> Result<String, CliError> {
    let usable = |v: f32| v.is_finite() && v > 0.0;
    if !(usable(options.viewport) && usable(options.height)) {
        return Err(CliError::InvalidViewport {
            width: options.viewport,
            height: options.height,
        });
    }

    let theme = showcase.theme()?;
    let project = select_project(showcase, options)?;

    let mut panel = ProjectDetail::new()
        .with_theme(theme)
        .viewport(options.viewport);
    if let Some(project) = project {
        panel = panel.with_project(project.clone());
    }
    tracing::info!(
        project = project.map(|p| p.name.as_str()),
        format = ?options.format,
        viewport = options.viewport,
        "rendering"
    );

    match options.format {
        OutputFormat::Html => {
            let body = render_html(&panel)?;
            let title = project.map_or("folio", |p| p.name.as_str());
            Ok(html::page(title, &panel.to_css(), &body))
        }
        OutputFormat::Css => Ok(panel.to_css()),
        OutputFormat::Commands => {
            panel.layout(Rect::new(0.0, 0.0, options.viewport, options.height));
            let mut canvas = RecordingCanvas::new();
            panel.paint(&mut canvas);
            Ok(serde_json::to_string_pretty(canvas.commands())?)
        }
    }
}

/// Pick the project by name, by index, or the first one. An empty manifest
/// renders the empty panel.
fn select_project<'a>(
    showcase: &'a Showcase,
    options: &RenderOptions,
) -> Result<Option<&'a folio_core::Project>, CliError> {
    if let Some(name) = &options.project {
        return showcase
            .find(name)
            .map(Some)
            .ok_or_else(|| CliError::ProjectNotFound(name.clone()));
    }
    if let Some(index) = options.index {
        return showcase
            .projects
            .get(index)
            .map(Some)
            .ok_or(CliError::IndexOutOfRange {
                index,
                len: showcase.projects.len(),
            });
    }
    Ok(showcase.projects.first())
}

fn emit(output: &str, path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(path) => {
            fs::write(path, output).map_err(|source| CliError::Write {
                path: path.display().to_string(),
                source,
            })?;
            tracing::info!(path = %path.display(), bytes = output.len(), "wrote output");
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
                .map_err(|source| CliError::Write {
                    path: "stdout".to_string(),
                    source,
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::DrawCommand;

    const MANIFEST: &str = r#"
projects:
  - name: Demo
    description: desc
    environments: [PC, mobile]
    links: [demo.com]
    images:
      - { url: a.png, description: shot }
  - name: Other
"#;

    fn showcase() -> Showcase {
        Showcase::from_yaml_str(MANIFEST).unwrap()
    }

    fn options(format: OutputFormat) -> RenderOptions {
        RenderOptions {
            project: None,
            index: None,
            format,
            viewport: 1280.0,
            height: 900.0,
        }
    }

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from([
            "folio", "-vv", "render", "show.yaml", "--index", "1", "--format", "css",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Render {
                index,
                format,
                viewport,
                ..
            } => {
                assert_eq!(index, Some(1));
                assert_eq!(format, OutputFormat::Css);
                assert_eq!(viewport, 1280.0);
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_project_and_index_conflict() {
        assert!(Cli::try_parse_from([
            "folio", "render", "show.yaml", "--project", "Demo", "--index", "0",
        ])
        .is_err());
    }

    #[test]
    fn test_list_lines() {
        assert_eq!(list_lines(&showcase()), vec!["0\tDemo", "1\tOther"]);
    }

    #[test]
    fn test_select_defaults_to_first() {
        let s = showcase();
        let p = select_project(&s, &options(OutputFormat::Html)).unwrap();
        assert_eq!(p.map(|p| p.name.as_str()), Some("Demo"));
    }

    #[test]
    fn test_select_by_name_and_index() {
        let s = showcase();
        let by_name = RenderOptions {
            project: Some("Other".into()),
            ..options(OutputFormat::Html)
        };
        assert_eq!(select_project(&s, &by_name).unwrap().unwrap().name, "Other");

        let missing = RenderOptions {
            project: Some("Nope".into()),
            ..options(OutputFormat::Html)
        };
        assert!(matches!(
            select_project(&s, &missing),
            Err(CliError::ProjectNotFound(_))
        ));

        let out_of_range = RenderOptions {
            index: Some(5),
            ..options(OutputFormat::Html)
        };
        assert!(matches!(
            select_project(&s, &out_of_range),
            Err(CliError::IndexOutOfRange { index: 5, len: 2 })
        ));
    }

    #[test]
    fn test_render_html_page() {
        let out = render_showcase(&showcase(), &options(OutputFormat::Html)).unwrap();
        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("<title>Demo</title>"));
        assert!(out.contains(r#"<h1 class="folio-title">Demo</h1>"#));
        assert!(out.contains(".folio-detail {"));
    }

    #[test]
    fn test_render_empty_manifest_gives_shell() {
        let empty = Showcase::default();
        let out = render_showcase(&empty, &options(OutputFormat::Html)).unwrap();
        assert!(out.contains(r#"<div class="folio-detail" data-testid="project-detail"></div>"#));
        assert!(out.contains("<title>folio</title>"));
    }

    #[test]
    fn test_render_css() {
        let out = render_showcase(&showcase(), &options(OutputFormat::Css)).unwrap();
        assert!(out.contains("@keyframes slideInRight"));
        assert!(!out.contains("<"));
    }

    #[test]
    fn test_render_commands_json() {
        let narrow = RenderOptions {
            viewport: 375.0,
            ..options(OutputFormat::Commands)
        };
        let out = render_showcase(&showcase(), &narrow).unwrap();
        let commands: Vec<DrawCommand> = serde_json::from_str(&out).unwrap();
        assert!(commands.iter().any(|c| matches!(
            c,
            DrawCommand::Image { source, grayscale, .. } if source == "a.png" && *grayscale == 0.0
        )));
        assert!(commands.iter().any(|c| matches!(
            c,
            DrawCommand::Text { content, .. } if content == "shot"
        )));
    }

    #[test]
    fn test_invalid_viewport() {
        let bad = RenderOptions {
            viewport: 0.0,
            ..options(OutputFormat::Commands)
        };
        assert!(matches!(
            render_showcase(&showcase(), &bad),
            Err(CliError::InvalidViewport { .. })
        ));
    }

    #[test]
    fn test_infinite_viewport_rejected() {
        for (viewport, height) in [
            (f32::INFINITY, 900.0),
            (1280.0, f32::INFINITY),
            (f32::NAN, 900.0),
        ] {
            let bad = RenderOptions {
                viewport,
                height,
                ..options(OutputFormat::Commands)
            };
            assert!(matches!(
                render_showcase(&showcase(), &bad),
                Err(CliError::InvalidViewport { .. })
            ));
        }
    }

    #[test]
    fn test_font_stack_cannot_break_out_of_style() {
        let dir = tempfile::TempDir::new().unwrap();
        let manifest = dir.path().join("show.yaml");
        fs::write(
            &manifest,
            "theme:\n  fonts:\n    second: \"x;}</style><script>alert(1)</script><style>\"\nprojects:\n  - name: Demo\n",
        )
        .unwrap();
        assert!(matches!(
            render(&manifest, &options(OutputFormat::Html)),
            Err(CliError::Manifest(ManifestError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn test_rendered_page_has_one_style_element() {
        let page = render_showcase(&showcase(), &options(OutputFormat::Html)).unwrap();
        assert_eq!(page.matches("</style>").count(), 1);
        assert_eq!(page.matches("<script>").count(), 0);
    }

    #[test]
    fn test_render_from_file_and_emit() {
        let dir = tempfile::TempDir::new().unwrap();
        let manifest = dir.path().join("show.yaml");
        fs::write(&manifest, MANIFEST).unwrap();
        let out = render(&manifest, &options(OutputFormat::Css)).unwrap();

        let target = dir.path().join("panel.css");
        emit(&out, Some(&target)).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), out);
    }
}
