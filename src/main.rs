//! circle-graph CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;

use circle_graph::{Canvas, ErrorClass, RenderSettings, SvgSurface, render_source};

/// Render a circle-graph description to SVG.
#[derive(Parser, Debug)]
#[command(
    name = "circle-graph",
    version = env!("CIRCLE_GRAPH_VERSION"),
    about = "Render a compact graph description as vertices on a circle"
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Surface width in pixels
    #[arg(long, default_value = "300")]
    width: f64,

    /// Surface height in pixels
    #[arg(long, default_value = "300")]
    height: f64,

    /// Radius of the ring the vertices sit on
    #[arg(short = 'r', long = "radius", default_value = "100")]
    big_radius: f64,

    /// Radius of each vertex marker
    #[arg(long, default_value = "5")]
    vertex_radius: f64,

    /// Stroke width of edges
    #[arg(long, default_value = "1.5")]
    edge_thickness: f64,

    /// Size of directed-edge arrowheads
    #[arg(long, default_value = "8")]
    arrow_size: f64,

    /// Curvature added per parallel edge
    #[arg(short = 'b', long, default_value = "10")]
    bendiness: f64,

    /// Background paint
    #[arg(long, default_value = "white")]
    background: String,

    /// Vertex paint
    #[arg(long, default_value = "black")]
    vertex_color: String,

    /// Edge paint
    #[arg(long, default_value = "black")]
    edge_color: String,

    /// Print the drawing commands instead of SVG
    #[arg(long)]
    commands: bool,
}

impl Cli {
    fn settings(&self) -> RenderSettings {
        RenderSettings {
            background: self.background.clone(),
            vertex_color: self.vertex_color.clone(),
            edge_color: self.edge_color.clone(),
            big_radius: self.big_radius,
            vertex_radius: self.vertex_radius,
            edge_thickness: self.edge_thickness,
            arrow_size: self.arrow_size,
            bendiness: self.bendiness,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    let settings = cli.settings();
    let result = if cli.commands {
        let mut canvas = Canvas::new(cli.width, cli.height);
        render_source(&text, &settings, &mut canvas).map(|()| {
            canvas
                .commands()
                .iter()
                .map(|c| format!("{c:?}\n"))
                .collect::<String>()
        })
    } else {
        let mut surface = SvgSurface::new(cli.width, cli.height);
        render_source(&text, &settings, &mut surface).map(|()| surface.finish())
    };

    let rendered = match result {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            if e.class() == ErrorClass::UnexpectedError {
                eprintln!("this looks like a bug in circle-graph; please report it with the input that caused it");
            }
            process::exit(1);
        }
    };

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
