//! tile-canvas: render the HUD demo scene to a PNG.
//!
//! Run: `tile-canvas render --config canvas.yaml --out scene.png`
//! Logging: `RUST_LOG=debug tile-canvas render`

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tile_canvas::prelude::*;

/// tile-canvas: immediate-mode software rasterizer
#[derive(Parser, Debug)]
#[command(name = "tile-canvas")]
#[command(version)]
#[command(about = "Software rasterizer for tile-based simulations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw the demo scene and write it as PNG
    Render {
        /// Config file path (defaults are used when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output PNG path
        #[arg(short, long, default_value = "scene.png")]
        out: PathBuf,

        /// Force aliased lines regardless of the config
        #[arg(long)]
        aliased: bool,
    },
    /// Print the effective configuration as YAML
    Config {
        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

const GRAY: Rgba = Rgba::new(240, 240, 240, 170);
const SOFT_GREEN: Rgba = Rgba::new(60, 220, 0, 150);
const SOFT_RED: Rgba = Rgba::new(255, 50, 50, 150);

fn load_config(path: Option<&PathBuf>) -> Result<CanvasConfig> {
    match path {
        Some(p) => CanvasConfig::load(p).with_context(|| format!("loading {}", p.display())),
        None => Ok(CanvasConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            config,
            out,
            aliased,
        } => {
            let config = load_config(config.as_ref())?;
            let mut canvas = Canvas::from_config(&config)?;
            if aliased {
                canvas.set_line_mode(LineMode::Aliased);
            }
            let mut sprites = SpriteCache::new(&config.asset_dir);
            draw_scene(&mut canvas, &mut sprites)?;
            canvas
                .save_png(&out)
                .with_context(|| format!("writing {}", out.display()))?;
            log::info!("wrote {}", out.display());
        }
        Command::Config { config } => {
            let config = load_config(config.as_ref())?;
            print!("{}", serde_yaml_ng::to_string(&config)?);
        }
    }

    Ok(())
}

/// Resource bar, tile grid with markers, tutorial box and shop buttons.
fn draw_scene(canvas: &mut Canvas, sprites: &mut SpriteCache) -> Result<()> {
    let width = canvas.surface().width() as i32;
    let height = canvas.surface().height() as i32;
    let mut font = BlockText::default();

    // Tile grid
    {
        let mut grid = canvas.push_style();
        grid.set_fill(Rgba::TRANSPARENT);
        grid.set_stroke(GRAY.with_alpha(60));
        for x in (0..width).step_by(45) {
            grid.line(x, 60, x, height);
        }
        for y in (60..height).step_by(45) {
            grid.line(0, y, width, y);
        }
    }

    // Occupied tiles
    {
        let mut tiles = canvas.push_style();
        tiles.set_stroke(Rgba::WHITE);
        for (i, x) in (90..width - 90).step_by(135).enumerate() {
            tiles.set_fill(if i % 2 == 0 { SOFT_GREEN } else { SOFT_RED });
            tiles.rhombus(x, 400, 44, 44, Align::Center);
        }
    }

    // Resource bar
    {
        let mut bar = canvas.push_style();
        bar.set_fill(GRAY.with_alpha(40));
        bar.set_stroke(GRAY);
        bar.rect(0, 0, width, 50, Align::Left);
        bar.set_text_size(24);
        bar.set_text_align(TextAlign::CenterLeft);
        bar.set_fill(Rgba::YELLOW);
        for (i, label) in ["wood: 40", "stone: 12", "gold: 3"].iter().enumerate() {
            bar.text(&mut font, label, 20 + 260 * i as i32, 25);
        }
        bar.image(sprites, "coin.png", width - 40, 10, 30, 30, 255);
    }

    // Tutorial box
    {
        let mut tutorial = canvas.push_style();
        tutorial.set_fill(Rgba::BLACK);
        tutorial.set_stroke(Rgba::WHITE);
        tutorial.rounded_rect(100, 80, 850, 200, 12, Align::Left)?;

        tutorial.set_fill(Rgba::YELLOW);
        tutorial.set_text_size(24);
        tutorial.set_text_align(TextAlign::CenterLeft);
        tutorial.text(&mut font, "Welcome to the kingdom!", 120, 100);
        tutorial.text(&mut font, "Build and collect resources.", 120, 140);
        tutorial.text(&mut font, "Open the shop to place a building.", 120, 180);
    }

    // Shop buttons
    {
        let mut shop = canvas.push_style();
        shop.set_fill(SOFT_GREEN);
        shop.set_stroke(Rgba::WHITE);
        shop.set_stroke_weight(2);
        shop.circle(width - 60, height - 60, 35, Align::Center, CircleQuad::All);

        shop.set_fill(Rgba::new(30, 30, 30, 220));
        shop.rounded_rect(width - 230, height - 60, 140, 50, 10, Align::Center)?;
        shop.text_styled(
            &mut font,
            "BUILD",
            Rgba::WHITE,
            20,
            width - 230,
            height - 70,
            Align::Center,
        );
    }

    canvas.text_styled(
        &mut font,
        "frames: 0",
        Rgba::WHITE,
        10,
        10,
        height - 20,
        Align::Left,
    );

    Ok(())
}
