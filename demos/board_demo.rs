//! Headless board demo - builds the sample board and prints its draw list

use anyhow::Result;
use glam::Vec3;
use stickyboard::{flatten, Board, FontMeasurer, Geometry, MonospaceMeasurer, PlaneAnchor};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // A detected tabletop, 1.2m x 0.8m, half a meter in front of the origin.
    let anchor = PlaneAnchor::new(1, Vec3::new(0.0, 0.0, -0.5), (1.2, 0.8));

    // Use real font metrics when a font is available, monospace otherwise.
    let board = match find_system_font() {
        Some(path) => {
            let measurer = FontMeasurer::from_file(&path, 32.0)?;
            Board::sample(&anchor, &measurer)?
        }
        None => Board::sample(&anchor, &MonospaceMeasurer::default())?,
    };

    print_draw_list(&board);
    Ok(())
}

fn print_draw_list(board: &Board) {
    for item in flatten(board.root()) {
        let origin = item.world.transform_point3(Vec3::ZERO);
        match item.geometry {
            Geometry::Plane { width, height, .. } => {
                println!(
                    "panel   {width:.3}x{height:.3} at ({:.3}, {:.3}, {:.3}) opacity {:.2}",
                    origin.x, origin.y, origin.z, item.opacity
                );
            }
            Geometry::Text { text, .. } => {
                println!(
                    "text    {:?} at ({:.3}, {:.3}, {:.3})",
                    text, origin.x, origin.y, origin.z
                );
            }
            Geometry::PolygonMesh { vertices, .. } => {
                println!(
                    "mesh    {} vertices at ({:.3}, {:.3}, {:.3}) opacity {:.2}",
                    vertices.len(),
                    origin.x,
                    origin.y,
                    origin.z,
                    item.opacity
                );
            }
        }
    }
}

fn find_system_font() -> Option<String> {
    let candidates = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/System/Library/Fonts/Helvetica.ttc",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];
    candidates
        .iter()
        .find(|path| std::path::Path::new(path).exists())
        .map(|path| path.to_string())
}
