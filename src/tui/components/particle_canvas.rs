// Particle canvas component
//
// Rasterizes the particle field onto a fixed character grid and draws it
// centered in the given area. Narrow areas clip the grid evenly on both sides.

use crate::particles::{Grid, ParticleField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// One string per grid row, `glyph` where a particle lands and spaces elsewhere
pub fn canvas_lines(field: &ParticleField, grid: &Grid, glyph: char) -> Vec<String> {
    let mut cells = vec![vec![' '; grid.width as usize]; grid.height as usize];
    for (x, y) in field.project(grid) {
        cells[y as usize][x as usize] = glyph;
    }
    cells.into_iter().map(|row| row.into_iter().collect()).collect()
}

pub fn render(
    f: &mut Frame,
    area: Rect,
    field: &ParticleField,
    grid: &Grid,
    glyph: char,
    color: Color,
) {
    let lines = canvas_lines(field, grid, glyph);

    let (area, skip) = if area.width >= grid.width {
        let pad = (area.width - grid.width) / 2;
        (
            Rect {
                x: area.x + pad,
                width: grid.width,
                ..area
            },
            0,
        )
    } else {
        (area, (grid.width - area.width) / 2)
    };

    let canvas = Paragraph::new(lines.join("\n"))
        .style(Style::default().fg(color))
        .scroll((0, skip));
    f.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::{backend::TestBackend, Terminal};

    fn field() -> ParticleField {
        ParticleField::with_rng(&mut StdRng::seed_from_u64(3))
    }

    #[test]
    fn lines_match_grid_shape() {
        let lines = canvas_lines(&field(), &Grid::LOGO, '·');
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|l| l.chars().count() == 80));
        assert!(lines.iter().any(|l| l.contains('·')));
    }

    #[test]
    fn full_grid_marks_rightmost_ring_point() {
        let lines = canvas_lines(&field(), &Grid::FULL, '•');
        assert_eq!(lines[8].chars().nth(52), Some('•'));
    }

    #[test]
    fn renders_centered_in_wide_area() {
        let backend = TestBackend::new(100, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        let field = field();
        terminal
            .draw(|f| render(f, f.area(), &field, &Grid::FULL, '•', Color::White))
            .unwrap();

        // Grid column 52 shifted by the 10-column margin
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(62, 8)].symbol(), "•");
    }
}
