//! Pure drawing instructions for the maze SVG canvas.
//! Geometry in, `Line`/`Rect` values out; no DOM types so the whole module
//! is testable off-browser. `MazeView` turns the instructions into SVG.

use crate::model::Position;

pub const GRID_COLOR: &str = "#000";
pub const PATH_COLOR: &str = "#00d";
pub const SOLVE_COLOR: &str = "#f00";
pub const GOAL_COLOR: &str = "#0f0";
pub const BG_COLOR: &str = "#fff";

pub const GRID_STROKE: f64 = 10.0;
pub const PATH_STROKE: f64 = 5.0;
/// Inset that keeps wall clearings and the goal marker off cell corners.
pub const MARK_INSET: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub width: f64,
    pub color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
}

/// One passage between adjacent cells: a background-colored segment that
/// erases the shared wall, plus a center-to-center highlight line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrossingMarks {
    pub wall_clear: Line,
    pub path: Line,
}

pub fn canvas_size(grid_size: u32, rows: u32, cols: u32) -> (u32, u32) {
    (grid_size * cols, grid_size * rows)
}

/// Full-height and full-width grid lines at `grid_size` intervals.
pub fn grid_lines(grid_size: u32, rows: u32, cols: u32) -> Vec<Line> {
    let g = grid_size as f64;
    let (width, height) = canvas_size(grid_size, rows, cols);
    let (w, h) = (width as f64, height as f64);
    let mut lines = Vec::with_capacity((rows + cols + 2) as usize);
    for x in 0..=cols {
        lines.push(Line {
            x1: x as f64 * g,
            y1: 0.0,
            x2: x as f64 * g,
            y2: h,
            width: GRID_STROKE,
            color: GRID_COLOR,
        });
    }
    for y in 0..=rows {
        lines.push(Line {
            x1: 0.0,
            y1: y as f64 * g,
            x2: w,
            y2: y as f64 * g,
            width: GRID_STROKE,
            color: GRID_COLOR,
        });
    }
    lines
}

/// Display coordinates of a cell's center.
pub fn cell_center(grid_size: u32, p: Position) -> (f64, f64) {
    let g = grid_size as f64;
    let delta = g / 2.0;
    (p.x as f64 * g + delta, p.y as f64 * g + delta)
}

/// Marks for crossing from `from` into `to`. Returns `None` when the cells
/// are not adjacent in exactly one axis.
pub fn crossing_marks(
    grid_size: u32,
    from: Position,
    to: Position,
    path_color: &'static str,
) -> Option<CrossingMarks> {
    let g = grid_size as f64;
    let wall_clear = if to.x > from.x && to.x - from.x == 1 && to.y == from.y {
        // shared wall sits on the entered cell's left edge
        Line {
            x1: to.x as f64 * g,
            y1: to.y as f64 * g + MARK_INSET,
            x2: to.x as f64 * g,
            y2: (to.y + 1) as f64 * g - MARK_INSET,
            width: GRID_STROKE,
            color: BG_COLOR,
        }
    } else if to.x < from.x && from.x - to.x == 1 && to.y == from.y {
        Line {
            x1: from.x as f64 * g,
            y1: from.y as f64 * g + MARK_INSET,
            x2: from.x as f64 * g,
            y2: (from.y + 1) as f64 * g - MARK_INSET,
            width: GRID_STROKE,
            color: BG_COLOR,
        }
    } else if to.y > from.y && to.y - from.y == 1 && to.x == from.x {
        Line {
            x1: to.x as f64 * g + MARK_INSET,
            y1: to.y as f64 * g,
            x2: (to.x + 1) as f64 * g - MARK_INSET,
            y2: to.y as f64 * g,
            width: GRID_STROKE,
            color: BG_COLOR,
        }
    } else if to.y < from.y && from.y - to.y == 1 && to.x == from.x {
        Line {
            x1: from.x as f64 * g + MARK_INSET,
            y1: from.y as f64 * g,
            x2: (from.x + 1) as f64 * g - MARK_INSET,
            y2: from.y as f64 * g,
            width: GRID_STROKE,
            color: BG_COLOR,
        }
    } else {
        return None;
    };

    let (fx, fy) = cell_center(grid_size, from);
    let (tx, ty) = cell_center(grid_size, to);
    Some(CrossingMarks {
        wall_clear,
        path: Line {
            x1: fx,
            y1: fy,
            x2: tx,
            y2: ty,
            width: PATH_STROKE,
            color: path_color,
        },
    })
}

/// Crossing marks for every consecutive pair of a path; non-adjacent pairs
/// contribute nothing.
pub fn path_marks(grid_size: u32, path: &[Position], path_color: &'static str) -> Vec<CrossingMarks> {
    path.windows(2)
        .filter_map(|pair| crossing_marks(grid_size, pair[0], pair[1], path_color))
        .collect()
}

/// Filled square inset from the cell bounds on all sides.
pub fn goal_marker(grid_size: u32, x: u32, y: u32) -> Rect {
    let g = grid_size as f64;
    Rect {
        x: x as f64 * g + MARK_INSET,
        y: y as f64 * g + MARK_INSET,
        width: g - 2.0 * MARK_INSET,
        height: g - 2.0 * MARK_INSET,
        color: GOAL_COLOR,
    }
}
