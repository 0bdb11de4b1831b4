use yew::prelude::*;

use crate::model::{Maze, Position};
use crate::render::{self, CrossingMarks, Line, Rect};

#[derive(Properties, PartialEq, Clone)]
pub struct MazeViewProps {
    pub maze: Maze,
    pub grid_size: u32,
    #[prop_or_default]
    pub solve_path: Vec<Position>,
}

fn line_view(line: &Line) -> Html {
    html! {
        <line
            class="maze-elt"
            x1={line.x1.to_string()}
            y1={line.y1.to_string()}
            x2={line.x2.to_string()}
            y2={line.y2.to_string()}
            stroke={line.color}
            stroke-width={line.width.to_string()}
        />
    }
}

fn rect_view(rect: &Rect) -> Html {
    html! {
        <rect
            class="maze-elt"
            x={rect.x.to_string()}
            y={rect.y.to_string()}
            width={rect.width.to_string()}
            height={rect.height.to_string()}
            fill={rect.color}
        />
    }
}

/// SVG rendering of the maze: grid lines, passage crossings for every
/// generator path, the latest solve path, and the goal marker.
#[function_component(MazeView)]
pub fn maze_view(props: &MazeViewProps) -> Html {
    let g = props.grid_size;
    let maze = &props.maze;
    let (width, height) = render::canvas_size(g, maze.rows, maze.cols);
    let grid = render::grid_lines(g, maze.rows, maze.cols);
    let passages: Vec<CrossingMarks> = maze
        .paths
        .iter()
        .flat_map(|path| render::path_marks(g, path, render::PATH_COLOR))
        .collect();
    let solve_marks = render::path_marks(g, &props.solve_path, render::SOLVE_COLOR);
    let goal = maze.goal().map(|p| render::goal_marker(g, p.x, p.y));

    html! {
        <svg
            id="maze-canvas"
            width={width.to_string()}
            height={height.to_string()}
            style={format!("background:{};", render::BG_COLOR)}
        >
            { for grid.iter().map(line_view) }
            // wall clearings overdraw the grid before any highlight goes on top
            { for passages.iter().map(|m| line_view(&m.wall_clear)) }
            { for passages.iter().map(|m| line_view(&m.path)) }
            { for solve_marks.iter().map(|m| line_view(&m.wall_clear)) }
            { for solve_marks.iter().map(|m| line_view(&m.path)) }
            { goal.map(|r| rect_view(&r)).unwrap_or_default() }
        </svg>
    }
}
