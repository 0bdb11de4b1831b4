//! Core data models for the maze RL front-end.
//! The maze itself is owned by the remote API; this module mirrors its
//! responses and holds the application state the UI reduces over.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

/// Which compass directions are traversable out of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalMoves {
    pub n: bool,
    pub e: bool,
    pub s: bool,
    pub w: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
    /// Learned value supplied by the server; opaque to the UI.
    #[serde(default)]
    pub q: f64,
    #[serde(default)]
    pub legal: LegalMoves,
    #[serde(default)]
    pub goal: bool,
}

/// Maze record mirrored wholesale from the `/create` response and replaced
/// on every settings submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Maze {
    pub rows: u32,
    pub cols: u32,
    /// Row-major cells; length = rows * cols.
    pub cell_matrix: Vec<Cell>,
    /// Carving paths from the generator, drawn as passage crossings.
    #[serde(default)]
    pub paths: Vec<Vec<Position>>,
}

impl Maze {
    pub fn cell_index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.cols && y < self.rows {
            Some((y * self.cols + x) as usize)
        } else {
            None
        }
    }

    pub fn cell(&self, x: u32, y: u32) -> Option<&Cell> {
        self.cell_index(x, y).and_then(|i| self.cell_matrix.get(i))
    }

    /// Open the shared wall between two cells by setting the facing legal
    /// flags on both sides. Cells that are not adjacent in exactly one axis
    /// are left untouched and `false` is returned.
    pub fn link_cells(&mut self, from: Position, to: Position) -> bool {
        let Some(fi) = self.cell_index(from.x, from.y) else {
            return false;
        };
        let Some(ti) = self.cell_index(to.x, to.y) else {
            return false;
        };
        let dx = to.x as i64 - from.x as i64;
        let dy = to.y as i64 - from.y as i64;
        match (dx, dy) {
            (1, 0) => {
                self.cell_matrix[fi].legal.e = true;
                self.cell_matrix[ti].legal.w = true;
            }
            (-1, 0) => {
                self.cell_matrix[fi].legal.w = true;
                self.cell_matrix[ti].legal.e = true;
            }
            (0, 1) => {
                self.cell_matrix[fi].legal.s = true;
                self.cell_matrix[ti].legal.n = true;
            }
            (0, -1) => {
                self.cell_matrix[fi].legal.n = true;
                self.cell_matrix[ti].legal.s = true;
            }
            _ => return false,
        }
        true
    }

    pub fn set_goal(&mut self, x: u32, y: u32) -> bool {
        match self.cell_index(x, y) {
            Some(i) => {
                self.cell_matrix[i].goal = true;
                true
            }
            None => false,
        }
    }

    pub fn goal(&self) -> Option<Position> {
        self.cell_matrix
            .iter()
            .find(|c| c.goal)
            .map(|c| Position { x: c.x, y: c.y })
    }

    /// Replay the generator's carving paths into the legal-move flags, and
    /// flag the end of the last path as the goal when the server sent none.
    pub fn apply_paths(&mut self) {
        let paths = self.paths.clone();
        for path in &paths {
            for pair in path.windows(2) {
                self.link_cells(pair[0], pair[1]);
            }
        }
        if self.goal().is_none() {
            if let Some(end) = paths.last().and_then(|p| p.last()) {
                self.set_goal(end.x, end.y);
            }
        }
    }
}

/// Reinforcement-learning hyperparameters, owned by the UI and sent to the
/// server with train requests. Field names on the wire match the exported
/// `maze.json` shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RlHyperParams {
    pub epsilon: f64,
    pub epsilon_decay: f64,
    pub min_epsilon: f64,
    pub alpha: f64,
    pub gamma: f64,
    #[serde(rename = "rIllegal")]
    pub r_illegal: f64,
    #[serde(rename = "rLegal")]
    pub r_legal: f64,
    #[serde(rename = "rGoal")]
    pub r_goal: f64,
    #[serde(rename = "hiddenSize")]
    pub hidden_size: u32,
}

impl Default for RlHyperParams {
    fn default() -> Self {
        Self {
            epsilon: 0.3,
            epsilon_decay: 0.99,
            min_epsilon: 0.1,
            alpha: 0.5,
            gamma: 0.9,
            r_illegal: -0.75,
            r_legal: -0.1,
            r_goal: 10.0,
            hidden_size: 64,
        }
    }
}

/// Lifecycle of an asynchronous API request.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TaskStatus {
    #[default]
    Idle,
    Pending,
    Done,
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SolveStatus {
    #[default]
    Idle,
    Complete {
        steps: u32,
    },
    /// The step budget was exhausted before the goal was reached.
    TimedOut,
}

/// The whole application state, reduced over by the root component. Replaces
/// the module-level globals of a classic browser script with one record.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub maze: Option<Maze>,
    pub grid_size: u32,
    pub hp: RlHyperParams,
    pub total_passes: u32,
    pub create: TaskStatus,
    pub training: TaskStatus,
    pub solve: SolveStatus,
    pub solve_path: Vec<Position>,
    /// Generation counter for in-flight requests; completions carrying a
    /// stale token are dropped, which is what makes cancellation work.
    pub run_token: u32,
}

impl AppState {
    pub fn new(grid_size: u32) -> Self {
        Self {
            maze: None,
            grid_size,
            hp: RlHyperParams::default(),
            total_passes: 0,
            create: TaskStatus::Idle,
            training: TaskStatus::Idle,
            solve: SolveStatus::Idle,
            solve_path: Vec::new(),
            run_token: 0,
        }
    }

    /// Token the next dispatched request will carry: `CreateStarted` and
    /// `TrainStarted` bump `run_token` by exactly one.
    pub fn next_token(&self) -> u32 {
        self.run_token.wrapping_add(1)
    }

    pub fn busy(&self) -> bool {
        matches!(self.training, TaskStatus::Pending) || matches!(self.create, TaskStatus::Pending)
    }
}

#[derive(Clone, Debug)]
pub enum AppAction {
    /// Settings form submitted; a `/create` request is in flight.
    CreateStarted { grid_size: u32 },
    MazeCreated { token: u32, maze: Maze },
    CreateFailed { token: u32, message: String },
    SetHyperParams(RlHyperParams),
    TrainStarted,
    TrainFinished { token: u32, passes: u32, maze: Maze },
    TrainFailed { token: u32, message: String },
    /// Drop the in-flight training request by invalidating its token.
    CancelTraining,
    SolveFinished {
        token: u32,
        steps: u32,
        limit: u32,
        path: Vec<Position>,
    },
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use AppAction::*;
        let mut new = (*self).clone();
        match action {
            CreateStarted { grid_size } => {
                new.run_token = new.next_token();
                new.grid_size = grid_size;
                new.create = TaskStatus::Pending;
                new.training = TaskStatus::Idle;
                new.solve = SolveStatus::Idle;
                new.solve_path.clear();
                new.total_passes = 0;
            }
            MazeCreated { token, mut maze } => {
                if token != new.run_token {
                    return self;
                }
                maze.apply_paths();
                new.maze = Some(maze);
                new.create = TaskStatus::Done;
            }
            CreateFailed { token, message } => {
                if token != new.run_token {
                    return self;
                }
                new.create = TaskStatus::Failed(message);
            }
            SetHyperParams(hp) => {
                new.hp = hp;
            }
            TrainStarted => {
                new.run_token = new.next_token();
                new.training = TaskStatus::Pending;
            }
            TrainFinished { token, passes, maze } => {
                if token != new.run_token {
                    return self;
                }
                new.maze = Some(maze);
                new.total_passes = new.total_passes.saturating_add(passes);
                new.training = TaskStatus::Done;
            }
            TrainFailed { token, message } => {
                if token != new.run_token {
                    return self;
                }
                new.training = TaskStatus::Failed(message);
            }
            CancelTraining => {
                if matches!(new.training, TaskStatus::Pending) {
                    new.run_token = new.next_token();
                    new.training = TaskStatus::Idle;
                }
            }
            SolveFinished {
                token,
                steps,
                limit,
                path,
            } => {
                if token != new.run_token {
                    return self;
                }
                if steps == limit {
                    new.solve = SolveStatus::TimedOut;
                    new.solve_path.clear();
                } else {
                    new.solve = SolveStatus::Complete { steps };
                    new.solve_path = path;
                }
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_maze(rows: u32, cols: u32) -> Maze {
        let mut cell_matrix = Vec::with_capacity((rows * cols) as usize);
        for y in 0..rows {
            for x in 0..cols {
                cell_matrix.push(Cell {
                    x,
                    y,
                    q: 0.0,
                    legal: LegalMoves::default(),
                    goal: false,
                });
            }
        }
        Maze {
            rows,
            cols,
            cell_matrix,
            paths: Vec::new(),
        }
    }

    fn reduce(state: AppState, action: AppAction) -> AppState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn link_cells_opens_both_facing_walls() {
        let mut maze = blank_maze(3, 3);
        assert!(maze.link_cells(Position { x: 1, y: 1 }, Position { x: 2, y: 1 }));
        assert!(maze.cell(1, 1).unwrap().legal.e);
        assert!(maze.cell(2, 1).unwrap().legal.w);
        assert!(!maze.cell(1, 1).unwrap().legal.n);
    }

    #[test]
    fn link_cells_rejects_non_adjacent_pairs() {
        let mut maze = blank_maze(3, 3);
        assert!(!maze.link_cells(Position { x: 0, y: 0 }, Position { x: 2, y: 0 }));
        assert!(!maze.link_cells(Position { x: 0, y: 0 }, Position { x: 1, y: 1 }));
        assert!(!maze.link_cells(Position { x: 0, y: 0 }, Position { x: 0, y: 0 }));
        assert_eq!(maze.cell(0, 0).unwrap().legal, LegalMoves::default());
    }

    #[test]
    fn apply_paths_links_passages_and_flags_goal() {
        let mut maze = blank_maze(2, 2);
        maze.paths = vec![vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 1, y: 1 },
        ]];
        maze.apply_paths();
        assert!(maze.cell(0, 0).unwrap().legal.e);
        assert!(maze.cell(1, 0).unwrap().legal.s);
        assert_eq!(maze.goal(), Some(Position { x: 1, y: 1 }));
    }

    #[test]
    fn apply_paths_keeps_server_goal() {
        let mut maze = blank_maze(2, 2);
        maze.set_goal(0, 1);
        maze.paths = vec![vec![Position { x: 0, y: 0 }, Position { x: 1, y: 0 }]];
        maze.apply_paths();
        assert_eq!(maze.goal(), Some(Position { x: 0, y: 1 }));
    }

    #[test]
    fn maze_deserializes_snake_case_response() {
        let raw = r#"{
            "rows": 1,
            "cols": 2,
            "cell_matrix": [
                {"x": 0, "y": 0, "q": 0.5, "legal": {"n": false, "e": true, "s": false, "w": false}, "goal": false},
                {"x": 1, "y": 0, "goal": true}
            ],
            "paths": [[{"x": 0, "y": 0}, {"x": 1, "y": 0}]]
        }"#;
        let maze: Maze = serde_json::from_str(raw).unwrap();
        assert_eq!(maze.cell_matrix.len(), 2);
        assert!(maze.cell(0, 0).unwrap().legal.e);
        assert_eq!(maze.goal(), Some(Position { x: 1, y: 0 }));
    }

    #[test]
    fn hyperparams_serialize_with_wire_names() {
        let json = serde_json::to_value(RlHyperParams::default()).unwrap();
        assert_eq!(json["rIllegal"], serde_json::json!(-0.75));
        assert_eq!(json["rGoal"], serde_json::json!(10.0));
        assert_eq!(json["hiddenSize"], serde_json::json!(64));
        assert_eq!(json["epsilon_decay"], serde_json::json!(0.99));
    }

    #[test]
    fn solve_at_limit_is_a_timeout() {
        let mut state = AppState::new(25);
        state.maze = Some(blank_maze(2, 2));
        let token = state.run_token;
        let state = reduce(
            state,
            AppAction::SolveFinished {
                token,
                steps: 1000,
                limit: 1000,
                path: vec![Position { x: 0, y: 0 }],
            },
        );
        assert_eq!(state.solve, SolveStatus::TimedOut);
        assert!(state.solve_path.is_empty());
    }

    #[test]
    fn solve_under_limit_completes_with_path() {
        let mut state = AppState::new(25);
        state.maze = Some(blank_maze(2, 2));
        let token = state.run_token;
        let state = reduce(
            state,
            AppAction::SolveFinished {
                token,
                steps: 7,
                limit: 1000,
                path: vec![Position { x: 0, y: 0 }, Position { x: 1, y: 0 }],
            },
        );
        assert_eq!(state.solve, SolveStatus::Complete { steps: 7 });
        assert_eq!(state.solve_path.len(), 2);
    }

    #[test]
    fn stale_train_completion_is_dropped() {
        let state = AppState::new(25);
        let token = state.next_token();
        let state = reduce(state, AppAction::TrainStarted);
        assert_eq!(state.training, TaskStatus::Pending);

        // Cancelling bumps the token; the late completion must not apply.
        let state = reduce(state, AppAction::CancelTraining);
        assert_eq!(state.training, TaskStatus::Idle);
        let state = reduce(
            state,
            AppAction::TrainFinished {
                token,
                passes: 500,
                maze: blank_maze(2, 2),
            },
        );
        assert_eq!(state.training, TaskStatus::Idle);
        assert_eq!(state.total_passes, 0);
        assert!(state.maze.is_none());
    }

    #[test]
    fn training_accumulates_total_passes() {
        let state = AppState::new(25);
        let token = state.next_token();
        let state = reduce(state, AppAction::TrainStarted);
        let state = reduce(
            state,
            AppAction::TrainFinished {
                token,
                passes: 2000,
                maze: blank_maze(2, 2),
            },
        );
        let token = state.next_token();
        let state = reduce(state, AppAction::TrainStarted);
        let state = reduce(
            state,
            AppAction::TrainFinished {
                token,
                passes: 500,
                maze: blank_maze(2, 2),
            },
        );
        assert_eq!(state.total_passes, 2500);
        assert_eq!(state.training, TaskStatus::Done);
    }

    #[test]
    fn new_maze_resets_run_results() {
        let mut state = AppState::new(25);
        state.total_passes = 4000;
        state.solve = SolveStatus::Complete { steps: 12 };
        state.solve_path = vec![Position { x: 0, y: 0 }];
        let token = state.next_token();
        let state = reduce(state, AppAction::CreateStarted { grid_size: 20 });
        assert_eq!(state.grid_size, 20);
        assert_eq!(state.total_passes, 0);
        assert_eq!(state.solve, SolveStatus::Idle);
        assert_eq!(state.create, TaskStatus::Pending);
        let state = reduce(
            state,
            AppAction::MazeCreated {
                token,
                maze: blank_maze(10, 10),
            },
        );
        assert_eq!(state.create, TaskStatus::Done);
        assert!(state.maze.is_some());
    }
}
