//! Download helper: snapshots the maze cells and hyperparameters into a
//! `maze.json` blob. The one real resource contract here is the object-URL
//! lifecycle: the previous URL is revoked before a replacement is minted,
//! so at most one export URL is ever alive.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, Url};

use crate::model::{LegalMoves, Maze, RlHyperParams};

pub const DOWNLOAD_FILENAME: &str = "maze.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellInfo {
    pub x: u32,
    pub y: u32,
    pub q: f64,
    pub legal: LegalMoves,
    pub goal: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MazeSnapshot {
    pub cell_info: Vec<CellInfo>,
    pub rlhp: RlHyperParams,
}

pub fn build_snapshot(maze: &Maze, hp: &RlHyperParams) -> MazeSnapshot {
    let cell_info = maze
        .cell_matrix
        .iter()
        .map(|cell| CellInfo {
            x: cell.x,
            y: cell.y,
            q: cell.q,
            legal: cell.legal,
            goal: cell.goal,
        })
        .collect();
    MazeSnapshot {
        cell_info,
        rlhp: *hp,
    }
}

pub fn snapshot_json(maze: &Maze, hp: &RlHyperParams) -> Result<String, serde_json::Error> {
    serde_json::to_string(&build_snapshot(maze, hp))
}

/// Owner of the single live object URL backing the download link.
#[derive(Debug, Default)]
pub struct ExportUrl {
    current: Option<String>,
}

impl ExportUrl {
    /// Hand back the URL that must be revoked before a new one is created,
    /// clearing it from the record.
    fn take_stale(&mut self) -> Option<String> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Revoke the previous object URL, then mint a new blob-backed one for
    /// `json` and remember it.
    pub fn refresh(&mut self, json: &str) -> Result<String, JsValue> {
        if let Some(old) = self.take_stale() {
            Url::revoke_object_url(&old)?;
        }
        let parts = js_sys::Array::of1(&JsValue::from_str(json));
        let props = BlobPropertyBag::new();
        props.set_type("application/json");
        let blob = Blob::new_with_str_sequence_and_options(&parts, &props)?;
        let url = Url::create_object_url_with_blob(&blob)?;
        self.current = Some(url.clone());
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, Position};

    fn sample_maze(rows: u32, cols: u32) -> Maze {
        let mut cell_matrix = Vec::new();
        for y in 0..rows {
            for x in 0..cols {
                cell_matrix.push(Cell {
                    x,
                    y,
                    q: (x + y) as f64 * 0.25,
                    legal: LegalMoves::default(),
                    goal: false,
                });
            }
        }
        let mut maze = Maze {
            rows,
            cols,
            cell_matrix,
            paths: vec![vec![Position { x: 0, y: 0 }, Position { x: 1, y: 0 }]],
        };
        maze.apply_paths();
        maze
    }

    #[test]
    fn snapshot_covers_every_cell() {
        let maze = sample_maze(4, 6);
        let snap = build_snapshot(&maze, &RlHyperParams::default());
        assert_eq!(snap.cell_info.len(), 24);
    }

    #[test]
    fn snapshot_json_round_trips() {
        let maze = sample_maze(3, 3);
        let json = snapshot_json(&maze, &RlHyperParams::default()).unwrap();
        let parsed: MazeSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.cell_info.len(), (maze.rows * maze.cols) as usize);
        assert_eq!(parsed.rlhp, RlHyperParams::default());
        // legal flags and goal survive the trip
        assert!(parsed.cell_info[0].legal.e);
        assert!(parsed.cell_info.iter().any(|c| c.goal));
    }

    #[test]
    fn snapshot_uses_the_download_field_names() {
        let maze = sample_maze(1, 1);
        let json = serde_json::to_value(build_snapshot(&maze, &RlHyperParams::default())).unwrap();
        assert!(json.get("cell_info").is_some());
        assert!(json.get("rlhp").is_some());
        assert_eq!(json["cell_info"][0]["q"], serde_json::json!(0.0));
    }

    #[test]
    fn at_most_one_url_is_recorded_live() {
        let mut export = ExportUrl::default();
        assert!(export.take_stale().is_none());
        export.current = Some("blob:a".to_string());
        assert_eq!(export.take_stale().as_deref(), Some("blob:a"));
        // once taken for revocation nothing stale remains
        assert!(export.take_stale().is_none());
        assert!(export.current().is_none());
    }
}
