use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::enums::Player;
use crate::geometry::{Groove, Square, Vertex, Wall};
use crate::settings::Settings;

/// A Quoridor game board.
///
/// The board is oblivious to the rules of the game. It accepts pawn moves and
/// wall placements unconditionally, with no bounds or legality checks. Walls
/// are accounted for per player, but a player is never prevented from placing
/// a wall, so a counter can go negative when validation is skipped.
///
/// The full state is observable through [`Board::snapshot`].
#[derive(Debug)]
pub struct Board {
    size: usize,
    pawns: BTreeMap<Player, Square>,
    walls_available: BTreeMap<Player, i64>,
    walled_off_grooves: HashSet<Groove>,
    walled_off_vertices: HashSet<Vertex>,
    current_snapshot: OnceCell<Arc<Snapshot>>,
}

/// An immutable copy of a board's state at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    size: usize,
    pawns: BTreeMap<Player, Square>,
    walls_available: BTreeMap<Player, i64>,
    walled_off_grooves: HashSet<Groove>,
    walled_off_vertices: HashSet<Vertex>,
}

impl Board {
    /// Creates an empty board: no pawns, no walls, each listed player holding
    /// `walls_per_player` walls.
    pub fn create_empty(size: usize, players: &[Player], walls_per_player: i64) -> Self {
        let walls_available = players
            .iter()
            .map(|&player| (player, walls_per_player))
            .collect();
        Board {
            size,
            pawns: BTreeMap::new(),
            walls_available,
            walled_off_grooves: HashSet::new(),
            walled_off_vertices: HashSet::new(),
            current_snapshot: OnceCell::new(),
        }
    }

    pub fn create_from_settings(settings: &Settings) -> Self {
        Self::create_empty(
            settings.board_size(),
            settings.players(),
            i64::from(settings.walls_per_player()),
        )
    }

    /// Creates an independent board in the same state as `snapshot`.
    ///
    /// Mutating the new board affects neither the snapshot nor any other board.
    pub fn from_snapshot(snapshot: Arc<Snapshot>) -> Self {
        Board {
            size: snapshot.size,
            pawns: snapshot.pawns.clone(),
            walls_available: snapshot.walls_available.clone(),
            walled_off_grooves: snapshot.walled_off_grooves.clone(),
            walled_off_vertices: snapshot.walled_off_vertices.clone(),
            current_snapshot: OnceCell::from(snapshot),
        }
    }

    /// Number of rows and columns
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the current state. Repeated calls between mutations share one
    /// snapshot.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current_snapshot
            .get_or_init(|| {
                Arc::new(Snapshot {
                    size: self.size,
                    pawns: self.pawns.clone(),
                    walls_available: self.walls_available.clone(),
                    walled_off_grooves: self.walled_off_grooves.clone(),
                    walled_off_vertices: self.walled_off_vertices.clone(),
                })
            })
            .clone()
    }

    /// Moves `player`'s pawn to `square`, adding the pawn if it is not on the
    /// board yet.
    ///
    /// A cached snapshot nobody else holds is updated in place rather than
    /// rebuilt.
    pub fn move_pawn(&mut self, player: Player, square: Square) {
        self.pawns.insert(player, square);
        if let Some(snapshot) = self.current_snapshot.get_mut().and_then(Arc::get_mut) {
            snapshot.pawns.insert(player, square);
        } else {
            self.current_snapshot.take();
        }
    }

    /// Places `wall` and charges one wall to `player`.
    pub fn place_wall(&mut self, wall: &Wall, player: Player) {
        self.current_snapshot.take();
        self.walled_off_grooves.extend(wall.covered_grooves());
        self.walled_off_vertices.extend(wall.covered_vertices());
        *self.walls_available.entry(player).or_insert(0) -= 1;
    }
}

impl Snapshot {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn pawns(&self) -> &BTreeMap<Player, Square> {
        &self.pawns
    }

    pub fn pawn(&self, player: Player) -> Option<Square> {
        self.pawns.get(&player).copied()
    }

    pub fn is_occupied(&self, square: &Square) -> bool {
        self.pawns.values().any(|pawn| pawn == square)
    }

    pub fn walls_available(&self) -> &BTreeMap<Player, i64> {
        &self.walls_available
    }

    pub fn walled_off_grooves(&self) -> &HashSet<Groove> {
        &self.walled_off_grooves
    }

    pub fn walled_off_vertices(&self) -> &HashSet<Vertex> {
        &self.walled_off_vertices
    }

    pub fn is_walled_off(&self, groove: &Groove) -> bool {
        self.walled_off_grooves.contains(groove)
    }
}
