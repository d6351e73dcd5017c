//! Score display
//!
//! Each score is a row of digit sprites. A digit sprite is a square whose
//! UVs select one column of a horizontal 0-9 texture atlas.

use glam::DVec2;

use crate::settings::HudSettings;
use crate::sim::{GameObject, MatchState, Shape, Side};

/// Decimal digits of a value, most significant first
pub fn decimal_digits(mut value: u32) -> Vec<u32> {
    let mut digits = Vec::new();
    loop {
        digits.push(value % 10);
        value /= 10;
        if value == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Digit sprites for `value`, centered on `anchor`
pub fn score_sprites(value: u32, anchor: DVec2, hud: &HudSettings) -> Vec<GameObject> {
    let digits = decimal_digits(value);
    let size = hud.digit_size;
    let shape = Shape::rectangle(size, size);
    let first_x = anchor.x - size * (digits.len() as f64 - 1.0) / 2.0;

    digits
        .iter()
        .enumerate()
        .map(|(i, &digit)| {
            let geometry = shape.generate().atlas_cell(digit, hud.atlas_columns);
            let position = DVec2::new(first_x + size * i as f64, anchor.y);
            GameObject::new(geometry, position, DVec2::splat(size / 2.0))
        })
        .collect()
}

/// Cached digit sprites for both scores
#[derive(Debug, Clone)]
pub struct ScoreBoard {
    hud: HudSettings,
    shown: MatchState,
    left: Vec<GameObject>,
    right: Vec<GameObject>,
}

impl ScoreBoard {
    pub fn new(hud: &HudSettings) -> Self {
        let mut board = Self {
            hud: hud.clone(),
            shown: MatchState::default(),
            left: Vec::new(),
            right: Vec::new(),
        };
        board.rebuild(Side::Left);
        board.rebuild(Side::Right);
        board
    }

    pub fn anchor(&self, side: Side) -> DVec2 {
        match side {
            Side::Left => DVec2::new(-self.hud.anchor_x, self.hud.anchor_y),
            Side::Right => DVec2::new(self.hud.anchor_x, self.hud.anchor_y),
        }
    }

    /// Refresh sprites for whichever score changed
    pub fn update(&mut self, score: &MatchState) {
        if score.left != self.shown.left {
            self.shown.left = score.left;
            self.rebuild(Side::Left);
        }
        if score.right != self.shown.right {
            self.shown.right = score.right;
            self.rebuild(Side::Right);
        }
    }

    pub fn shown(&self) -> MatchState {
        self.shown
    }

    pub fn sprites(&self, side: Side) -> &[GameObject] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn rebuild(&mut self, side: Side) {
        let sprites = score_sprites(self.shown.score(side), self.anchor(side), &self.hud);
        match side {
            Side::Left => self.left = sprites,
            Side::Right => self.right = sprites,
        }
    }
}
