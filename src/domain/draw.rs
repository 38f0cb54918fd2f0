use itertools::Itertools;
use rand::Rng;
use serde::Serialize;

pub const BALL_COUNT: i32 = 75;

/// Full order in which the balls of a room are called, fixed when the room is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DrawSequence(Vec<i32>);

impl DrawSequence {
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Draws balls in `1..=BALL_COUNT` until every ball has come up once, discarding repeats.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut drawn = [false; BALL_COUNT as usize + 1];
        let mut balls = Vec::with_capacity(BALL_COUNT as usize);
        while balls.len() < BALL_COUNT as usize {
            let ball = rng.gen_range(1..=BALL_COUNT);
            if !drawn[ball as usize] {
                drawn[ball as usize] = true;
                balls.push(ball);
            }
        }
        DrawSequence(balls)
    }

    pub fn is_complete(&self) -> bool {
        self.0.len() == BALL_COUNT as usize
            && self.0.iter().all(|ball| (1..=BALL_COUNT).contains(ball))
            && self.0.iter().all_unique()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }
}

impl From<Vec<i32>> for DrawSequence {
    fn from(balls: Vec<i32>) -> Self {
        DrawSequence(balls)
    }
}
