use rand::Rng;

/// Where die faces come from.
pub trait RandomSource {
    /// Returns a face uniformly distributed in `[1, sides]`.
    fn roll_die(&mut self, sides: u32) -> u32;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn roll_die(&mut self, sides: u32) -> u32 {
        (**self).roll_die(sides)
    }
}

/// Rolls with any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }

    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn roll_die(&mut self, sides: u32) -> u32 {
        unit_to_face(self.0.gen::<f64>(), sides)
    }
}

/// Replays a fixed list of draws in `[0, 1)`, starting over once they run out.
///
/// ```rust
/// # use dice_notation::{FixedDraws, RandomSource};
/// let mut draws = FixedDraws::new(vec![0.99, 0.4]);
/// assert_eq!(draws.roll_die(6), 6);
/// assert_eq!(draws.roll_die(6), 3);
/// assert_eq!(draws.consumed(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FixedDraws {
    draws: Vec<f64>,
    consumed: usize,
}

impl FixedDraws {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            consumed: 0,
        }
    }

    /// Draws that land on the given faces of a die with `sides` sides.
    pub fn faces(sides: u32, faces: &[u32]) -> Self {
        let sides = f64::from(sides.max(1));
        Self::new(
            faces
                .iter()
                .map(|&face| (f64::from(face) - 0.5) / sides)
                .collect::<Vec<_>>(),
        )
    }

    /// How many draws were taken so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RandomSource for FixedDraws {
    fn roll_die(&mut self, sides: u32) -> u32 {
        let unit = match self.draws.len() {
            0 => 0.0,
            len => self.draws[self.consumed % len],
        };
        self.consumed += 1;

        unit_to_face(unit, sides)
    }
}

fn unit_to_face(unit: f64, sides: u32) -> u32 {
    let face = (unit * f64::from(sides)).floor() + 1.0;
    // Float to int casts saturate, the clamp covers draws outside [0, 1)
    (face as u32).min(sides).max(1)
}
